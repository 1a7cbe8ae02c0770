// Plot the curvature adaptive sampling of a random control polygon, and how the
// number of emitted points grows as the sagitta tolerance shrinks.
//
// Writes two images into the working directory:
// - adaptive_sampling.png: control polygon, sampled points and the parameter of each
//   control point under every parameterization scheme
// - sample_count_vs_tolerance.png: mean sample count over random curves per tolerance

use bezier_sampler::modules::parameterize::estimate_parameters;
use bezier_sampler::{pt, sample_curve, ParameterizationScheme, Point, SamplerConfig};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const CURVE_COUNT: usize = 50;
const CONTROL_POINT_COUNT: usize = 6;
const TOLERANCES: [f64; 7] = [1.0, 0.3, 0.1, 0.03, 0.01, 0.003, 0.001];

/// Control points spread left to right with normally distributed height
fn random_control_polygon(
    rng: &mut StdRng,
    height: &Normal<f64>,
    jitter: &Normal<f64>,
    count: usize,
) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = 50.0 + 700.0 * i as f64 / (count - 1) as f64 + jitter.sample(rng);
            pt!(x, height.sample(rng))
        })
        .collect()
}

fn plot_sampling(points: &[Point]) -> Result<(), Box<dyn std::error::Error>> {
    let config = SamplerConfig::default().with_tolerance(0.5);
    let sampling = sample_curve(points, &config)?;
    info!(
        "tolerance {} -> {} samples ({} fallback steps)",
        config.tolerance,
        sampling.len(),
        sampling.fallback_steps
    );

    let root = BitMapBackend::new("adaptive_sampling.png", (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(700);

    let mut chart = ChartBuilder::on(&left)
        .caption(
            format!("Adaptive sampling, {} points", sampling.len()),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..800.0, 0.0..600.0)?;
    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.x, p.y)), &BLACK))?
        .label("Control polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(
            sampling
                .points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 2, RED.filled())),
        )?
        .label("Samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 2, RED.filled()));

    chart.configure_series_labels().border_style(&BLACK).draw()?;

    let mut chart = ChartBuilder::on(&right)
        .caption("Control point parameters", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..(points.len() - 1) as f64, 0.0..1.0)?;
    chart.configure_mesh().x_desc("index").y_desc("t").draw()?;

    let schemes = [
        (ParameterizationScheme::Uniform, BLUE),
        (ParameterizationScheme::Chordal, GREEN),
        (ParameterizationScheme::Centripetal, MAGENTA),
    ];
    for (scheme, color) in schemes {
        let t_values = estimate_parameters(points, scheme)?;
        chart
            .draw_series(LineSeries::new(
                t_values.iter().enumerate().map(|(i, &t)| (i as f64, t)),
                &color,
            ))?
            .label(format!("{:?}", scheme))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1)));
    }
    chart.configure_series_labels().border_style(&BLACK).draw()?;

    root.present()?;
    Ok(())
}

fn plot_sample_counts(curves: &[Vec<Point>]) -> Result<(), Box<dyn std::error::Error>> {
    let mut means = Vec::with_capacity(TOLERANCES.len());
    for tolerance in TOLERANCES {
        let config = SamplerConfig::default()
            .with_tolerance(tolerance)
            .with_max_samples(100_000);
        let mut total = 0;
        for points in curves {
            total += sample_curve(points, &config)?.len();
        }
        let mean = total as f64 / curves.len() as f64;
        info!("tolerance {:>6} -> mean {:.1} samples", tolerance, mean);
        means.push((tolerance, mean));
    }

    let max_mean = means.iter().map(|&(_, m)| m).fold(0.0, f64::max);

    let root = BitMapBackend::new("sample_count_vs_tolerance.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean sample count", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0.0005..2.0).log_scale(), 0.0..max_mean * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("sagitta tolerance")
        .y_desc("samples")
        .draw()?;

    chart.draw_series(LineSeries::new(means.iter().copied(), &RED))?;
    chart.draw_series(
        means
            .iter()
            .map(|&(tolerance, mean)| Circle::new((tolerance, mean), 3, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let height = Normal::new(300.0, 120.0)?;
    let jitter = Normal::new(0.0, 20.0)?;
    let curves: Vec<Vec<Point>> = (0..CURVE_COUNT)
        .map(|_| random_control_polygon(&mut rng, &height, &jitter, CONTROL_POINT_COUNT))
        .collect();

    plot_sampling(&curves[0])?;
    plot_sample_counts(&curves)?;

    info!("plots written to adaptive_sampling.png and sample_count_vs_tolerance.png");
    Ok(())
}
