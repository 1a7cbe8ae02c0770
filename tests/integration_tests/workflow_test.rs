use approx::assert_relative_eq;
use bezier_sampler::modules::export::svg_path::ToSvgPath;
use bezier_sampler::modules::parameterize::estimate_parameters;
use bezier_sampler::modules::parse::{json, svg_path::FromSvgPath};
use bezier_sampler::{
    curve, pt, sample_curve, BezierCurve, CurveSession, ParameterizationScheme, PlotOption, Point,
    PointerButton, SamplerConfig,
};

#[test]
fn test_complete_workflow() {
    // Control points as a UI would hand them over
    let points = json::parse_points(
        r#"[{"x": 0, "y": 0}, {"x": 100, "y": 0}, {"x": 100, "y": 100}]"#,
    )
    .unwrap();

    // Parameters under each scheme
    let uniform = estimate_parameters(&points, ParameterizationScheme::Uniform).unwrap();
    assert_eq!(uniform, vec![0.0, 0.5, 1.0]);
    let chordal = estimate_parameters(&points, ParameterizationScheme::Chordal).unwrap();
    assert_relative_eq!(chordal[1], 0.5);
    let centripetal = estimate_parameters(&points, ParameterizationScheme::Centripetal).unwrap();
    assert_relative_eq!(centripetal[1], 0.5);

    // Adaptive sampling of the quadratic
    let curve = curve!(points.clone()).unwrap();
    assert_eq!(curve.point_at(0.5), pt!(75, 25));

    let sampling = sample_curve(&points, &SamplerConfig::default()).unwrap();
    assert_eq!(sampling.points[0], pt!(0, 0));
    assert_eq!(*sampling.points.last().unwrap(), pt!(100, 100));
    assert!(!sampling.truncated);

    // Export the polyline and read it back
    let path_data = sampling.to_svg_path();
    let parsed = Vec::<Point>::from_svg_path(&path_data).unwrap();
    assert_eq!(parsed, sampling.points);
}

#[test]
fn test_collinear_control_points() {
    let points = vec![pt!(0, 0), pt!(10, 0), pt!(20, 0), pt!(30, 0)];
    let sampling = sample_curve(&points, &SamplerConfig::default()).unwrap();

    assert!(sampling.points.iter().all(|p| p.x.is_finite() && p.y == 0.0));
    assert_eq!(*sampling.points.last().unwrap(), pt!(30, 0));
    assert!(sampling.fallback_steps > 0);
}

#[test]
fn test_interactive_session() {
    let mut session = CurveSession::new();
    session.plot_mode(PlotOption::LineSpline);
    session.set_scheme(ParameterizationScheme::Centripetal);

    for &(x, y) in &[(50.0, 50.0), (150.0, 250.0), (300.0, 40.0), (400.0, 200.0)] {
        session.click(x, y);
    }
    let before = session.spline_points().to_vec();
    assert_eq!(before[0], pt!(50, 50));
    assert_eq!(*before.last().unwrap(), pt!(400, 200));

    // drag the last point
    session.pointer_move(402.0, 198.0);
    session.pointer_down(PointerButton::Left);
    session.pointer_move(420.0, 260.0);
    session.pointer_up(PointerButton::Left);
    assert_eq!(session.click(420.0, 260.0), None);

    let after = session.spline_points();
    assert_eq!(*after.last().unwrap(), pt!(420, 260));
    assert_ne!(before, after);

    // the session agrees with sampling the same points directly
    let direct = sample_curve(&session.store().positions(), session.config()).unwrap();
    assert_eq!(direct.points, after);

    let t: Vec<f64> = session.store().iter().map(|p| p.t).collect();
    assert_eq!(t[0], 0.0);
    assert_eq!(t[3], 1.0);
    assert!(t.windows(2).all(|w| w[0] <= w[1]));
}

/// Half circle of radius 200 through `count` control points
fn half_circle(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let a = i as f64 / (count - 1) as f64 * std::f64::consts::PI;
            pt!(300.0 + 200.0 * a.cos(), 300.0 + 200.0 * a.sin())
        })
        .collect()
}

#[test]
fn test_high_degree_curve_stays_finite() {
    // 1100 points is past the degree where C(n/2, n) no longer fits in an f64
    for count in [60, 1100] {
        let points = half_circle(count);

        let curve = BezierCurve::new(points.clone()).unwrap();
        assert_eq!(curve.degree(), count - 1);

        let sampling = sample_curve(&points, &SamplerConfig::default()).unwrap();
        assert!(
            sampling.points.iter().all(Point::is_finite),
            "non-finite sample for {count} points"
        );
        assert_eq!(sampling.points[0], points[0], "{count} points");
        assert_eq!(*sampling.points.last().unwrap(), points[count - 1], "{count} points");
        assert!(sampling.len() <= 1000);
        // the arc bends everywhere, so the sagitta rule drives every step
        assert_eq!(sampling.fallback_steps, 0, "{count} points");
    }
}
