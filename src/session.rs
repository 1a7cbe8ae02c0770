//! Interactive editing state: the control point store, display options and the
//! latest sampled approximation of the curve.
//!
//! The curve math in [`modules`](crate::modules) is pure. `CurveSession` is the stateful
//! side a UI layer owns: it receives pointer events in canvas coordinates, keeps the control
//! points and re-runs parameter assignment and sampling whenever the curve changes.
//!
//! # Example
//!
//! ```rust
//! use bezier_sampler::{CurveSession, PlotOption};
//!
//! let mut session = CurveSession::new();
//! session.plot_mode(PlotOption::LineSpline);
//! session.click(0.0, 0.0);
//! session.click(100.0, 0.0);
//! session.click(100.0, 100.0);
//!
//! let spline = session.spline_points();
//! assert_eq!(spline[0].x, 0.0);
//! assert_eq!(spline[spline.len() - 1].y, 100.0);
//! ```

use crate::data::{ControlPoint, Point, SplinePoint};
use crate::error::{BezierError, BezierResult};
use crate::modules::parameterize::{assign_parameters, ParameterizationScheme};
use crate::modules::sample::{sample_bezier, SamplerConfig, Sampling};
use crate::BezierCurve;
use serde::{Deserialize, Serialize};

/// Ordered control points and their selection state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPointStore {
    points: Vec<ControlPoint>,
}

impl ControlPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control point, returning its index
    pub fn push(&mut self, x: f64, y: f64) -> usize {
        self.points.push(ControlPoint::new(x, y));
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(ControlPoint::position).collect()
    }

    /// Update the hover selection for a cursor at `(x, y)`.
    ///
    /// Every point whose pick region contains the cursor becomes selected, all others are
    /// deselected. Returns whether any point is selected.
    pub fn hover(&mut self, x: f64, y: f64) -> bool {
        let mut any = false;
        for p in &mut self.points {
            p.selected = p.contains(x, y);
            any |= p.selected;
        }
        any
    }

    /// Index of the selected point. With overlapping pick regions the last one wins.
    pub fn selected_index(&self) -> Option<usize> {
        self.points.iter().rposition(|p| p.selected)
    }

    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> BezierResult<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(BezierError::IndexOutOfRange { index, len })?;
        point.set_position(x, y);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn as_mut_slice(&mut self) -> &mut [ControlPoint] {
        &mut self.points
    }
}

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Compute and draw the sampled curve
    pub draw_line_spline: bool,
    pub draw_control_polygon: bool,
    pub show_control_points: bool,
    /// Draw the sampled curve as individual points
    pub visualize_with_points: bool,
    /// Draw the sampled curve as a connected polyline
    pub visualize_with_line: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            draw_line_spline: false,
            draw_control_polygon: false,
            show_control_points: true,
            visualize_with_points: true,
            visualize_with_line: false,
        }
    }
}

/// A display or computation option changed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotOption {
    /// Toggle computing and drawing the sampled curve
    LineSpline,
    /// The parameterization selection changed
    Parameterization,
    ControlPolygon,
    SplinePoints,
    SplineLine,
    ControlPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Editing session over one curve
#[derive(Debug, Clone, Default)]
pub struct CurveSession {
    store: ControlPointStore,
    scheme: ParameterizationScheme,
    config: SamplerConfig,
    options: DisplayOptions,
    sampling: Option<Sampling>,
    left_button_down: bool,
    /// Point grabbed by the last left press; kept after release so the trailing click
    /// of a drag does not insert a new point
    drag_target: Option<usize>,
}

impl CurveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SamplerConfig) -> BezierResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn store(&self) -> &ControlPointStore {
        &self.store
    }

    pub fn scheme(&self) -> ParameterizationScheme {
        self.scheme
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// The latest sampling, `None` while the curve is undefined or not being drawn
    pub fn sampling(&self) -> Option<&Sampling> {
        self.sampling.as_ref()
    }

    pub fn spline_points(&self) -> &[SplinePoint] {
        self.sampling
            .as_ref()
            .map(|s| s.points.as_slice())
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.left_button_down && self.drag_target.is_some()
    }

    /// Append a control point and refresh the curve
    pub fn add_point(&mut self, x: f64, y: f64) -> usize {
        let index = self.store.push(x, y);
        log::debug!("control point {} added at ({}, {})", index, x, y);
        self.refresh_spline();
        index
    }

    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> BezierResult<()> {
        self.store.move_point(index, x, y)?;
        self.refresh_spline();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.sampling = None;
        self.drag_target = None;
    }

    pub fn pointer_down(&mut self, button: PointerButton) {
        if button == PointerButton::Left {
            self.drag_target = self.store.selected_index();
            self.left_button_down = true;
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Left {
            self.left_button_down = false;
        }
    }

    /// Drag the grabbed point while the left button is held, otherwise update the hover
    /// selection. Returns whether anything visible changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if self.left_button_down {
            let Some(index) = self.drag_target else {
                return false;
            };
            match self.move_point(index, x, y) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("dropping drag of a missing control point: {}", e);
                    self.drag_target = None;
                    false
                }
            }
        } else {
            let before: Vec<bool> = self.store.iter().map(|p| p.selected).collect();
            self.store.hover(x, y);
            self.store.iter().map(|p| p.selected).ne(before)
        }
    }

    /// A click inserts a point unless it ends a drag. Returns the new point's index.
    pub fn click(&mut self, x: f64, y: f64) -> Option<usize> {
        if self.drag_target.is_some() {
            return None;
        }
        Some(self.add_point(x, y))
    }

    pub fn set_scheme(&mut self, scheme: ParameterizationScheme) {
        self.scheme = scheme;
        self.plot_mode(PlotOption::Parameterization);
    }

    pub fn set_config(&mut self, config: SamplerConfig) -> BezierResult<()> {
        config.validate()?;
        self.config = config;
        self.refresh_spline();
        Ok(())
    }

    pub fn plot_mode(&mut self, option: PlotOption) {
        let options = &mut self.options;
        match option {
            PlotOption::LineSpline => {
                options.draw_line_spline = !options.draw_line_spline;
                if !options.draw_line_spline {
                    self.sampling = None;
                }
                self.refresh_spline();
            }
            PlotOption::Parameterization => self.refresh_spline(),
            PlotOption::ControlPolygon => {
                options.draw_control_polygon = !options.draw_control_polygon
            }
            PlotOption::SplinePoints => {
                options.visualize_with_points = !options.visualize_with_points
            }
            PlotOption::SplineLine => options.visualize_with_line = !options.visualize_with_line,
            PlotOption::ControlPoints => {
                options.show_control_points = !options.show_control_points
            }
        }
    }

    /// Assign parameters to the control points and resample the curve.
    ///
    /// With fewer than two control points the previous sampling is discarded and
    /// `NotEnoughControlPoints` is returned.
    pub fn recompute(&mut self) -> BezierResult<&Sampling> {
        self.sampling = None;
        assign_parameters(self.store.as_mut_slice(), self.scheme)?;
        let curve = BezierCurve::from_control_points(self.store.as_slice())?;
        let sampling: &Sampling = self.sampling.insert(sample_bezier(&curve, &self.config)?);
        Ok(sampling)
    }

    fn refresh_spline(&mut self) {
        if !self.options.draw_line_spline {
            return;
        }
        if let Err(e) = self.recompute() {
            log::debug!("curve not drawn: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;
    use approx::assert_relative_eq;

    fn drawing_session(points: &[(f64, f64)]) -> CurveSession {
        let mut session = CurveSession::new();
        session.plot_mode(PlotOption::LineSpline);
        for &(x, y) in points {
            session.click(x, y);
        }
        session
    }

    #[test]
    fn test_store_hover_and_selection() {
        let mut store = ControlPointStore::new();
        store.push(0.0, 0.0);
        store.push(100.0, 0.0);
        store.push(103.0, 0.0);

        assert!(!store.hover(50.0, 50.0));
        assert_eq!(store.selected_index(), None);

        // overlaps the pick regions of the last two points
        assert!(store.hover(101.0, 2.0));
        assert!(!store.get(0).unwrap().selected);
        assert!(store.get(1).unwrap().selected);
        assert_eq!(store.selected_index(), Some(2));

        assert!(store.hover(1.0, 1.0));
        assert_eq!(store.selected_index(), Some(0));
    }

    #[test]
    fn test_store_move_out_of_range() {
        let mut store = ControlPointStore::new();
        store.push(0.0, 0.0);
        assert!(matches!(
            store.move_point(3, 1.0, 1.0),
            Err(BezierError::IndexOutOfRange { index: 3, len: 1 })
        ));
        store.move_point(0, 1.0, 2.0).unwrap();
        assert_eq!(store.positions(), vec![pt!(1, 2)]);
    }

    #[test]
    fn test_spline_is_not_computed_until_enabled() {
        let mut session = CurveSession::new();
        session.click(0.0, 0.0);
        session.click(100.0, 0.0);
        assert!(session.sampling().is_none());

        session.plot_mode(PlotOption::LineSpline);
        assert!(session.options().draw_line_spline);
        assert_eq!(session.spline_points()[0], pt!(0, 0));

        session.plot_mode(PlotOption::LineSpline);
        assert!(session.sampling().is_none());
        assert!(session.spline_points().is_empty());
    }

    #[test]
    fn test_single_point_leaves_curve_undefined() {
        let mut session = drawing_session(&[(10.0, 10.0)]);
        assert!(session.sampling().is_none());
        assert!(matches!(
            session.recompute(),
            Err(BezierError::NotEnoughControlPoints { found: 1 })
        ));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_clicks_build_curve() {
        let session = drawing_session(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let spline = session.spline_points();
        assert_eq!(spline[0], pt!(0, 0));
        assert_eq!(spline[spline.len() - 1], pt!(100, 100));

        let t: Vec<f64> = session.store().iter().map(|p| p.t).collect();
        assert_eq!(t, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_scheme_change_reassigns_parameters() {
        let mut session = drawing_session(&[(0.0, 0.0), (10.0, 0.0), (10.0, 30.0), (70.0, 30.0)]);
        let before = session.sampling().cloned().unwrap();

        session.set_scheme(ParameterizationScheme::Chordal);
        assert_eq!(session.scheme(), ParameterizationScheme::Chordal);
        let t: Vec<f64> = session.store().iter().map(|p| p.t).collect();
        assert_relative_eq!(t[1], 0.1);
        assert_relative_eq!(t[2], 0.4);

        // the curve itself does not depend on the parameters
        assert_eq!(session.sampling().unwrap(), &before);
    }

    #[test]
    fn test_drag_moves_point_and_suppresses_click() {
        let mut session = drawing_session(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

        // hover over the middle point, press, drag and release
        assert!(session.pointer_move(101.0, 1.0));
        assert_eq!(session.store().selected_index(), Some(1));
        session.pointer_down(PointerButton::Left);
        assert!(session.is_dragging());
        assert!(session.pointer_move(50.0, 50.0));
        session.pointer_up(PointerButton::Left);
        assert!(!session.is_dragging());

        assert_eq!(session.store().get(1).unwrap().position(), pt!(50, 50));
        assert_eq!(session.click(50.0, 50.0), None);
        assert_eq!(session.store().len(), 3);

        // the sampled curve follows the moved point
        let sampling = session.sampling().unwrap();
        let curve = BezierCurve::new(session.store().positions()).unwrap();
        let mid = sampling.len() / 2;
        let expected = curve.point_at(sampling.parameters[mid]);
        assert_eq!(sampling.points[mid], expected);

        // pressing on empty canvas clears the drag target, so the next click inserts
        session.pointer_move(300.0, 300.0);
        session.pointer_down(PointerButton::Left);
        session.pointer_up(PointerButton::Left);
        assert_eq!(session.click(300.0, 300.0), Some(3));
        assert_eq!(*session.spline_points().last().unwrap(), pt!(300, 300));
    }

    #[test]
    fn test_right_button_does_not_drag() {
        let mut session = drawing_session(&[(0.0, 0.0), (100.0, 0.0)]);
        session.pointer_move(0.0, 0.0);
        session.pointer_down(PointerButton::Right);
        assert!(!session.is_dragging());
        session.pointer_move(20.0, 20.0);
        assert_eq!(session.store().get(0).unwrap().position(), pt!(0, 0));
        assert_eq!(session.store().selected_index(), None);
    }

    #[test]
    fn test_display_toggles() {
        let mut session = CurveSession::new();
        assert_eq!(*session.options(), DisplayOptions::default());

        session.plot_mode(PlotOption::ControlPolygon);
        session.plot_mode(PlotOption::SplinePoints);
        session.plot_mode(PlotOption::SplineLine);
        session.plot_mode(PlotOption::ControlPoints);

        let options = session.options();
        assert!(options.draw_control_polygon);
        assert!(!options.visualize_with_points);
        assert!(options.visualize_with_line);
        assert!(!options.show_control_points);
        assert!(!options.draw_line_spline);
    }

    #[test]
    fn test_set_config() {
        let mut session = drawing_session(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let fine = session.sampling().unwrap().len();

        session
            .set_config(SamplerConfig::default().with_tolerance(1.0).with_max_step(1.0))
            .unwrap();
        assert!(session.sampling().unwrap().len() < fine);

        assert!(matches!(
            session.set_config(SamplerConfig::default().with_tolerance(-1.0)),
            Err(BezierError::InvalidConfig(_))
        ));
        assert_eq!(session.config().tolerance, 1.0);
        assert!(CurveSession::with_config(SamplerConfig::default().with_max_samples(1)).is_err());
    }

    #[test]
    fn test_clear() {
        let mut session = drawing_session(&[(0.0, 0.0), (100.0, 0.0)]);
        session.clear();
        assert!(session.store().is_empty());
        assert!(session.sampling().is_none());
    }
}
