//! A user-placed control point with its assigned parameter and pick state.

use crate::constants::PICK_HALF_SIZE;
use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A control point of the curve
///
/// `t` is written by [`assign_parameters`](crate::modules::parameterize::assign_parameters)
/// and has no meaning before that runs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub t: f64,
    #[serde(default)]
    pub selected: bool,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            t: 0.0,
            selected: false,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Whether `(x, y)` falls inside the square pick region around this point.
    /// All four edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let in_x = self.x - PICK_HALF_SIZE <= x && x <= self.x + PICK_HALF_SIZE;
        let in_y = self.y - PICK_HALF_SIZE <= y && y <= self.y + PICK_HALF_SIZE;
        in_x && in_y
    }
}

impl From<Point> for ControlPoint {
    fn from(p: Point) -> Self {
        ControlPoint::new(p.x, p.y)
    }
}
