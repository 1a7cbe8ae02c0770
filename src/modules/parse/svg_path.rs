//! Read control points from SVG path data
//!
//! The vertices of a polyline path become the control points, in order. Supported commands
//! are `M`, `L`, `H`, `V` and `Z` in both absolute and relative form. Curve commands are
//! rejected since their control points would be ambiguous.
//!
//! ```rust
//! use bezier_sampler::{pt, Point, modules::parse::svg_path::FromSvgPath};
//!
//! let points = Vec::<Point>::from_svg_path("M0,0 L100,0 l0,100").unwrap();
//! assert_eq!(points, vec![pt!(0, 0), pt!(100, 0), pt!(100, 100)]);
//! ```

use crate::data::Point;
use crate::error::{BezierError, BezierResult};

/// Parse SVG path data into a sequence of points
pub trait FromSvgPath: Sized {
    /// Parse from SVG path data string
    fn from_svg_path(data: &str) -> BezierResult<Self>;
}

impl FromSvgPath for Vec<Point> {
    fn from_svg_path(data: &str) -> BezierResult<Self> {
        let mut points = vec![];
        let mut current_command = None;
        let mut numbers = vec![];
        let mut current_number = String::new();

        // Process each character
        for c in data.chars() {
            match c {
                'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'Z' | 'z' => {
                    flush_number(&mut current_number, &mut numbers)?;
                    if let Some(command) = current_command {
                        process_command(command, &numbers, &mut points)?;
                    }
                    numbers.clear();
                    current_command = Some(c);
                }
                '0'..='9' | '.' | 'e' | 'E' => current_number.push(c),
                '-' | '+' => {
                    // a sign starts a new number unless it belongs to an exponent
                    if !current_number.ends_with(['e', 'E']) {
                        flush_number(&mut current_number, &mut numbers)?;
                    }
                    current_number.push(c);
                }
                ',' | ' ' | '\t' | '\n' | '\r' => flush_number(&mut current_number, &mut numbers)?,
                other => {
                    return Err(BezierError::Parse(format!(
                        "unsupported path command '{}'",
                        other
                    )))
                }
            }
        }

        flush_number(&mut current_number, &mut numbers)?;
        if let Some(command) = current_command {
            process_command(command, &numbers, &mut points)?;
        } else if !numbers.is_empty() {
            return Err(BezierError::Parse(
                "path data must start with a command".to_string(),
            ));
        }

        Ok(points)
    }
}

fn flush_number(current_number: &mut String, numbers: &mut Vec<f64>) -> BezierResult<()> {
    if !current_number.is_empty() {
        let value = current_number
            .parse::<f64>()
            .map_err(|e| BezierError::Parse(format!("invalid number '{}': {}", current_number, e)))?;
        numbers.push(value);
        current_number.clear();
    }
    Ok(())
}

fn process_command(command: char, numbers: &[f64], points: &mut Vec<Point>) -> BezierResult<()> {
    let current = points.last().copied().unwrap_or_default();
    let relative = command.is_ascii_lowercase();
    let origin = if relative { current } else { Point::default() };

    let arity = match command.to_ascii_uppercase() {
        'M' | 'L' => 2,
        'H' | 'V' => 1,
        _ => 0,
    };
    if arity == 0 {
        if !numbers.is_empty() {
            return Err(BezierError::Parse(format!(
                "'{}' takes no arguments",
                command
            )));
        }
        // close the polygon on its first vertex
        if let Some(&first) = points.first() {
            if current != first {
                points.push(first);
            }
        }
        return Ok(());
    }

    if numbers.is_empty() || numbers.len() % arity != 0 {
        return Err(BezierError::Parse(format!(
            "'{}' expects a multiple of {} numbers, got {}",
            command,
            arity,
            numbers.len()
        )));
    }

    for chunk in numbers.chunks(arity) {
        let last = points.last().copied().unwrap_or_default();
        let base = if relative { last } else { origin };
        let next = match command.to_ascii_uppercase() {
            'H' => Point::new(base.x + chunk[0], last.y),
            'V' => Point::new(last.x, base.y + chunk[0]),
            _ => Point::new(base.x + chunk[0], base.y + chunk[1]),
        };
        points.push(next);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::export::svg_path::ToSvgPath;
    use crate::pt;

    #[test]
    fn test_polyline_commands() {
        struct SvgPathParseTestCase<'a> {
            name: &'a str,
            data: &'a str,
            expected: Vec<Point>,
        }

        let test_cases = [
            SvgPathParseTestCase {
                name: "absolute",
                data: "M10,20 L30,40 L50,20",
                expected: vec![pt!(10, 20), pt!(30, 40), pt!(50, 20)],
            },
            SvgPathParseTestCase {
                name: "implicit_line_to",
                data: "M0 0 L10 0 20 5",
                expected: vec![pt!(0, 0), pt!(10, 0), pt!(20, 5)],
            },
            SvgPathParseTestCase {
                name: "relative",
                data: "m5,5 l10,0 l0,10",
                expected: vec![pt!(5, 5), pt!(15, 5), pt!(15, 15)],
            },
            SvgPathParseTestCase {
                name: "horizontal_vertical",
                data: "M0,0 H100 V50 h-20 v-10",
                expected: vec![pt!(0, 0), pt!(100, 0), pt!(100, 50), pt!(80, 50), pt!(80, 40)],
            },
            SvgPathParseTestCase {
                name: "closed",
                data: "M0,0 L10,0 L10,10 Z",
                expected: vec![pt!(0, 0), pt!(10, 0), pt!(10, 10), pt!(0, 0)],
            },
            SvgPathParseTestCase {
                name: "signs_and_exponents",
                data: "M1e2-5L-2.5e-1,+3",
                expected: vec![pt!(100, -5), pt!(-0.25, 3)],
            },
            SvgPathParseTestCase {
                name: "empty",
                data: "",
                expected: vec![],
            },
        ];

        for case in test_cases {
            let parsed = Vec::<Point>::from_svg_path(case.data)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", case.name, e));
            assert_eq!(parsed, case.expected, "Test case: {}", case.name);
        }
    }

    #[test]
    fn test_rejects_curves_and_garbage() {
        for bad in ["M0,0 C1,1 2,2 3,3", "M0,0 L1", "10,20", "M0,0 L1..2,3", "M0,0 Z1"] {
            assert!(
                matches!(Vec::<Point>::from_svg_path(bad), Err(BezierError::Parse(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_round_trip_export_and_then_parse() {
        let points = vec![pt!(10, 20), pt!(20.5, 30), pt!(-30, 40.25)];
        let parsed = Vec::<Point>::from_svg_path(&points.to_svg_path()).unwrap();
        assert_eq!(parsed, points);
    }
}
