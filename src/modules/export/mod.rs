//! Export control points and sampled curves to various formats
//!
//! This module provides functionality to export an editing scene for visualization
//! outside the interactive view.
//!
//! # Available Export Formats
//!
//! - [SVG](svg/index.html) - Export control points, control polygon and sampled curve to an SVG document
//! - [SVG path data](svg_path/index.html) - Export a polyline to SVG path data

pub mod svg;
pub mod svg_path;
