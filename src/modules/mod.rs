//! Curve math (binomial coefficients, parameterization, adaptive sampling) and
//! import/export of control points and sampled curves.

pub mod binomial;
pub mod export;
pub mod parameterize;
pub mod parse;
pub mod sample;
