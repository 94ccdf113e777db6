//! # rustplot
//!
//! Plots point data or a formula in `x` as a coloured character-grid chart.
//!
//! ```
//! use rustplot::plot::{plot, BoundOverrides, PlotConfig};
//!
//! let overrides = BoundOverrides::default();
//! let mut config = PlotConfig::default();
//! let mut points = rustplot::expression_points("x^2 - 4", &overrides, config.columns).unwrap();
//! config.bounds = overrides.resolve(&points);
//!
//! let mut out = Vec::new();
//! plot(&mut out, &config, &mut points).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("\x1b[0m"));
//! ```

pub mod error;
pub mod expr;
pub mod plot;
pub mod points;

use crate::error::ExprError;
use crate::plot::BoundOverrides;
use crate::points::{sample, sample_count, Point};

/// Compiles `source` and samples it over the x range of `overrides` (or
/// `[-10, 10]`) for a chart `columns` wide.
pub fn expression_points(
    source: &str,
    overrides: &BoundOverrides,
    columns: u16,
) -> Result<Vec<Point>, ExprError> {
    let expr = expr::compile(source)?;
    let (x_min, x_max) = overrides.sample_range();
    Ok(sample(&expr, x_min, x_max, sample_count(columns)))
}
