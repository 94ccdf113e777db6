//! Character-grid chart rendering.

pub mod chart;
pub mod config;
pub mod render;

pub use chart::{Chart, Glyph, LineGlyph, Segment};
pub use config::{AxisStyle, BoundOverrides, Bounds, LineStyle, PlotColor, PlotConfig};
pub use render::{plot, render};
