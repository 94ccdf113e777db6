use clap::ValueEnum;

use crate::error::ConfigError;
use crate::points::Point;

/// Terminal colours, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotColor {
    Black,
    Red,
    Green,
    Orange,
    Blue,
    Purple,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightPurple,
    LightCyan,
    White,
    NoColor,
}

impl PlotColor {
    /// Parameters of the SGR escape selecting this colour.
    pub fn sgr_code(self) -> &'static str {
        match self {
            PlotColor::Black => "0;30",
            PlotColor::Red => "0;31",
            PlotColor::Green => "0;32",
            PlotColor::Orange => "0;33",
            PlotColor::Blue => "0;34",
            PlotColor::Purple => "0;35",
            PlotColor::Cyan => "0;36",
            PlotColor::LightGray => "0;37",
            PlotColor::DarkGray => "1;30",
            PlotColor::LightRed => "1;31",
            PlotColor::LightGreen => "1;32",
            PlotColor::Yellow => "1;33",
            PlotColor::LightBlue => "1;34",
            PlotColor::LightPurple => "1;35",
            PlotColor::LightCyan => "1;36",
            PlotColor::White => "1;37",
            PlotColor::NoColor => "0",
        }
    }
}

/// How axis lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// DEC special graphics selected with `ESC(0`.
    #[default]
    Vt100,
    /// Unicode box-drawing characters.
    Unicode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// Per-axis tick and label settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub ticks: u16,
    pub label_width: u16,
    pub precision: u16,
    pub label_color: PlotColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Total rows, counting the x-axis line but not the tick-label line.
    pub rows: u16,
    /// Total columns, counting the y-axis line but not the label margin.
    pub columns: u16,
    pub bounds: Bounds,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub line_color: PlotColor,
    pub mark_color: PlotColor,
    pub mark_char: char,
    pub line_style: LineStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            rows: 22,
            columns: 42,
            bounds: Bounds::default(),
            x_axis: AxisStyle {
                ticks: 6,
                label_width: 8,
                precision: 3,
                label_color: PlotColor::Red,
            },
            y_axis: AxisStyle {
                ticks: 6,
                label_width: 8,
                precision: 3,
                label_color: PlotColor::Purple,
            },
            line_color: PlotColor::Blue,
            mark_color: PlotColor::Yellow,
            mark_char: '*',
            line_style: LineStyle::Vt100,
        }
    }
}

impl PlotConfig {
    /// Checks the layout constraints; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.columns < 3 {
            return Err(ConfigError::GridTooSmall);
        }
        if self.y_axis.label_width > self.columns / 5 {
            return Err(ConfigError::LabelTooWide);
        }
        if self.x_axis.ticks > self.columns {
            return Err(ConfigError::TooManyXTicks);
        }
        if self.y_axis.ticks > self.rows {
            return Err(ConfigError::TooManyYTicks);
        }
        if self.x_axis.ticks < 2 {
            return Err(ConfigError::TooFewXTicks);
        }
        if self.y_axis.ticks < 2 {
            return Err(ConfigError::TooFewYTicks);
        }
        // negated so that NaN bounds are rejected too
        if !(self.bounds.x_min < self.bounds.x_max) {
            return Err(ConfigError::EmptyXRange);
        }
        if !(self.bounds.y_min < self.bounds.y_max) {
            return Err(ConfigError::EmptyYRange);
        }
        Ok(())
    }
}

/// Axis bounds given by the user. Missing ones come from the data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundOverrides {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl BoundOverrides {
    /// The x interval to sample a formula over.
    pub fn sample_range(&self) -> (f64, f64) {
        let defaults = Bounds::default();
        (
            self.x_min.unwrap_or(defaults.x_min),
            self.x_max.unwrap_or(defaults.x_max),
        )
    }

    /// Fills the missing bounds with the extent of the finite coordinates
    /// in `points`. An axis with no finite data keeps the default `±10`; a
    /// derived range of zero width is widened by one on each side.
    pub fn resolve(&self, points: &[Point]) -> Bounds {
        let defaults = Bounds::default();
        let (x_min, x_max) = resolve_axis(
            self.x_min,
            self.x_max,
            points.iter().map(|p| p.x),
            (defaults.x_min, defaults.x_max),
        );
        let (y_min, y_max) = resolve_axis(
            self.y_min,
            self.y_max,
            points.iter().map(|p| p.y),
            (defaults.y_min, defaults.y_max),
        );
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn resolve_axis(
    min: Option<f64>,
    max: Option<f64>,
    values: impl Iterator<Item = f64>,
    defaults: (f64, f64),
) -> (f64, f64) {
    if let (Some(min), Some(max)) = (min, max) {
        return (min, max);
    }

    let extent = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });
    let (data_min, data_max) = match extent {
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some(extent) => extent,
        None => defaults,
    };

    (min.unwrap_or(data_min), max.unwrap_or(data_max))
}
