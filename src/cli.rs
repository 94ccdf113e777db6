use std::path::PathBuf;

use clap::Parser;
use rustplot::plot::{AxisStyle, BoundOverrides, LineStyle, PlotColor, PlotConfig};

/// Plots point pairs or a formula in `x` as a coloured text chart.
///
/// Without `--file` or `--expression`, whitespace separated `x y` pairs are
/// read from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Read point pairs from this file.
    #[arg(long, conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// Plot a formula in x, e.g. "sin x * x".
    #[arg(long, allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Print the parsed formula in prefix form before the chart.
    #[arg(long, requires = "expression")]
    pub dump_tree: bool,

    /// Open the interactive formula plotter.
    #[cfg(feature = "tui")]
    #[arg(long, conflicts_with_all = ["file", "expression"])]
    pub interactive: bool,

    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub y_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub y_max: Option<f64>,

    #[arg(long, default_value_t = 6)]
    pub x_ticks: u16,
    #[arg(long, default_value_t = 6)]
    pub y_ticks: u16,

    /// Chart height, including the x-axis line.
    #[arg(long, default_value_t = 22)]
    pub rows: u16,
    /// Chart width, including the y-axis line.
    #[arg(long, default_value_t = 42)]
    pub columns: u16,

    #[arg(long, default_value_t = 8)]
    pub x_number_width: u16,
    #[arg(long, default_value_t = 8)]
    pub y_number_width: u16,
    #[arg(long, default_value_t = 3)]
    pub x_precision: u16,
    #[arg(long, default_value_t = 3)]
    pub y_precision: u16,

    #[arg(long, value_enum, default_value_t = PlotColor::Red)]
    pub x_number_color: PlotColor,
    #[arg(long, value_enum, default_value_t = PlotColor::Purple)]
    pub y_number_color: PlotColor,
    #[arg(long, value_enum, default_value_t = PlotColor::Blue)]
    pub line_color: PlotColor,
    #[arg(long, value_enum, default_value_t = PlotColor::Yellow)]
    pub mark_color: PlotColor,
    #[arg(long, default_value_t = '*')]
    pub mark_char: char,

    /// Draw axes with Unicode box characters instead of the VT100
    /// line-drawing set.
    #[arg(long)]
    pub unicode_lines: bool,
}

impl Args {
    pub fn overrides(&self) -> BoundOverrides {
        BoundOverrides {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }

    /// Plot settings from the command line. Bounds are left at their
    /// defaults; resolve them against the data with [`Args::overrides`].
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            rows: self.rows,
            columns: self.columns,
            x_axis: AxisStyle {
                ticks: self.x_ticks,
                label_width: self.x_number_width,
                precision: self.x_precision,
                label_color: self.x_number_color,
            },
            y_axis: AxisStyle {
                ticks: self.y_ticks,
                label_width: self.y_number_width,
                precision: self.y_precision,
                label_color: self.y_number_color,
            },
            line_color: self.line_color,
            mark_color: self.mark_color,
            mark_char: self.mark_char,
            line_style: if self.unicode_lines {
                LineStyle::Unicode
            } else {
                LineStyle::Vt100
            },
            ..PlotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_library() {
        let args = Args::parse_from(["rustplot"]);
        assert_eq!(args.plot_config(), PlotConfig::default());
        assert_eq!(args.overrides(), BoundOverrides::default());
    }

    #[test]
    fn options_are_applied() {
        let args = Args::parse_from([
            "rustplot",
            "--expression",
            "-x^2",
            "--x-min",
            "-3",
            "--y-max",
            "12.5",
            "--rows",
            "10",
            "--mark-color",
            "light-green",
            "--mark-char",
            "#",
            "--unicode-lines",
        ]);
        assert_eq!(args.expression.as_deref(), Some("-x^2"));

        let overrides = args.overrides();
        assert_eq!(overrides.x_min, Some(-3.0));
        assert_eq!(overrides.y_max, Some(12.5));
        assert_eq!(overrides.x_max, None);

        let config = args.plot_config();
        assert_eq!(config.rows, 10);
        assert_eq!(config.mark_color, PlotColor::LightGreen);
        assert_eq!(config.mark_char, '#');
        assert_eq!(config.line_style, LineStyle::Unicode);
    }

    #[test]
    fn file_and_expression_conflict() {
        let result = Args::try_parse_from(["rustplot", "--file", "a.txt", "--expression", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_colors_are_rejected() {
        let result = Args::try_parse_from(["rustplot", "--line-color", "mauve"]);
        assert!(result.is_err());
    }
}
