use std::cmp::Ordering;
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::chart::{Chart, LineBuilder, LineGlyph, Segment};
use super::config::PlotConfig;
use crate::error::ConfigError;
use crate::points::Point;

/// Renders `points` and writes the chart to `out`.
///
/// A configuration that fails validation produces a single `Error: ...`
/// line on `out` and no chart.
pub fn plot<W: Write>(out: &mut W, config: &PlotConfig, points: &mut [Point]) -> io::Result<()> {
    match render(config, points) {
        Ok(chart) => chart.write_ansi(out, config.line_style),
        Err(err) => writeln!(out, "Error: {}.", err),
    }
}

/// Lays out the chart. `points` is sorted in place as a side effect.
pub fn render(config: &PlotConfig, points: &mut [Point]) -> Result<Chart, ConfigError> {
    config.validate()?;
    sort_points(points);

    let grid = Grid::new(config);
    let mut lines = Vec::with_capacity(grid.rows + 2);
    for row in (0..grid.rows).rev() {
        lines.push(grid.plot_row(row, points));
    }
    lines.push(grid.axis_line());
    lines.push(grid.tick_labels());

    Ok(Chart { lines })
}

/// Descending `y`, then ascending `x`.
pub fn sort_points(points: &mut [Point]) {
    points.sort_by(compare_points);
}

fn compare_points(a: &Point, b: &Point) -> Ordering {
    b.y.total_cmp(&a.y).then_with(|| a.x.total_cmp(&b.x))
}

/// Whether index `index` of an axis `length` cells long carries one of
/// `ticks` ticks. Both ends always do. Spacing counts the axis corner as
/// well, so ticks are `(length + 1) / (ticks - 1)` cells apart.
pub(crate) fn is_tick(index: usize, length: usize, ticks: u16) -> bool {
    if index == 0 || index + 1 == length {
        return true;
    }
    if ticks < 2 {
        return false;
    }
    let per_tick = (length + 1) as f64 / (ticks - 1) as f64;
    (index as f64 / per_tick).floor() < ((index + 1) as f64 / per_tick).floor()
}

/// Value at the lower edge of cell `index` out of `count`. Cell `count - 1`
/// is anchored exactly at `max`.
fn anchor(min: f64, max: f64, index: usize, count: usize) -> f64 {
    if index + 1 == count {
        return max;
    }
    index as f64 / (count - 1) as f64 * (max - min) + min
}

fn quantize(value: f64, scale: f64) -> f64 {
    (value * scale).floor()
}

/// The interior plotting area with its quantised cell edges.
struct Grid<'a> {
    config: &'a PlotConfig,
    /// Interior rows, counted from the bottom.
    rows: usize,
    columns: usize,
    x_scale: f64,
    y_scale: f64,
    /// `columns + 1` quantised lower edges; the last is the upper edge of
    /// the final column.
    x_edges: Vec<f64>,
    y_edges: Vec<f64>,
    /// Width of the left margin: the configured label width, or the widest
    /// y label when one does not fit.
    margin_width: usize,
}

impl<'a> Grid<'a> {
    fn new(config: &'a PlotConfig) -> Self {
        let rows = config.rows as usize - 1;
        let columns = config.columns as usize - 1;
        let b = &config.bounds;
        let x_scale = 10f64.powi(config.x_axis.precision as i32);
        let y_scale = 10f64.powi(config.y_axis.precision as i32);

        let x_edges = (0..=columns)
            .map(|c| quantize(anchor(b.x_min, b.x_max, c, columns), x_scale))
            .collect();
        let y_edges = (0..=rows)
            .map(|r| quantize(anchor(b.y_min, b.y_max, r, rows), y_scale))
            .collect();

        let y_axis = &config.y_axis;
        let margin_width = (0..rows)
            .filter(|&r| r + 1 == rows || is_tick(r, rows, y_axis.ticks))
            .map(|r| format_value(anchor(b.y_min, b.y_max, r, rows), y_axis.precision).width())
            .fold(y_axis.label_width as usize, usize::max);

        Grid {
            config,
            rows,
            columns,
            x_scale,
            y_scale,
            x_edges,
            y_edges,
            margin_width,
        }
    }

    fn row_contains(&self, row: usize, y: f64) -> bool {
        within(&self.y_edges, row, quantize(y, self.y_scale))
    }

    fn column_contains(&self, column: usize, x: f64) -> bool {
        within(&self.x_edges, column, quantize(x, self.x_scale))
    }

    #[cfg(test)]
    fn contains(&self, row: usize, column: usize, point: &Point) -> bool {
        self.row_contains(row, point.y) && self.column_contains(column, point.x)
    }

    fn x_anchor(&self, column: usize) -> f64 {
        let b = &self.config.bounds;
        anchor(b.x_min, b.x_max, column, self.columns)
    }

    fn y_anchor(&self, row: usize) -> f64 {
        let b = &self.config.bounds;
        anchor(b.y_min, b.y_max, row, self.rows)
    }

    fn y_label(&self, row: usize) -> String {
        let label = format_value(self.y_anchor(row), self.config.y_axis.precision);
        let padding = self.margin_width.saturating_sub(label.width());
        format!("{}{}", " ".repeat(padding), label)
    }

    fn x_label(&self, column: usize) -> String {
        let axis = &self.config.x_axis;
        format!(
            "{:<width$.prec$}",
            self.x_anchor(column),
            width = axis.label_width as usize,
            prec = axis.precision as usize
        )
    }

    fn margin(&self) -> String {
        " ".repeat(self.margin_width)
    }

    fn plot_row(&self, row: usize, points: &[Point]) -> Vec<Segment> {
        let config = self.config;
        let mut line = LineBuilder::default();

        let top = row + 1 == self.rows;
        if top || is_tick(row, self.rows, config.y_axis.ticks) {
            line.text(Some(config.y_axis.label_color), self.y_label(row));
            let glyph = if top { LineGlyph::TopLeft } else { LineGlyph::TeeRight };
            line.line(config.line_color, glyph);
        } else {
            line.text(None, self.margin());
            line.line(config.line_color, LineGlyph::Vertical);
        }

        let in_row: Vec<&Point> = points
            .iter()
            .filter(|p| self.row_contains(row, p.y))
            .collect();
        for column in 0..self.columns {
            match in_row.iter().find(|p| self.column_contains(column, p.x)) {
                Some(_) => line.text(Some(config.mark_color), config.mark_char.to_string()),
                None => line.text(None, " "),
            };
        }

        line.finish()
    }

    fn axis_line(&self) -> Vec<Segment> {
        let config = self.config;
        let mut line = LineBuilder::default();
        line.text(None, self.margin());
        line.line(config.line_color, LineGlyph::BottomLeft);
        for column in 0..self.columns {
            let glyph = if column + 1 == self.columns {
                LineGlyph::BottomRight
            } else if is_tick(column, self.columns, config.x_axis.ticks) {
                LineGlyph::TeeUp
            } else {
                LineGlyph::Horizontal
            };
            line.line(config.line_color, glyph);
        }
        line.finish()
    }

    /// Labels start under their tick. A label that would run into the
    /// next one, or into the final label, is left out.
    fn tick_labels(&self) -> Vec<Segment> {
        let config = self.config;
        let color = Some(config.x_axis.label_color);
        let last = self.columns - 1;
        let mut line = LineBuilder::default();
        line.text(None, format!("{} ", self.margin()));

        let mut column = 0;
        while column < last {
            if is_tick(column, self.columns, config.x_axis.ticks) {
                let label = self.x_label(column);
                let width = label.width();
                if column + width <= last {
                    line.text(color, label);
                    column += width;
                    continue;
                }
            }
            line.text(None, " ");
            column += 1;
        }
        line.text(color, self.x_label(last));

        line.finish()
    }
}

fn format_value(value: f64, precision: u16) -> String {
    format!("{:.prec$}", value, prec = precision as usize)
}

/// Half-open `[edges[i], edges[i + 1])`, closed for the final cell.
fn within(edges: &[f64], index: usize, q: f64) -> bool {
    let lower = edges[index];
    let upper = edges[index + 1];
    let last = index + 2 == edges.len();
    q >= lower && (q < upper || (last && q == upper))
}
