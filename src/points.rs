use std::io::{self, Read};
use std::str;

use crate::expr::Expr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Reads whitespace separated `x y` pairs.
///
/// Reading stops quietly at the first value that is not a number, including
/// bytes that are not UTF-8; a pair left incomplete at that point is dropped.
pub fn read_points<R: Read>(mut reader: R) -> io::Result<Vec<Point>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let values = input
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| str::from_utf8(token).ok().and_then(|v| v.parse::<f64>().ok()));
    Ok(collect_pairs(values))
}

pub fn parse_points(input: &str) -> Vec<Point> {
    collect_pairs(input.split_whitespace().map(|v| v.parse::<f64>().ok()))
}

fn collect_pairs(mut values: impl Iterator<Item = Option<f64>>) -> Vec<Point> {
    let mut points = Vec::new();
    while let (Some(Some(x)), Some(Some(y))) = (values.next(), values.next()) {
        points.push(Point::new(x, y));
    }
    points
}

/// Number of samples taken for a chart `columns` wide.
pub fn sample_count(columns: u16) -> usize {
    2 * columns as usize
}

/// Evaluates `expr` at `count` evenly spaced x values from `x_min` to
/// `x_max`, both ends included.
pub fn sample(expr: &Expr, x_min: f64, x_max: f64, count: usize) -> Vec<Point> {
    match count {
        0 => Vec::new(),
        1 => vec![Point::new(x_min, expr.evaluate(x_min))],
        _ => {
            let step = (x_max - x_min) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // pin the last sample so rounding cannot push it past x_max
                    let x = if i == count - 1 {
                        x_max
                    } else {
                        x_min + i as f64 * step
                    };
                    Point::new(x, expr.evaluate(x))
                })
                .collect()
        }
    }
}
