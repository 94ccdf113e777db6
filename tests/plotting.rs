use rustplot::error::{ExprError, SyntaxError};
use rustplot::expr::compile;
use rustplot::plot::{plot, render, BoundOverrides, Bounds, LineStyle, PlotConfig};
use rustplot::points::{parse_points, read_points};
use rustplot::expression_points;

fn small_config() -> PlotConfig {
    let mut config = PlotConfig {
        rows: 6,
        columns: 11,
        line_style: LineStyle::Unicode,
        ..PlotConfig::default()
    };
    config.x_axis.ticks = 2;
    config.x_axis.label_width = 2;
    config.x_axis.precision = 0;
    config.y_axis.ticks = 2;
    config.y_axis.label_width = 2;
    config.y_axis.precision = 0;
    config
}

#[test]
fn point_stream_to_chart() {
    let input: String = (0..=10).map(|i| format!("{} {}\n", i, i)).collect();
    let mut points = read_points(input.as_bytes()).unwrap();
    assert_eq!(points.len(), 11);

    let mut config = small_config();
    config.bounds = BoundOverrides::default().resolve(&points);
    assert_eq!(
        config.bounds,
        Bounds { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 }
    );

    let chart = render(&config, &mut points).unwrap();
    let expected = [
        "10┌         *",
        "  │       ** ",
        "  │     **   ",
        "  │  ***     ",
        " 0├**        ",
        "  └┴────────┘",
        "   0        10",
    ]
    .join("\n")
        + "\n";
    assert_eq!(chart.to_plain_text(), expected);
}

#[test]
fn formula_covers_every_column() {
    let overrides = BoundOverrides::default();
    let mut config = PlotConfig::default();
    let mut points = expression_points("x", &overrides, config.columns).unwrap();
    assert_eq!(points.len(), 84);
    assert_eq!(points.first().map(|p| p.x), Some(-10.0));
    assert_eq!(points.last().map(|p| p.x), Some(10.0));

    config.bounds = overrides.resolve(&points);
    let text = render(&config, &mut points).unwrap().to_plain_text();
    let rows: Vec<Vec<char>> = text.lines().take(21).map(|l| l.chars().collect()).collect();

    for column in 9..50 {
        assert!(
            rows.iter().any(|row| row[column] == '*'),
            "no mark in column {}",
            column
        );
    }
}

#[test]
fn overrides_clip_the_plot() {
    let overrides = BoundOverrides {
        y_min: Some(0.0),
        y_max: Some(1.0),
        ..BoundOverrides::default()
    };
    let mut config = small_config();
    let mut points = expression_points("x^2", &overrides, config.columns).unwrap();
    config.bounds = overrides.resolve(&points);
    assert_eq!(config.bounds.x_min, -10.0);
    assert_eq!(config.bounds.y_max, 1.0);

    let text = render(&config, &mut points).unwrap().to_plain_text();
    let marks = text.matches('*').count();
    // only the samples with |x| <= 1 stay inside the y range
    assert!(marks > 0 && marks <= 3, "{}", text);
}

#[test]
fn grammar_is_right_associative() {
    assert_eq!(compile("2-3-4").unwrap().evaluate(0.0), 3.0);
    assert_eq!(compile("16/4/2").unwrap().evaluate(0.0), 8.0);
    assert_eq!(compile("2^3^2").unwrap().evaluate(0.0), 512.0);
    assert_eq!(compile("-2^2").unwrap().evaluate(0.0), 4.0);
    assert_eq!(compile("2+3*x").unwrap().prefix(), "(+ 2 (* 3 x))");
}

#[test]
fn formula_errors_are_reported() {
    assert_eq!(
        compile("x + y"),
        Err(ExprError::UnknownVariable("y".to_string()))
    );
    assert_eq!(
        compile("(x + 1"),
        Err(ExprError::Syntax(SyntaxError::MissingCloseParen))
    );
    assert_eq!(
        compile("x +"),
        Err(ExprError::Syntax(SyntaxError::UnexpectedEnd))
    );
    assert!(expression_points("sin", &BoundOverrides::default(), 42).is_err());
}

#[test]
fn invalid_layout_prints_an_error_line() {
    let mut config = PlotConfig::default();
    config.y_axis.label_width = 9;
    let mut out = Vec::new();
    plot(&mut out, &config, &mut parse_points("1 1 2 2")).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error: specified number width too large.\n"
    );
}

#[test]
fn non_finite_samples_are_skipped() {
    let overrides = BoundOverrides::default();
    let mut config = small_config();
    let mut points = expression_points("ln x", &overrides, config.columns).unwrap();
    assert!(points.iter().any(|p| !p.y.is_finite()));

    config.bounds = overrides.resolve(&points);
    assert!(config.bounds.y_min.is_finite() && config.bounds.y_max.is_finite());
    assert!(render(&config, &mut points).is_ok());
}
