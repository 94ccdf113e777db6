use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use rustplot::expr::Function;
use rustplot::plot::{Chart, Glyph, PlotColor};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            let mut remaining = word;
            while !remaining.is_empty() {
                let mut chunk = String::new();
                let mut chunk_width = 0;
                let mut chunk_byte_len = 0;

                for c in remaining.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if chunk_width + char_width > width && !chunk.is_empty() {
                        break;
                    }
                    chunk.push(c);
                    chunk_width += char_width;
                    chunk_byte_len += c.len_utf8();
                }

                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }

                lines.push(chunk);
                remaining = &remaining[chunk_byte_len..];
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

pub fn format_number(x: f64) -> String {
    if x.abs() > 1e10 || (x.abs() < 1e-5 && x != 0.0) {
        format!("{:.6e}", x)
    } else {
        let s = format!("{:.6}", x);
        s.trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn word_style(word: &str, base_style: Style) -> Style {
    if Function::from_name(word).is_some() {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    } else if word == "x" {
        Style::default().fg(Color::LightMagenta)
    } else {
        base_style
    }
}

/// Splits a formula into styled spans: functions, the variable `x`,
/// numbers and operators each get their own colour.
pub fn highlight_functions(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default()
        .fg(Color::LightGreen);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_number = false;

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' || (in_number && c == 'e') {
            if in_word {
                spans.push(Span::styled(current.clone(), word_style(&current, base_style)));
                current.clear();
                in_word = false;
            }

            current.push(c);
            in_number = true;
        } else if c.is_alphabetic() {
            if in_number {
                spans.push(Span::styled(current.clone(), number_style));
                current.clear();
                in_number = false;
            }

            current.push(c);
            in_word = true;
        } else {
            if in_word {
                spans.push(Span::styled(current.clone(), word_style(&current, base_style)));
                current.clear();
                in_word = false;
            } else if in_number {
                spans.push(Span::styled(current.clone(), number_style));
                current.clear();
                in_number = false;
            }

            match c {
                '+' | '-' | '*' | '/' | '^' => {
                    spans.push(Span::styled(c.to_string(), operator_style));
                }
                ' ' => {
                    spans.push(Span::raw(" "));
                }
                _ => {
                    spans.push(Span::styled(c.to_string(), base_style));
                }
            }
        }
    }

    if in_word {
        let style = word_style(&current, base_style);
        spans.push(Span::styled(current, style));
    } else if in_number {
        spans.push(Span::styled(current, number_style));
    }

    spans
}

pub fn terminal_color(color: PlotColor) -> Color {
    match color {
        PlotColor::Black => Color::Black,
        PlotColor::Red => Color::Red,
        PlotColor::Green => Color::Green,
        PlotColor::Orange => Color::Yellow,
        PlotColor::Blue => Color::Blue,
        PlotColor::Purple => Color::Magenta,
        PlotColor::Cyan => Color::Cyan,
        PlotColor::LightGray => Color::Gray,
        PlotColor::DarkGray => Color::DarkGray,
        PlotColor::LightRed => Color::LightRed,
        PlotColor::LightGreen => Color::LightGreen,
        PlotColor::Yellow => Color::LightYellow,
        PlotColor::LightBlue => Color::LightBlue,
        PlotColor::LightPurple => Color::LightMagenta,
        PlotColor::LightCyan => Color::LightCyan,
        PlotColor::White => Color::White,
        PlotColor::NoColor => Color::Reset,
    }
}

/// Converts a rendered chart into ratatui lines. Axis glyphs are drawn
/// with Unicode box characters since the terminal backend owns the
/// character set.
pub fn chart_lines(chart: &Chart) -> Vec<Line<'static>> {
    chart
        .lines
        .iter()
        .map(|segments| {
            let spans: Vec<Span<'static>> = segments
                .iter()
                .map(|segment| {
                    let style = segment
                        .color
                        .map(|color| Style::default().fg(terminal_color(color)))
                        .unwrap_or_default();
                    let text = match &segment.glyph {
                        Glyph::Text(text) => text.clone(),
                        Glyph::Line(glyph) => glyph.unicode_char().to_string(),
                    };
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("sin x + cos x", 7), vec!["sin x +", "cos x"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("anything", 0), vec![""]);
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(1e12), "1.000000e12");
    }

    #[test]
    fn formula_highlighting() {
        let spans = highlight_functions("sin x^2.5", Style::default());
        let words: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(words, vec!["sin", " ", "x", "^", "2.5"]);
        assert_eq!(spans[0].style.fg, Some(Color::LightBlue));
        assert_eq!(spans[2].style.fg, Some(Color::LightMagenta));
        assert_eq!(spans[3].style.fg, Some(Color::Yellow));
        assert_eq!(spans[4].style.fg, Some(Color::LightGreen));

        let spans = highlight_functions("sine", Style::default());
        assert_eq!(spans[0].style.fg, None);
    }

    #[test]
    fn chart_lines_match_plain_text() {
        use rustplot::plot::{render, Bounds, PlotConfig};
        use rustplot::points::Point;

        let mut config = PlotConfig {
            rows: 6,
            columns: 11,
            bounds: Bounds { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 },
            ..PlotConfig::default()
        };
        config.y_axis.label_width = 2;
        config.x_axis.label_width = 2;
        let mut points: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, i as f64)).collect();
        let chart = render(&config, &mut points).unwrap();

        let text: String = chart_lines(&chart)
            .iter()
            .map(|line| {
                let mut row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                row.push('\n');
                row
            })
            .collect();
        assert_eq!(text, chart.to_plain_text());
    }
}
