use rustplot::expr::{compile, Expr};
use rustplot::plot::{render, BoundOverrides, Chart, PlotConfig};
use rustplot::points::{sample, sample_count};

pub struct PlotEntry {
    pub input: String,
    pub outcome: Result<Expr, String>,
}

pub struct App {
    pub input: String,
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<PlotEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub terminal_too_small: bool,
    pub config: PlotConfig,
    pub overrides: BoundOverrides,
}

impl App {
    pub fn new(config: PlotConfig, overrides: BoundOverrides) -> Self {
        App {
            input: String::new(),
            cursor_position: 0,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            terminal_too_small: false,
            config,
            overrides,
        }
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total_chars = self.input.chars().count();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        }
        else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos - visible_width + 1;
        }

        if self.input_scroll > total_chars.saturating_sub(visible_width) {
            self.input_scroll = total_chars.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let input = self.input.trim().to_string();
        if input.is_empty() {
            return;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                self.should_quit = true;
                return;
            }
            "clear" | "reset" => {
                self.history.clear();
                self.cursor_history = 0;
                self.clear_input();
                self.history_scroll = 0;
                return;
            }
            "help" => {
                self.show_help = true;
                self.clear_input();
                return;
            }
            _ => {}
        }

        if let Some(args) = input.strip_prefix("range ") {
            match parse_range(args) {
                Some((min, max)) => {
                    self.overrides.x_min = Some(min);
                    self.overrides.x_max = Some(max);
                }
                None => self.history.push(PlotEntry {
                    input: input.clone(),
                    outcome: Err("usage: range <min> <max> with min < max".to_string()),
                }),
            }
            self.clear_input();
            self.scroll_to_bottom = true;
            return;
        }

        let outcome = compile(&input).map_err(|e| e.to_string());
        self.history.push(PlotEntry { input, outcome });

        self.cursor_history = self.history.len().saturating_sub(1);
        self.clear_input();
        self.scroll_to_bottom = true;
    }

    pub fn selected_entry(&self) -> Option<&PlotEntry> {
        self.history.get(self.cursor_history)
    }

    /// Renders `expr` to fit an area `width` x `height` cells, using the
    /// current sampling range. Room is left on the right for the last
    /// x-axis label.
    pub fn chart_for(&self, expr: &Expr, width: u16, height: u16) -> Result<Chart, String> {
        let mut config = self.config.clone();
        config.rows = height.saturating_sub(1);
        config.columns = width
            .saturating_sub(config.y_axis.label_width)
            .saturating_sub(config.x_axis.label_width);

        let (x_min, x_max) = self.overrides.sample_range();
        let mut points = sample(expr, x_min, x_max, sample_count(config.columns));
        config.bounds = self.overrides.resolve(&points);
        render(&config, &mut points).map_err(|e| e.to_string())
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count()),
            _ => {}
        }
    }

    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let input_chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor_position;

        if direction < 0 {
            while pos > 0 && input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }

            while pos > 0 && !input_chars[pos - 1].is_whitespace() {
                pos -= 1;
            }

            self.cursor_position = pos;
        } else {
            let len = input_chars.len();

            while pos < len && !input_chars[pos].is_whitespace() {
                pos += 1;
            }

            while pos < len && input_chars[pos].is_whitespace() {
                pos += 1;
            }

            self.cursor_position = pos.min(len);
        }
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len().saturating_sub(1) {
            self.cursor_history += 1;
        }

        if self.cursor_history < self.history.len() {
            self.input = self.history[self.cursor_history].input.clone();
        } else {
            self.input.clear();
        }
        self.cursor_position = self.input.chars().count();
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
        self.input.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_at_cursor();
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let byte_idx = Self::char_index_to_byte_index(&self.input, self.cursor_position);
        if let Some(c) = self.input[byte_idx..].chars().next() {
            self.input.replace_range(byte_idx..byte_idx + c.len_utf8(), "");
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }

    pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
        s.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or_else(|| s.len())
    }
}

fn parse_range(args: &str) -> Option<(f64, f64)> {
    let mut parts = args.split_whitespace().map(|p| p.parse::<f64>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(min)), Some(Ok(max)), None) if min < max => Some((min, max)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(input: &str) -> App {
        let mut app = App::new(PlotConfig::default(), BoundOverrides::default());
        app.input = input.to_string();
        app.cursor_position = input.chars().count();
        app.submit();
        app
    }

    #[test]
    fn formulas_are_compiled_into_history() {
        let mut app = app_with("sin x");
        app.input = "x + y".to_string();
        app.submit();

        assert_eq!(app.history.len(), 2);
        assert!(app.history[0].outcome.is_ok());
        assert_eq!(
            app.history[1].outcome.as_ref().unwrap_err(),
            "unknown variable 'y' in expression"
        );
        assert_eq!(app.cursor_history, 1);
        assert!(app.input.is_empty());
    }

    #[test]
    fn commands() {
        assert!(app_with("quit").should_quit);
        assert!(app_with("help").show_help);

        let mut app = app_with("x");
        app.input = "clear".to_string();
        app.submit();
        assert!(app.history.is_empty());
    }

    #[test]
    fn range_command_sets_sampling_range() {
        let app = app_with("range -1 2.5");
        assert_eq!(app.overrides.sample_range(), (-1.0, 2.5));
        assert!(app.history.is_empty());

        let app = app_with("range 3 1");
        assert_eq!(app.overrides.sample_range(), (-10.0, 10.0));
        assert!(app.history[0].outcome.is_err());
    }

    #[test]
    fn chart_fits_the_area() {
        let app = app_with("x^2");
        let expr = app.selected_entry().unwrap().outcome.clone().unwrap();
        let chart = app.chart_for(&expr, 60, 20).unwrap();
        assert_eq!(chart.lines.len(), 20);
        let text = chart.to_plain_text();
        assert!(text.lines().all(|line| line.chars().count() <= 60));
        assert_eq!(text.lines().next().unwrap().chars().count(), 52);
    }

    #[test]
    fn small_area_reports_the_problem() {
        let app = app_with("x");
        let expr = app.selected_entry().unwrap().outcome.clone().unwrap();
        assert_eq!(
            app.chart_for(&expr, 20, 20).unwrap_err(),
            "specified number width too large"
        );
    }

    #[test]
    fn editing_at_the_cursor() {
        let mut app = App::new(PlotConfig::default(), BoundOverrides::default());
        for c in "sin π".chars() {
            app.insert_char(c);
        }
        app.move_cursor(-1);
        app.insert_char('2');
        assert_eq!(app.input, "sin 2π");

        app.delete_at_cursor();
        assert_eq!(app.input, "sin 2");
        app.delete_at_cursor();
        assert_eq!(app.input, "sin 2");

        app.delete_before_cursor();
        app.insert_char('x');
        assert_eq!(app.input, "sin x");
        assert_eq!(app.cursor_position, 5);
    }

    #[test]
    fn word_navigation() {
        let mut app = App::new(PlotConfig::default(), BoundOverrides::default());
        app.input = "sin x + cos x".to_string();
        app.cursor_position = app.input.chars().count();
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 12);
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 8);
        app.move_cursor_by_words(1);
        assert_eq!(app.cursor_position, 12);
    }
}
