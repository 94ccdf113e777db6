use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui_mode::app::App;
use rustplot::expr::Function;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" rustplot Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let functions = Function::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ");

    let help_text = vec![
        Line::from(Span::styled("rustplot - Terminal Formula Plotter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
        Line::from(""),
        heading("Operators:"),
        Line::from("  + -   : Addition, subtraction (lowest precedence)"),
        Line::from("  * /   : Multiplication, division"),
        Line::from("  ^     : Power (highest precedence)"),
        Line::from("  -a    : Negation, binds tighter than ^, so -2^2 = 4"),
        Line::from("  Every operator groups to the right: 8-4-2 = 8-(4-2) = 6"),
        Line::from("  Use parentheses to group differently: (8-4)-2"),
        Line::from(""),
        heading("Functions:"),
        Line::from(format!("  {}", functions)),
        Line::from("  Arguments need no parentheses: sin x, ln(x+1)"),
        Line::from("  Angles are in radians"),
        Line::from(""),
        heading("Variable:"),
        Line::from("  x is the only variable; numbers may use e-notation (2.5e3)"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  range <min> <max> : Set the sampled x range"),
        Line::from("  clear : Clear the formula list"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  help : Show this help screen"),
        Line::from("  quit : Exit the plotter"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Select a formula to plot"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  sin x * x"),
        Line::from("  x^3 - 4*x"),
        Line::from("  arctan(x/2)"),
        Line::from("  range 0.1 5"),
        Line::from("  ln x"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
