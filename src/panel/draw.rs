use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{Panel, keymap};

pub fn render(frame: &mut Frame, panel: &Panel) {
    let [state_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    frame.render_widget(state_widget(panel), state_area);
    frame.render_widget(input_widget(panel), input_area);
    frame.render_widget(footer_widget(panel), footer_area);
}

fn state_widget(panel: &Panel) -> Paragraph<'_> {
    let current = match panel.labels.current_error {
        true => Span::styled(panel.labels.current.as_str(), Style::new().red()),
        false => Span::raw(panel.labels.current.as_str()),
    };

    let lines = vec![
        row("Target", Span::raw(panel.labels.target.as_str())),
        row("Current", current),
        row("Pump", on_off_span(&panel.labels.pump)),
        row("Heater", on_off_span(&panel.labels.heater)),
    ];

    Paragraph::new(lines).block(Block::bordered().title("Sous-vide"))
}

fn input_widget(panel: &Panel) -> Paragraph<'_> {
    Paragraph::new(panel.input.as_str())
        .block(Block::bordered().title("New target (\u{2109})"))
}

fn footer_widget(panel: &Panel) -> Paragraph<'static> {
    let mut lines = vec![Line::from(keymap::hint_line()).dim()];

    if let Some(version) = panel.version_line() {
        lines.push(Line::from(version).dim());
    }

    Paragraph::new(lines)
}

fn row<'a>(name: &str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![Span::raw(format!("{name:<9}")), value])
}

fn on_off_span(label: &str) -> Span<'_> {
    match label {
        "On" => Span::styled(label, Style::new().green()),
        _ => Span::raw(label),
    }
}
