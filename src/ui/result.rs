use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::game::summary;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.score();
    let total = app.total();
    let (verdict, color) = verdict(score, total);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let mut content = vec![Line::from("")];
    content.extend(summary(score, total).lines().map(|line| {
        Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Color::Green).bold(),
        ))
    }));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        verdict,
        Style::default().fg(color).bold(),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("r play again  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

/// One-line remark on the round and its colour.
fn verdict(score: usize, total: usize) -> (&'static str, Color) {
    if total == 0 {
        ("No questions this round", Color::DarkGray)
    } else if score == total {
        ("Perfect round!", Color::Green)
    } else if score * 2 >= total {
        ("Well played", Color::Cyan)
    } else if score > 0 {
        ("Keep practising", Color::Yellow)
    } else {
        ("Better luck next time", Color::Red)
    }
}
