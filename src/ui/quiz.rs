use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app.question_text());
    render_answer_field(frame, chunks[2], app.input());
    render_controls(frame, chunks[4]);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Paragraph::new(format!("Score: {}", app.score()))
        .alignment(Alignment::Center)
        .fg(Color::Blue)
        .bold();
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answer_field(frame: &mut Frame, area: Rect, input: &str) {
    let field = Layout::horizontal([Constraint::Max(40)])
        .flex(Flex::Center)
        .split(area)[0];

    // Borders and padding take four columns, the cursor one more.
    let visible = visible_tail(input, usize::from(field.width.saturating_sub(5)));
    let line = Line::from(vec![
        Span::styled(visible, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Answer ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, field);
}

/// The last `width` characters of `input`.
fn visible_tail(input: &str, width: usize) -> &str {
    let skip = input.chars().count().saturating_sub(width);
    match input.char_indices().nth(skip) {
        Some((start, _)) => &input[start..],
        None => "",
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type your answer  ·  enter submit  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
