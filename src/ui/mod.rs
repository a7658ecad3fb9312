mod notice;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let canvas = app.backdrop().canvas(frame.area());
    frame.render_widget(Clear, frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(" Trivia Challenge ".fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);
    let area = block.inner(canvas);
    frame.render_widget(block, canvas);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Playing => quiz::render(frame, area, app),
        Screen::Result => result::render(frame, area, app),
    }

    if let Some(current) = app.notice() {
        notice::render(frame, area, current);
    }
}
