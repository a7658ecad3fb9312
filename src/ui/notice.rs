use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::game::Notice;

const POPUP_WIDTH: u16 = 48;
/// Borders, padding and the hint row around the message.
const POPUP_CHROME_HEIGHT: u16 = 4;

/// Modal popup over the current screen.
pub fn render(frame: &mut Frame, area: Rect, notice: &Notice) {
    let message = notice.to_string();
    let text_width = POPUP_WIDTH.min(area.width).saturating_sub(4);
    let lines = u16::try_from(wrapped_line_count(&message, usize::from(text_width)))
        .unwrap_or(u16::MAX);
    let popup = centered(area, POPUP_WIDTH, lines.saturating_add(POPUP_CHROME_HEIGHT));
    let color = notice_color(notice);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(color)
        .title(Span::styled(
            format!(" {} ", notice.title()),
            Style::default().fg(color).bold(),
        ))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // The hint keeps the last row even when the message has to be cut.
    let [body, hint] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, body);

    let widget = Paragraph::new("enter ok")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, hint);
}

fn notice_color(notice: &Notice) -> Color {
    match notice {
        Notice::Correct => Color::Green,
        Notice::Incorrect { .. } => Color::Red,
        Notice::EnterAnswer | Notice::Skipped { .. } => Color::Yellow,
    }
}

/// Rows `text` takes when word-wrapped to `width` columns.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut lines = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };

        if needed <= width {
            used = needed;
        } else if len > width {
            // Long words start a fresh row and are broken across rows.
            if used > 0 {
                lines += 1;
            }
            lines += (len - 1) / width;
            used = (len - 1) % width + 1;
        } else {
            lines += 1;
            used = len;
        }
    }
    lines
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
