//! Modal notice drawn over the active screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::{Notice, NoticeKind};

const NOTICE_WIDTH: u16 = 60;
const NOTICE_HEIGHT: u16 = 9;

pub fn render(frame: &mut Frame, area: Rect, notice: &Notice) {
    let popup = centered(area, NOTICE_WIDTH, NOTICE_HEIGHT);

    let (title, color) = match notice.kind {
        NoticeKind::Info => (" Notice ", Color::Cyan),
        NoticeKind::Error => (" Error ", Color::Red),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(notice.message.as_str(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title)
                .title_style(Style::default().fg(color).bold())
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
