use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, ConnectScreen};
use crate::data::{PERSONALITIES, QUESTIONS};

pub fn render(frame: &mut Frame, area: Rect, app: &App, screen: &ConnectScreen) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let column = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .split(chunks[1])[1];

    let demo = app.wallet().is_some_and(|w| w.demo);
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "DISCOVER YOUR BASE ONCHAIN PERSONALITY",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(
            "Answer 8 quick questions about your onchain behavior and unlock your unique Base personality."
                .fg(Color::Gray),
        ),
        Line::from(""),
        stats_line(),
        Line::from(""),
        Line::from(""),
        button_line(screen.connecting, app.is_transitioning(), demo),
        Line::from(""),
    ];

    if let Some(wallet) = app.wallet() {
        let mut spans = vec![Span::styled(
            format!("Connected: {}", wallet.address),
            Style::default().fg(Color::DarkGray),
        )];
        if wallet.demo {
            spans.push(Span::styled(" (Preview Mode)", Style::default().fg(Color::Yellow)));
        }
        content.push(Line::from(spans));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, column);

    let footer = Paragraph::new("Built on Base  ·  Powered by Onchain Data  ·  enter connect  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(footer, chunks[3]);
}

fn stats_line() -> Line<'static> {
    let stat = |value: String, label: &'static str, color: Color| {
        vec![
            Span::styled(value, Style::default().fg(color).bold()),
            Span::styled(format!(" {}", label), Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut spans = stat(QUESTIONS.len().to_string(), "Questions", Color::Blue);
    spans.push(Span::raw("   ·   "));
    spans.extend(stat(PERSONALITIES.len().to_string(), "Personalities", Color::Magenta));
    spans.push(Span::raw("   ·   "));
    spans.extend(stat("2min".to_string(), "Time", Color::LightRed));
    Line::from(spans)
}

fn button_line(connecting: bool, transitioning: bool, demo: bool) -> Line<'static> {
    if connecting || transitioning {
        return Line::from(Span::styled(
            "Connecting...",
            Style::default().fg(Color::Yellow).bold(),
        ));
    }

    let label = if demo {
        "Start Quiz (Demo Mode)"
    } else {
        "Connect Wallet to Start"
    };
    Line::from(vec![
        Span::styled("ENTER ", Style::default().fg(Color::Green).bold()),
        Span::styled(label, Style::default().fg(Color::White)),
    ])
}
