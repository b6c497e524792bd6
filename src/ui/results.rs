use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ResultsScreen;
use crate::data::{MAX_SCORE, PERSONALITIES};
use crate::models::{ColorKey, PersonalityBand};
use crate::results::Celebration;
use crate::wallet::{MINT_VALUE_WEI, format_wei};

const CONFETTI_GLYPHS: [&str; 5] = ["*", "+", "·", "•", "✦"];
const CONFETTI_COLORS: [Color; 5] = [
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightRed,
    Color::LightGreen,
];
const CONFETTI_PIECES: u64 = 60;

pub fn render(frame: &mut Frame, area: Rect, screen: &ResultsScreen, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(11),
        Constraint::Length(PERSONALITIES.len() as u16 + 2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_personality(frame, chunks[1], screen.band, screen.param.score);
    render_breakdown(frame, chunks[2], screen.band);
    render_controls(frame, chunks[4], screen.sending);

    if screen.celebration.is_active(now) {
        render_confetti(frame, area, &screen.celebration, now);
    }
}

fn band_color(key: ColorKey) -> Color {
    match key {
        ColorKey::Slate => Color::Gray,
        ColorKey::Ocean => Color::Cyan,
        ColorKey::Ember => Color::LightRed,
        ColorKey::Emerald => Color::Green,
        ColorKey::Royal => Color::Magenta,
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZ COMPLETE!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Here's your onchain personality".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_personality(frame: &mut Frame, area: Rect, band: &PersonalityBand, score: u32) {
    let color = band_color(band.color);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(band.emoji, Style::default())),
        Line::from(""),
        Line::from(Span::styled(
            band.name.to_uppercase(),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from("Your Score".fg(Color::DarkGray)),
        Line::from(Span::styled(
            format!("{}/{}", score, MAX_SCORE),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(band.description, Style::default().fg(Color::Gray))),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, current: &PersonalityBand) {
    let lines: Vec<Line> = PERSONALITIES
        .iter()
        .map(|band| {
            let is_current = band == current;
            let name_style = if is_current {
                Style::default().fg(band_color(band.color)).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_current { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!("{} ", marker), name_style),
                Span::raw(format!("{} ", band.emoji)),
                Span::styled(format!("{:<16}", band.name), name_style),
                Span::styled(
                    format!("{}-{} pts", band.min_score, band.max_score),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Score Breakdown ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, sending: bool) {
    let text = if sending {
        "Sending...  ·  confirm the transaction in your wallet".to_string()
    } else {
        let amount = format_wei(MINT_VALUE_WEI).unwrap_or_default();
        format!("m mint & share ({})  ·  r take again  ·  q quit", amount)
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(if sending { Color::Yellow } else { Color::DarkGray });
    frame.render_widget(widget, area);
}

/// Falling glyphs over the whole screen.
fn render_confetti(frame: &mut Frame, area: Rect, celebration: &Celebration, now: Instant) {
    let pieces = confetti(area, celebration.frame(now));
    let buf = frame.buffer_mut();

    for piece in pieces {
        if let Some(cell) = buf.cell_mut(piece.position) {
            cell.set_symbol(piece.glyph).set_fg(piece.color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConfettiPiece {
    position: Position,
    glyph: &'static str,
    color: Color,
}

/// Piece layout for animation frame `tick`. Each piece draws from an RNG
/// seeded with its index, so a frame is always laid out the same way.
fn confetti(area: Rect, tick: u64) -> Vec<ConfettiPiece> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    (0..CONFETTI_PIECES)
        .map(|piece| {
            let mut rng = StdRng::seed_from_u64(piece);
            let x = area.x + rng.gen_range(0..area.width);
            let speed: u64 = rng.gen_range(1..=3);
            let offset: u64 = rng.gen_range(0..area.height as u64);
            let y = area.y + ((offset + tick * speed / 2) % area.height as u64) as u16;

            ConfettiPiece {
                position: Position::new(x, y),
                glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
                color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            }
        })
        .collect()
}
