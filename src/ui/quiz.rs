use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::QuizScreen;
use crate::data::MAX_SCORE;
use crate::models::AnswerOption;

pub fn render(frame: &mut Frame, area: Rect, screen: &QuizScreen, transitioning: bool) {
    let session = &screen.session;
    let question = session.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], session.current_index(), session.total_questions());
    render_progress(frame, chunks[1], session.progress());
    render_question_text(frame, chunks[2], question.prompt);
    render_options(frame, chunks[3], &question.options, screen.cursor, session.selected_points());
    render_score(frame, chunks[4], session.running_total());
    render_indicator(frame, chunks[5], session.current_index(), session.total_questions());
    render_controls(
        frame,
        chunks[7],
        session.is_last_question(),
        session.is_submitting() || transitioning,
    );
}

fn render_header(frame: &mut Frame, area: Rect, index: usize, total: usize) {
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).split(area);

    let title = Paragraph::new("BASE PERSONALITY QUIZ")
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, columns[0]);

    let counter = Paragraph::new(format!("Question {}/{}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(counter, columns[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: f64) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .ratio(progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[AnswerOption],
    cursor: usize,
    selected: Option<u32>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(option.points);
        let is_highlighted = index == cursor;

        let style = match (is_selected, is_highlighted) {
            (true, _) => Style::default().fg(Color::Magenta).bold(),
            (false, true) => Style::default().fg(Color::Cyan),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(option.label, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, total: u32) {
    let content = Line::from(vec![
        Span::styled("Current Score  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} / {}", total, MAX_SCORE),
            Style::default().fg(Color::Magenta).bold(),
        ),
    ]);

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_indicator(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let dots: Vec<Span> = (0..total)
        .map(|index| {
            let color = if index < current {
                Color::Magenta
            } else if index == current {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            Span::styled("● ", Style::default().fg(color))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, last: bool, loading: bool) {
    let text = if loading {
        "Loading Results...".to_string()
    } else {
        let next = if last { "see results" } else { "next question" };
        format!("j/k navigate  ·  space/1-3 choose  ·  enter {}  ·  q quit", next)
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(if loading { Color::Yellow } else { Color::DarkGray });
    frame.render_widget(widget, area);
}
