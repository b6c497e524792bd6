mod connect;
mod notice;
mod quiz;
mod results;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Connect(screen) => connect::render(frame, area, app, screen),
        Screen::Quiz(screen) => quiz::render(frame, area, screen, app.is_transitioning()),
        Screen::Results(screen) => results::render(frame, area, screen, now),
    }

    if let Some(notice) = app.notice() {
        notice::render(frame, area, notice);
    }
}
