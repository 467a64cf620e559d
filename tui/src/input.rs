//! Input handling for the Vitrine TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use vitrine_engine::{App, FILTER_ALL, Phase};

use crate::menu::GRID_COLUMNS;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

const SCROLL_PAGE: i32 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking thread and hands them to the
/// frame loop through a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
    debug!("input loop stopped");
}

/// Drain pending input and apply it to the controller. Bounded per
/// frame so a burst can never starve rendering.
pub fn handle_events(app: &mut App, pump: &mut InputPump) -> Result<()> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        match pump.rx.try_recv() {
            Ok(InputMsg::Event(event)) => handle_event(app, &event),
            Ok(InputMsg::Error(e)) => return Err(anyhow!("input error: {e}")),
            Err(_) => break,
        }
    }
    Ok(())
}

fn handle_event(app: &mut App, event: &Event) {
    let Event::Key(key) = event else {
        return;
    };
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.quit();
        return;
    }

    match app.phase() {
        Phase::Loading => {}
        Phase::Menu | Phase::TransitioningOut { .. } | Phase::TransitioningIn => {
            handle_menu_key(app, key);
        }
        Phase::Section { index } => handle_section_key(app, key, index),
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c')))
}

fn handle_menu_key(app: &mut App, key: &KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_menu_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_menu_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_menu_cursor(-(GRID_COLUMNS as i32)),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu_cursor(GRID_COLUMNS as i32),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_menu_cursor(),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            app.select_menu_item(c as usize - '1' as usize);
        }
        _ => {}
    }
}

fn handle_section_key(app: &mut App, key: &KeyEvent, index: usize) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_to_menu(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-SCROLL_PAGE),
        KeyCode::PageDown => app.scroll_by(SCROLL_PAGE),
        KeyCode::Home => app.scroll_to_anchor(""),
        KeyCode::End => app.scroll_by(i32::from(u16::MAX)),
        KeyCode::Tab => cycle_tab(app, index),
        KeyCode::Char('f') => cycle_filter(app, index),
        KeyCode::Char('s') => app.animate_stats(),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let anchor_idx = c as usize - '1' as usize;
            let id = app.content().sections[index]
                .anchors
                .get(anchor_idx)
                .map(|anchor| anchor.id.clone());
            if let Some(id) = id {
                app.scroll_to_anchor(&id);
            }
        }
        _ => {}
    }
}

fn cycle_tab(app: &mut App, index: usize) {
    let section = &app.content().sections[index];
    if section.tabs.is_empty() {
        return;
    }
    let current = app.active_tab(index);
    let position = section
        .tabs
        .iter()
        .position(|pane| current == Some(pane.id.as_str()))
        .unwrap_or(0);
    let next = &section.tabs[(position + 1) % section.tabs.len()];
    let section_id = section.id.clone();
    let next_id = next.id.clone();
    app.switch_tab(&section_id, &next_id);
}

fn cycle_filter(app: &mut App, index: usize) {
    let section = &app.content().sections[index];
    if section.gallery.is_empty() {
        return;
    }
    let mut categories: Vec<String> = vec![FILTER_ALL.to_string()];
    for item in &section.gallery {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    let current = app
        .gallery(index)
        .map_or_else(|| FILTER_ALL.to_string(), |g| g.filter().to_string());
    let position = categories
        .iter()
        .position(|c| *c == current)
        .unwrap_or(0);
    let next = categories[(position + 1) % categories.len()].clone();
    app.filter_gallery(&next);
}
