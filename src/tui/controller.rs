use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// What a key press means in the current app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Action(InputAction),
    Ignored,
}

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Apply a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match map_key(app, code) {
        KeyOutcome::Quit => true,
        KeyOutcome::Action(action) => {
            let _ = app.handle_input(action);
            false
        }
        KeyOutcome::Ignored => false,
    }
}

/// Modal key map: help popup, then raise entry, then the active scene.
pub fn map_key(app: &AppState, code: KeyCode) -> KeyOutcome {
    use InputAction as A;
    use KeyOutcome::{Action, Ignored, Quit};

    if code == KeyCode::Char('?') || (app.help_open() && code == KeyCode::Esc) {
        return Action(A::ToggleHelp);
    }
    if app.help_open() {
        return Ignored;
    }
    if app.amount_entry_active() {
        return match code {
            KeyCode::Esc => Action(A::AmountCancel),
            KeyCode::Enter => Action(A::AmountSubmit),
            KeyCode::Backspace => Action(A::AmountBackspace),
            KeyCode::Char('+' | '=') => Action(A::AmountIncStep),
            KeyCode::Char('-' | '_') => Action(A::AmountDecStep),
            KeyCode::Char(c) if c.is_ascii_digit() => Action(A::AmountDigit(c as u8 - b'0')),
            _ => Ignored,
        };
    }

    let lower = match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match (app.scene, lower) {
        (_, KeyCode::Char('q')) => Quit,
        (_, KeyCode::Char('m')) => Action(A::ToggleMenu),
        (Scene::Menu, KeyCode::Up) => Action(A::MenuPrev),
        (Scene::Menu, KeyCode::Down) => Action(A::MenuNext),
        (Scene::Menu, KeyCode::Char('+' | '=') | KeyCode::Right) => Action(A::MenuInc),
        (Scene::Menu, KeyCode::Char('-' | '_') | KeyCode::Left) => Action(A::MenuDec),
        (Scene::Menu, KeyCode::Enter) => Action(A::MenuApply),
        (Scene::Menu, KeyCode::Esc) => Action(A::MenuCancel),
        (Scene::Table, KeyCode::Char(' ' | 'n')) => Action(A::NextRound),
        (Scene::Table, KeyCode::Char('f')) => Action(A::Fold),
        (Scene::Table, KeyCode::Char('c')) => Action(A::Call),
        (Scene::Table, KeyCode::Char('r')) => Action(A::AmountOpen),
        (Scene::Table, KeyCode::Enter) => Action(A::ConfirmExchange),
        // 1-9 then 0 for the tenth card
        (Scene::Table, KeyCode::Char(c)) if c.is_ascii_digit() => {
            let idx = if c == '0' { 9 } else { (c as u8 - b'1') as usize };
            Action(A::ToggleDiscard(idx))
        }
        _ => Ignored,
    }
}
