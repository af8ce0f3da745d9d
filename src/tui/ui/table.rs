use crate::phase::Phase;
use crate::player::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::cards::{render_card_widget, short_card};
use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(7),    // seats
            Constraint::Length(5), // user's hand
            Constraint::Length(5), // status bar
        ])
        .split(f.area());

    let phase = app.game.phase();
    let header_lines = vec![
        Line::from(format!(
            "Round {}   Pot: {}   High bet: {}   To call: {}",
            app.game.current_round(),
            app.game.pot(),
            app.game.current_high_bet(),
            app.to_call(),
        )),
        Line::from(vec![
            Span::styled(phase.display_name(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" - {}", phase.description()), Style::default().add_modifier(Modifier::DIM)),
        ]),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let seats = app.game.players();
    for (idx, area) in columns(chunks[1], seats.len()).into_iter().enumerate() {
        if let Some(p) = seats.get(idx) {
            render_seat(f, area, app, idx, p);
        }
    }

    render_user_hand(f, chunks[2], app);
    render_status(f, chunks[3], app);

    if app.help_open() {
        draw_help(f);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize, p: &Player) {
    let phase = app.game.phase();
    let winners = app.game.last_outcome().map(|o| o.winners.as_slice()).unwrap_or(&[]);
    let showdown = phase == Phase::RoundEnd && !winners.is_empty();

    let mut title = p.name().to_string();
    if !p.is_human() {
        title.push_str(" [BOT]");
    }
    if showdown && winners.contains(&idx) {
        title.push_str(" [WIN]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if p.is_folded() {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    } else if showdown && winners.contains(&idx) {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if p.is_human() {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let status = if p.chips() == 0 && p.current_bet() == 0 {
        "Out"
    } else if p.is_folded() {
        "Folded"
    } else {
        "In"
    };
    let mut lines = vec![
        Line::from(format!("Chips: {}", p.chips())),
        Line::from(format!("Bet: {}", p.current_bet())),
        Line::from(format!("Last: {}", p.last_bet())),
        Line::from(format!("Status: {status}")),
    ];
    let reveal = p.is_human() || (showdown && !p.is_folded());
    if reveal && phase.should_show_cards() {
        let eval = p.evaluation();
        lines.push(Line::from(format!("{} ({})", eval.category, eval.score())));
        if !p.is_human() {
            if let Ok(cards) = p.hand().cards() {
                let shown: Vec<String> = cards.into_iter().map(short_card).collect();
                lines.push(Line::from(shown.join(" ")));
            }
        }
    } else {
        lines.push(Line::from(Span::styled("--", dim)));
    }
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn render_user_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Your hand").borders(Borders::ALL);
    let hand_area = inner(area);
    f.render_widget(block, area);

    let Some(p) = app.game.player(AppState::HUMAN_SEAT) else {
        return;
    };
    if !app.game.phase().should_show_cards() {
        f.render_widget(Paragraph::new("Waiting for the deal."), hand_area);
        return;
    }
    let Ok(cards) = p.hand().cards() else {
        return;
    };
    let marks = app.discard_marks();
    for (i, (card, slot)) in cards.iter().zip(columns(hand_area, cards.len())).enumerate() {
        let marked = marks.get(i).copied().unwrap_or(false);
        let border = if marked {
            Some(Color::Red)
        } else if p.is_folded() {
            Some(Color::DarkGray)
        } else {
            Some(Color::Cyan)
        };
        let key = (i + 1) % 10;
        let label = if marked { format!("{key} X") } else { key.to_string() };
        render_card_widget(f, slot, Some(*card), border, Some(label));
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let mut left: Vec<Line> = Vec::new();
    if let Some(msg) = app.status() {
        left.push(Line::from(msg.to_string()));
    } else if !app.game.can_continue() {
        left.push(Line::from("Game over. M for a new table."));
    } else if !app.awaiting_human() {
        left.push(Line::from("Other players are acting..."));
    }
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red))));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    if app.can_exchange() {
        left.push(Line::from(vec![
            Span::raw("Exchange: "),
            Span::styled("1-0 mark cards", action_style(true)),
            Span::raw(" • "),
            Span::styled("Enter draw", action_style(true)),
        ]));
    } else {
        let can_bet = app.can_bet();
        let to_call = app.to_call();
        left.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("F fold", action_style(can_bet)),
            Span::raw(" • "),
            Span::styled(
                if to_call == 0 { "C check".to_string() } else { format!("C call {to_call}") },
                action_style(can_bet),
            ),
            Span::raw(" • "),
            Span::styled("R raise", action_style(can_bet)),
            Span::raw(" • "),
            Span::styled("Space deal", action_style(app.can_deal())),
        ]));
    }

    let right = vec![Line::from(""), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / N: deal the next round"),
        Line::from("- C: call (check when nothing is owed)"),
        Line::from("- R: raise by an amount"),
        Line::from("- F: fold"),
        Line::from("- 1-9, 0: mark cards to exchange"),
        Line::from("- Enter: draw replacements"),
        Line::from(""),
        Line::from(Span::styled("Raise Entry:", bold)),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from(format!("- + / -: adjust by {}", AppState::RAISE_STEP)),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a new table"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.amount_entry_text().unwrap_or("");
    let chips = app.game.player(AppState::HUMAN_SEAT).map_or(0, |p| p.chips());
    let lines = vec![
        Line::from(format!("Raise by: {current}")),
        Line::from(format!("To call: {}   Chips: {chips}", app.to_call())),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("+/- in steps, Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Raise Amount").borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}
