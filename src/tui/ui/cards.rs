use crate::cards::{Card, Rank, Suit};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

pub(super) fn short_card(c: Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", rank_label(c.rank()), sg)
}

/// Bordered card face. `None` draws a face-down card.
pub(super) fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    border: Option<Color>,
    title: Option<String>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    if let Some(t) = title {
        block = block.title(t);
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (_, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(short_card(c), style))
        }
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
