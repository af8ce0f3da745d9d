use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete stages of a game. Rounds loop from `RoundEnd` back to `RoundStart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Initialization,
    PlayerSetup,
    DeckCreation,
    RoundStart,
    HandDealing,
    BettingRound,
    CardExchange,
    FinalBetting,
    WinnerDetermination,
    PotManagement,
    RoundEnd,
    GameEnd,
}

impl Phase {
    pub const ALL: [Phase; 12] = [
        Phase::Initialization,
        Phase::PlayerSetup,
        Phase::DeckCreation,
        Phase::RoundStart,
        Phase::HandDealing,
        Phase::BettingRound,
        Phase::CardExchange,
        Phase::FinalBetting,
        Phase::WinnerDetermination,
        Phase::PotManagement,
        Phase::RoundEnd,
        Phase::GameEnd,
    ];

    /// Default successor. `RoundEnd` continues with another round; ending the
    /// game instead is an explicit decision. `GameEnd` is terminal.
    pub const fn next(self) -> Option<Phase> {
        use Phase::*;
        match self {
            Initialization => Some(PlayerSetup),
            PlayerSetup => Some(DeckCreation),
            DeckCreation => Some(RoundStart),
            RoundStart => Some(HandDealing),
            HandDealing => Some(BettingRound),
            BettingRound => Some(CardExchange),
            CardExchange => Some(FinalBetting),
            FinalBetting => Some(WinnerDetermination),
            WinnerDetermination => Some(PotManagement),
            PotManagement => Some(RoundEnd),
            RoundEnd => Some(RoundStart),
            GameEnd => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameEnd)
    }

    /// Cards are visible for evaluation from dealing until the round closes.
    pub const fn should_show_cards(self) -> bool {
        use Phase::*;
        matches!(
            self,
            HandDealing
                | BettingRound
                | CardExchange
                | FinalBetting
                | WinnerDetermination
                | PotManagement
                | RoundEnd
        )
    }

    pub const fn allows_betting(self) -> bool {
        matches!(self, Phase::BettingRound | Phase::FinalBetting)
    }

    pub const fn allows_card_exchange(self) -> bool {
        matches!(self, Phase::CardExchange)
    }

    pub const fn requires_player_input(self) -> bool {
        matches!(self, Phase::BettingRound | Phase::CardExchange | Phase::RoundEnd)
    }

    pub const fn is_setup(self) -> bool {
        matches!(self, Phase::Initialization | Phase::PlayerSetup | Phase::DeckCreation)
    }

    /// Any in-round phase.
    pub const fn is_active(self) -> bool {
        !self.is_setup() && !self.is_terminal()
    }

    pub const fn display_name(self) -> &'static str {
        use Phase::*;
        match self {
            Initialization => "Initializing game",
            PlayerSetup => "Setting up players",
            DeckCreation => "Preparing deck",
            RoundStart => "Starting new round",
            HandDealing => "Dealing cards",
            BettingRound => "Betting round",
            CardExchange => "Card exchange",
            FinalBetting => "Final betting",
            WinnerDetermination => "Determining winner",
            PotManagement => "Distributing pot",
            RoundEnd => "Round complete",
            GameEnd => "Game over",
        }
    }

    pub const fn description(self) -> &'static str {
        use Phase::*;
        match self {
            Initialization => "Setting up game configuration",
            PlayerSetup => "Seating players",
            DeckCreation => "Shuffling cards",
            RoundStart => "Resetting bets and folds",
            HandDealing => "Distributing cards to players",
            BettingRound => "Call, raise, or fold",
            CardExchange => "Select cards to exchange",
            FinalBetting => "Last chance to bet",
            WinnerDetermination => "Comparing final hands",
            PotManagement => "Awarding chips to the winners",
            RoundEnd => "Continue or end the game",
            GameEnd => "Thanks for playing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_order_with_round_loop() {
        let mut p = Phase::Initialization;
        let mut seen = vec![p];
        while let Some(next) = p.next() {
            if next == Phase::RoundStart && seen.contains(&next) {
                break;
            }
            seen.push(next);
            p = next;
        }
        assert_eq!(seen, Phase::ALL[..11].to_vec());
        assert_eq!(Phase::RoundEnd.next(), Some(Phase::RoundStart));
        assert_eq!(Phase::GameEnd.next(), None);
    }

    #[test]
    fn capability_flags() {
        for p in Phase::ALL {
            let idx = Phase::ALL.iter().position(|&q| q == p).unwrap();
            assert_eq!(p.should_show_cards(), (4..=10).contains(&idx), "{p:?}");
        }
        let betting: Vec<_> = Phase::ALL.into_iter().filter(|p| p.allows_betting()).collect();
        assert_eq!(betting, vec![Phase::BettingRound, Phase::FinalBetting]);
        let input: Vec<_> = Phase::ALL.into_iter().filter(|p| p.requires_player_input()).collect();
        assert_eq!(input, vec![Phase::BettingRound, Phase::CardExchange, Phase::RoundEnd]);
        assert!(Phase::CardExchange.allows_card_exchange());
        assert!(!Phase::FinalBetting.allows_card_exchange());
    }

    #[test]
    fn setup_and_active_partition() {
        for p in Phase::ALL {
            assert!(!(p.is_setup() && p.is_active()));
        }
        assert!(!Phase::GameEnd.is_active());
        assert!(Phase::RoundStart.is_active());
        assert!(Phase::DeckCreation.is_setup());
    }

    #[test]
    fn serde_names() {
        let s = serde_json::to_string(&Phase::WinnerDetermination).unwrap();
        assert_eq!(s, "\"WINNER_DETERMINATION\"");
    }
}
