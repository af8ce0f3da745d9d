use crate::agents::{BetContext, BetDecision, BotPolicy, InputSource};
use crate::config::GameConfig;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{Category, HandValue};
use crate::hand::HandError;
use crate::phase::Phase;
use crate::player::{Player, PlayerError, PlayerSnapshot};
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("no players given")]
    NoPlayers,
    #[error("{count} players exceed the table limit of {max}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("game is not active")]
    NotActive,
    #[error("not allowed during phase: {0}")]
    WrongPhase(Phase),
    #[error("no player at seat {0}")]
    PlayerIndex(usize),
    #[error("seat {0} is the last player left in the round")]
    LastActivePlayer(usize),
    #[error("seat {0} has folded")]
    Folded(usize),
    #[error("seat {0} already exchanged cards this round")]
    AlreadyExchanged(usize),
    #[error("betting is waiting on seat {0}")]
    AwaitingInput(usize),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Name and controller of a seat to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSpec {
    pub name: String,
    pub human: bool,
}

impl SeatSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self { name: name.into(), human: true }
    }

    pub fn bot(name: impl Into<String>) -> Self {
        Self { name: name.into(), human: false }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub winners: Vec<usize>,
    /// Chips that were in the pot when it was split.
    pub pot: u64,
    pub category: Option<Category>,
}

/// One line of [`GameSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub chips: u64,
    pub current_bet: u64,
    pub folded: bool,
    pub human: bool,
    pub score: u8,
}

/// Human-readable game state for display collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub round: u32,
    pub pot: u64,
    pub phase: Phase,
    pub players: Vec<PlayerSummary>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}, Pot: {} ({})", self.round, self.pot, self.phase)?;
        for p in &self.players {
            write!(f, "  {}: {} chips, bet {}", p.name, p.chips, p.current_bet)?;
            if p.folded {
                write!(f, " (folded)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The rules engine: owns the deck, the seats, the pot and the phase.
///
/// ```
/// use draw_poker::agents::QueuedInput;
/// use draw_poker::config::GameConfig;
/// use draw_poker::game::Game;
/// use draw_poker::phase::Phase;
///
/// let mut game = Game::with_seed(GameConfig::default(), 7);
/// game.initialize_game(&["Ann", "Bob", "Cid"]).unwrap();
/// assert_eq!(game.phase(), Phase::RoundStart);
///
/// let before: u64 = game.players().iter().map(|p| p.chips()).sum();
/// let outcome = game.play_round(&mut QueuedInput::new()).unwrap();
/// let after: u64 = game.players().iter().map(|p| p.chips()).sum();
/// assert_eq!(before, after);
/// assert!(!outcome.winners.is_empty());
/// assert_eq!(game.phase(), Phase::RoundEnd);
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    deck: Deck,
    players: Vec<Player>,
    pot: u64,
    round: u32,
    phase: Phase,
    active: bool,
    seed: Option<u64>,
    decks_built: u64,
    last_outcome: Option<RoundOutcome>,
    /// Completed passes in the current betting phase.
    betting_passes: u32,
    /// Human seat the current pass stopped at for lack of a decision.
    paused_at: Option<usize>,
}

fn build_deck(seed: Option<u64>, count: u64) -> Deck {
    match seed {
        Some(seed) => Deck::seeded(seed.wrapping_add(count)),
        None => Deck::shuffled(),
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, None)
    }

    /// Engine whose decks are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::build(config, Some(seed))
    }

    fn build(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            deck: build_deck(seed, 1),
            players: Vec::new(),
            pot: 0,
            round: 0,
            phase: Phase::Initialization,
            active: false,
            seed,
            decks_built: 1,
            last_outcome: None,
            betting_passes: 0,
            paused_at: None,
        }
    }

    fn fresh_deck(&mut self) -> Deck {
        self.decks_built += 1;
        build_deck(self.seed, self.decks_built)
    }

    // --- Queries ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn current_round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cards left in this round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Seat whose betting decision the engine is waiting for, if betting
    /// stopped part-way through a pass.
    pub fn awaiting_input(&self) -> Option<usize> {
        self.paused_at
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// Highest current bet among players still in the round.
    pub fn current_high_bet(&self) -> u64 {
        self.players.iter().filter(|p| !p.is_folded()).map(Player::current_bet).max().unwrap_or(0)
    }

    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    pub fn players_with_chips(&self) -> usize {
        self.players.iter().filter(|p| p.chips() > 0).count()
    }

    pub fn can_continue(&self) -> bool {
        self.active && self.phase != Phase::GameEnd
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            round: self.round,
            pot: self.pot,
            phase: self.phase,
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    name: p.name().to_string(),
                    chips: p.chips(),
                    current_bet: p.current_bet(),
                    folded: p.is_folded(),
                    human: p.is_human(),
                    score: p.score(),
                })
                .collect(),
        }
    }

    // --- Setup ---

    /// Seat computer players under the given names. See [`Game::initialize_game_with`].
    pub fn initialize_game(&mut self, names: &[&str]) -> Result<(), GameError> {
        let seats: Vec<SeatSpec> = names.iter().map(|n| SeatSpec::bot(*n)).collect();
        self.initialize_game_with(&seats)
    }

    /// Seat players, deal opening hands and move to [`Phase::RoundStart`].
    /// On error the engine is left untouched and inactive.
    pub fn initialize_game_with(&mut self, seats: &[SeatSpec]) -> Result<(), GameError> {
        if seats.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if !self.config.is_valid_player_count(seats.len()) {
            return Err(GameError::TooManyPlayers {
                count: seats.len(),
                max: self.config.max_players(),
            });
        }

        let mut deck = self.fresh_deck();
        let players = seats
            .iter()
            .map(|s| {
                Player::new(
                    s.name.clone(),
                    self.config.starting_chips(),
                    s.human,
                    &mut deck,
                    self.config.hand_size(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.phase = Phase::Initialization;
        self.set_phase(Phase::PlayerSetup);
        self.set_phase(Phase::DeckCreation);
        self.deck = deck;
        self.players = players;
        self.pot = 0;
        self.round = 0;
        self.open_betting();
        self.active = true;
        self.last_outcome = None;
        self.set_phase(Phase::RoundStart);
        tracing::info!(players = self.players.len(), "game initialized");
        Ok(())
    }

    /// Replace the seats from snapshots (e.g. a saved session). The pot and
    /// round counter are kept.
    pub fn restore(&mut self, snapshots: &[PlayerSnapshot]) -> Result<(), GameError> {
        if snapshots.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if !self.config.is_valid_player_count(snapshots.len()) {
            return Err(GameError::TooManyPlayers {
                count: snapshots.len(),
                max: self.config.max_players(),
            });
        }
        let players =
            snapshots.iter().map(Player::from_snapshot).collect::<Result<Vec<_>, _>>()?;
        self.players = players;
        self.active = true;
        if self.phase.is_setup() || self.phase.is_terminal() {
            self.set_phase(Phase::RoundStart);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(Player::snapshot).collect()
    }

    // --- Phase control ---

    /// Move to the default next phase. Returns false when already terminal.
    pub fn advance_phase(&mut self) -> bool {
        match self.phase.next() {
            Some(next) => {
                self.set_phase(next);
                true
            }
            None => false,
        }
    }

    /// Jump to any phase, for recovery and tests.
    pub fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if !self.can_continue() {
            return Err(GameError::NotActive);
        }
        Ok(())
    }

    fn ensure_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::PlayerIndex(seat));
        }
        Ok(())
    }

    // --- Round lifecycle ---

    /// Fresh deck, fresh hands, cleared folds and bets, then open betting.
    /// Players without chips sit the round out.
    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        self.set_phase(Phase::RoundStart);
        if self.pot > 0 {
            tracing::warn!(pot = self.pot, "discarding undistributed pot");
        }
        self.pot = 0;
        self.round += 1;
        self.last_outcome = None;
        self.open_betting();

        self.set_phase(Phase::HandDealing);
        let mut deck = self.fresh_deck();
        let hand_size = self.config.hand_size();
        for p in &mut self.players {
            p.reset_fold();
            p.reset_bet();
            p.reset_exchange();
            p.deal_new_hand(&mut deck, hand_size)?;
            if p.chips() == 0 {
                p.fold();
            }
        }
        self.deck = deck;

        self.set_phase(Phase::BettingRound);
        tracing::info!(round = self.round, players = self.active_player_count(), "round started");
        Ok(())
    }

    /// Wager for one seat; over-bets are clamped to the stack. Returns the
    /// amount that went into the pot. Folded seats cannot bet.
    pub fn place_bet(&mut self, seat: usize, amount: u64) -> Result<u64, GameError> {
        self.ensure_active()?;
        self.ensure_seat(seat)?;
        if self.players[seat].is_folded() {
            return Err(GameError::Folded(seat));
        }
        let wagered = self.players[seat].place_bet(amount);
        self.pot += wagered;
        Ok(wagered)
    }

    pub fn fold(&mut self, seat: usize) -> Result<(), GameError> {
        self.ensure_seat(seat)?;
        let p = &self.players[seat];
        if !p.is_folded() && self.active_player_count() <= 1 {
            return Err(GameError::LastActivePlayer(seat));
        }
        self.players[seat].fold();
        Ok(())
    }

    fn open_betting(&mut self) {
        self.betting_passes = 0;
        self.paused_at = None;
    }

    /// One pass around the table in seat order. Humans are asked through
    /// `input`, computer seats follow [`BotPolicy`]. Returns the pot.
    ///
    /// When `input` has no decision for a human seat the pass stops there
    /// ([`Game::awaiting_input`]) and the next call resumes at that seat.
    /// Passes after the first only visit seats that still owe chips.
    pub fn conduct_betting_round(&mut self, input: &mut dyn InputSource) -> Result<u64, GameError> {
        self.ensure_active()?;
        if !self.phase.allows_betting() {
            return Err(GameError::WrongPhase(self.phase));
        }
        let start = self.paused_at.take().unwrap_or(0);
        let reopened = self.betting_passes > 0;
        for seat in start..self.players.len() {
            if self.active_player_count() <= 1 {
                break;
            }
            let p = &mut self.players[seat];
            if p.is_folded() || p.chips() == 0 {
                continue;
            }
            if p.needs_reevaluation() {
                p.reevaluate()?;
            }
            let ctx = BetContext {
                seat,
                high_bet: self.current_high_bet(),
                current_bet: self.players[seat].current_bet(),
                chips: self.players[seat].chips(),
                score: self.players[seat].score(),
                pot: self.pot,
            };
            if reopened && ctx.to_call() == 0 {
                continue;
            }
            let decision = if self.players[seat].is_human() {
                match input.decide_bet(&ctx) {
                    Some(decision) => decision,
                    None => {
                        self.paused_at = Some(seat);
                        tracing::debug!(seat, to_call = ctx.to_call(), "waiting for input");
                        return Ok(self.pot);
                    }
                }
            } else {
                BotPolicy.decide_bet(&ctx)
            };
            match decision {
                BetDecision::Fold => {
                    self.fold(seat)?;
                    tracing::debug!(seat, "fold");
                }
                BetDecision::Call => {
                    let paid = self.place_bet(seat, ctx.to_call())?;
                    tracing::debug!(seat, paid, "call");
                }
                BetDecision::Raise(by) => {
                    let paid = self.place_bet(seat, ctx.to_call().saturating_add(by))?;
                    tracing::debug!(seat, by, paid, "raise");
                }
            }
        }
        self.betting_passes += 1;
        Ok(self.pot)
    }

    /// True when every player still in the round has put in the same amount.
    pub fn is_round_complete(&self) -> bool {
        let high = self.current_high_bet();
        self.players.iter().filter(|p| !p.is_folded()).all(|p| p.current_bet() == high)
    }

    /// Close the betting round and open the exchange.
    pub fn begin_card_exchange(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        match self.phase {
            Phase::CardExchange => Ok(()),
            Phase::BettingRound => {
                self.settle_bets();
                self.open_betting();
                self.set_phase(Phase::CardExchange);
                Ok(())
            }
            other => Err(GameError::WrongPhase(other)),
        }
    }

    /// Replace the listed slots of one seat's hand and re-evaluate it.
    /// Folded seats keep their cards. Each seat exchanges once per round;
    /// an empty list stands pat. Returns how many cards were drawn.
    pub fn exchange_cards(&mut self, seat: usize, indices: &[usize]) -> Result<usize, GameError> {
        self.ensure_active()?;
        if !self.phase.allows_card_exchange() {
            return Err(GameError::WrongPhase(self.phase));
        }
        self.ensure_seat(seat)?;
        let p = &mut self.players[seat];
        if p.is_folded() {
            return Ok(0);
        }
        if p.has_exchanged() {
            return Err(GameError::AlreadyExchanged(seat));
        }
        if indices.is_empty() {
            p.mark_exchanged();
            return Ok(0);
        }
        let drawn = p.exchange_cards(indices, &mut self.deck)?;
        p.mark_exchanged();
        p.reevaluate()?;
        tracing::debug!(seat, drawn, "exchanged cards");
        Ok(drawn)
    }

    pub fn complete_card_exchange(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        if self.phase != Phase::CardExchange {
            return Err(GameError::WrongPhase(self.phase));
        }
        for p in self.players.iter_mut().filter(|p| p.needs_reevaluation()) {
            p.reevaluate()?;
        }
        self.open_betting();
        self.set_phase(Phase::FinalBetting);
        Ok(())
    }

    /// Seats holding the best hand among those still in the round; several
    /// on a tie.
    pub fn determine_winners(&mut self) -> Vec<usize> {
        for (seat, p) in self.players.iter_mut().enumerate() {
            if !p.is_folded() && p.needs_reevaluation() {
                if let Err(err) = p.reevaluate() {
                    tracing::warn!(seat, %err, "could not re-evaluate hand");
                }
            }
        }
        self.set_phase(Phase::WinnerDetermination);

        let best: Option<HandValue> =
            self.players.iter().filter(|p| !p.is_folded()).map(Player::hand_value).max();
        let Some(best) = best else {
            return Vec::new();
        };
        let winners: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded() && p.hand_value() == best)
            .map(|(i, _)| i)
            .collect();
        tracing::info!(?winners, "winners determined");
        winners
    }

    /// Split the pot evenly; the first `pot % n` winners in the given order
    /// get one extra chip. Ends the round.
    ///
    /// # Panics
    /// If `winners` is empty or names a seat that does not exist.
    pub fn distribute_pot(&mut self, winners: &[usize]) {
        assert!(!winners.is_empty(), "distribute_pot called without winners");
        for &w in winners {
            assert!(w < self.players.len(), "winner seat {w} out of range");
        }
        self.set_phase(Phase::PotManagement);
        let n = winners.len() as u64;
        let share = self.pot / n;
        let remainder = self.pot % n;
        for (i, &w) in winners.iter().enumerate() {
            let extra = u64::from((i as u64) < remainder);
            self.players[w].add_chips(share + extra);
        }
        tracing::info!(pot = self.pot, share, remainder, ?winners, "pot distributed");
        self.pot = 0;
        self.end_round();
    }

    fn settle_bets(&mut self) {
        for p in &mut self.players {
            p.record_last_bet();
            p.reset_bet();
        }
    }

    /// Record last bets, clear current ones and enter [`Phase::RoundEnd`].
    pub fn end_round(&mut self) {
        self.settle_bets();
        self.set_phase(Phase::RoundEnd);
    }

    pub fn end_game(&mut self) {
        self.active = false;
        self.set_phase(Phase::GameEnd);
        tracing::info!(rounds = self.round, "game over");
    }

    // --- Drivers ---

    /// Betting passes until bets match or the configured pass limit is hit.
    /// Stops early, resumable, when a human decision is missing.
    pub fn betting_phase(&mut self, input: &mut dyn InputSource) -> Result<u64, GameError> {
        while self.betting_passes < self.config.betting_rounds() {
            self.conduct_betting_round(input)?;
            if self.paused_at.is_some() || self.is_round_complete() {
                break;
            }
        }
        Ok(self.pot)
    }

    /// Every seat still in the round discards and draws once.
    pub fn card_exchange_phase(&mut self, input: &mut dyn InputSource) -> Result<(), GameError> {
        self.begin_card_exchange()?;
        for seat in 0..self.players.len() {
            let p = &self.players[seat];
            if p.is_folded() {
                continue;
            }
            let hand = p.hand();
            let mut discards = if p.is_human() {
                input.choose_discards(seat, &hand)
            } else {
                BotPolicy.choose_discards(&hand)
            };
            if !p.is_human() && discards.len() > self.deck.len() {
                tracing::warn!(seat, "deck too small for full exchange");
                discards.truncate(self.deck.len());
            }
            self.exchange_cards(seat, &discards)?;
        }
        self.complete_card_exchange()
    }

    /// Determine the winners and pay them. Returns the winning seats.
    pub fn showdown(&mut self) -> Result<Vec<usize>, GameError> {
        self.ensure_active()?;
        let pot = self.pot;
        let winners = self.determine_winners();
        if winners.is_empty() {
            tracing::warn!(pot, "no eligible winners");
            self.end_round();
            return Ok(winners);
        }
        let category = self.players[winners[0]].evaluation().category;
        self.distribute_pot(&winners);
        self.last_outcome =
            Some(RoundOutcome { round: self.round, winners: winners.clone(), pot, category: Some(category) });
        Ok(winners)
    }

    /// Play a whole round: deal, bet, exchange, bet, showdown. `input` must
    /// answer every human decision; a missing one is an
    /// [`GameError::AwaitingInput`] error.
    pub fn play_round(&mut self, input: &mut dyn InputSource) -> Result<RoundOutcome, GameError> {
        self.start_new_round()?;
        while self.phase != Phase::RoundEnd {
            crate::engine::step(self, input)?;
            if let Some(seat) = self.paused_at {
                return Err(GameError::AwaitingInput(seat));
            }
        }
        Ok(self.last_outcome.clone().unwrap_or(RoundOutcome {
            round: self.round,
            winners: Vec::new(),
            pot: 0,
            category: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::QueuedInput;

    fn game3() -> Game {
        let mut g = Game::with_seed(GameConfig::default(), 99);
        g.initialize_game(&["A", "B", "C"]).unwrap();
        g
    }

    #[test]
    fn initialize_rejects_bad_seat_lists() {
        let mut g = Game::new(GameConfig::heads_up());
        assert_eq!(g.initialize_game(&[]), Err(GameError::NoPlayers));
        assert_eq!(
            g.initialize_game(&["a", "b", "c"]),
            Err(GameError::TooManyPlayers { count: 3, max: 2 })
        );
        assert!(!g.is_active());
        assert_eq!(g.phase(), Phase::Initialization);
        assert!(g.players().is_empty());
    }

    #[test]
    fn start_new_round_deals_and_opens_betting() {
        let mut g = game3();
        g.start_new_round().unwrap();
        assert_eq!(g.current_round(), 1);
        assert_eq!(g.phase(), Phase::BettingRound);
        assert_eq!(g.cards_remaining(), 52 - 15);
        assert!(g.players().iter().all(|p| !p.is_folded() && p.hand().is_complete()));
    }

    #[test]
    fn last_active_player_cannot_fold() {
        let mut g = game3();
        g.fold(0).unwrap();
        g.fold(1).unwrap();
        assert_eq!(g.fold(2), Err(GameError::LastActivePlayer(2)));
        assert_eq!(g.active_player_count(), 1);
    }

    #[test]
    fn betting_requires_betting_phase() {
        let mut g = game3();
        let err = g.conduct_betting_round(&mut QueuedInput::new()).unwrap_err();
        assert_eq!(err, GameError::WrongPhase(Phase::RoundStart));
    }

    #[test]
    fn exchange_is_bracketed() {
        let mut g = game3();
        g.start_new_round().unwrap();
        assert!(matches!(g.exchange_cards(0, &[0]), Err(GameError::WrongPhase(_))));
        g.begin_card_exchange().unwrap();
        let left = g.cards_remaining();
        assert_eq!(g.exchange_cards(0, &[0, 4]).unwrap(), 2);
        assert_eq!(g.cards_remaining(), left - 2);
        g.complete_card_exchange().unwrap();
        assert_eq!(g.phase(), Phase::FinalBetting);
    }

    #[test]
    fn distribute_gives_remainder_to_first_winners() {
        let mut g = game3();
        for seat in 0..3 {
            g.place_bet(seat, 33).unwrap();
        }
        g.place_bet(0, 2).unwrap();
        assert_eq!(g.pot(), 101);
        g.distribute_pot(&[2, 0, 1]);
        let chips: Vec<u64> = g.players().iter().map(|p| p.chips()).collect();
        // 101 / 3 = 33 rem 2: seats 2 and 0 get 34.
        assert_eq!(chips, vec![1000 - 35 + 34, 1000 - 33 + 33, 1000 - 33 + 34]);
        assert_eq!(g.pot(), 0);
        assert_eq!(g.phase(), Phase::RoundEnd);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn distribute_to_missing_seat_panics() {
        let mut g = game3();
        g.distribute_pot(&[7]);
    }

    #[test]
    #[should_panic(expected = "without winners")]
    fn distribute_without_winners_panics() {
        let mut g = game3();
        g.distribute_pot(&[]);
    }

    #[test]
    fn end_game_is_terminal() {
        let mut g = game3();
        g.end_game();
        assert!(!g.can_continue());
        assert!(!g.advance_phase());
        assert_eq!(g.start_new_round(), Err(GameError::NotActive));
    }

    #[test]
    fn summary_lists_every_player() {
        let mut g = game3();
        g.place_bet(1, 10).unwrap();
        g.fold(2).unwrap();
        let text = g.summary().to_string();
        assert!(text.starts_with("Round 0, Pot: 10"));
        assert!(text.contains("B: 990 chips, bet 10"));
        assert!(text.contains("C: 1000 chips, bet 0 (folded)"));
    }

    fn heads_up_with_quads_bot() -> Game {
        use crate::cards::{parse_cards, CardCode};

        let seat = |name: &str, human: bool, hand: &str| PlayerSnapshot {
            name: name.to_string(),
            chips: 1000,
            human,
            folded: false,
            current_bet: 0,
            last_bet: 0,
            hand: parse_cards(hand).unwrap().into_iter().map(CardCode::from).collect(),
        };
        let mut g = Game::with_seed(GameConfig::default(), 5);
        g.initialize_game_with(&[SeatSpec::human("You"), SeatSpec::bot("Bot")]).unwrap();
        g.start_new_round().unwrap();
        g.restore(&[seat("You", true, "2c 5d 8h Jc Kd"), seat("Bot", false, "Ah Ad As Ac 3s")])
            .unwrap();
        g
    }

    #[test]
    fn betting_pauses_for_a_human_who_owes_chips() {
        let mut g = heads_up_with_quads_bot();
        let mut input = QueuedInput::waiting();
        input.push_bet(0, BetDecision::Call);
        g.betting_phase(&mut input).unwrap();
        assert_eq!(g.awaiting_input(), Some(0));
        assert_eq!(g.pot(), 100);
        assert_eq!(g.players()[0].chips(), 1000);

        input.push_bet(0, BetDecision::Call);
        g.betting_phase(&mut input).unwrap();
        assert_eq!(g.awaiting_input(), None);
        assert!(g.is_round_complete());
        assert_eq!(g.pot(), 200);
        // The bot was already matched and is not asked again.
        assert_eq!(g.players()[1].chips(), 900);
    }

    #[test]
    fn play_round_reports_missing_decision() {
        let mut g = Game::with_seed(GameConfig::default(), 5);
        g.initialize_game_with(&[SeatSpec::human("You"), SeatSpec::bot("Bot")]).unwrap();
        let err = g.play_round(&mut QueuedInput::waiting()).unwrap_err();
        assert_eq!(err, GameError::AwaitingInput(0));
        assert_eq!(g.phase(), Phase::BettingRound);
    }

    #[test]
    fn each_seat_exchanges_once_per_round() {
        let mut g = game3();
        g.start_new_round().unwrap();
        g.begin_card_exchange().unwrap();
        assert_eq!(g.exchange_cards(0, &[0, 1, 2, 3, 4]).unwrap(), 5);
        let left = g.cards_remaining();
        assert_eq!(g.exchange_cards(0, &[0, 1]), Err(GameError::AlreadyExchanged(0)));
        assert_eq!(g.exchange_cards(1, &[]).unwrap(), 0);
        assert_eq!(g.exchange_cards(1, &[2]), Err(GameError::AlreadyExchanged(1)));
        assert_eq!(g.cards_remaining(), left);

        g.complete_card_exchange().unwrap();
        g.set_phase(Phase::RoundEnd);
        g.start_new_round().unwrap();
        assert!(g.players().iter().all(|p| !p.has_exchanged()));
    }

    #[test]
    fn folded_seat_cannot_bet() {
        let mut g = game3();
        g.fold(1).unwrap();
        assert_eq!(g.place_bet(1, 50), Err(GameError::Folded(1)));
        assert_eq!(g.pot(), 0);
        assert_eq!(g.players()[1].chips(), 1000);
    }

    #[test]
    fn same_seed_deals_same_hands() {
        let deal = |seed| {
            let mut g = Game::with_seed(GameConfig::default(), seed);
            g.initialize_game(&["A", "B"]).unwrap();
            assert_eq!(g.cards_remaining(), 52 - 10);
            g.snapshot()
        };
        assert_eq!(deal(11), deal(11));
    }

    #[test]
    fn broke_players_sit_out() {
        let mut g = game3();
        g.place_bet(2, 5000).unwrap();
        g.distribute_pot(&[0]);
        g.start_new_round().unwrap();
        assert!(g.players()[2].is_folded());
        assert_eq!(g.players_with_chips(), 2);
    }
}
