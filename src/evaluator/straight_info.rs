use crate::cards::Rank;

/// Number of cards a straight or flush is made of.
pub const RUN_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };

    /// Detect a five-card run. Ace plays high (T-J-Q-K-A) or low (A-2-3-4-5).
    /// Any other length is never a straight.
    pub fn detect(ranks: &[Rank]) -> Self {
        if ranks.len() != RUN_LENGTH {
            return Self::NONE;
        }
        let mut sorted = ranks.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        if sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[0]) };
        }

        // wheel
        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadway_and_wheel() {
        let info =
            StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(info.top_rank, Some(Rank::Ace));

        let info =
            StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn no_wraparound() {
        let info =
            StraightInfo::detect(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three]);
        assert!(!info.is_straight);
    }

    #[test]
    fn paired_ranks_break_the_run() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(!info.is_straight);
    }

    #[test]
    fn short_runs_are_not_straights() {
        let info = StraightInfo::detect(&[Rank::Four, Rank::Three, Rank::Two]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }
}
