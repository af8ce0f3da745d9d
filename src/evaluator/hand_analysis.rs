use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandFlags, HandValue};

/// Pre-computed facts about a hand of at most five cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: Vec<Card>,
    pub ranks: Vec<Rank>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();

        let mut rank_counts = [0u8; 15];
        for rank in &ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = if rank_groups.all_distinct() {
            StraightInfo::detect(&ranks)
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        };

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    pub fn is_straight_flush(&self) -> bool {
        self.suit_info.is_flush && self.straight_info.is_straight
    }

    /// Every category the cards satisfy, independent of which one ranks highest.
    pub fn flags(&self) -> HandFlags {
        let pairs = self.rank_groups.pairs();
        let straight_flush = self.is_straight_flush();
        HandFlags {
            pair: !pairs.is_empty(),
            two_pair: pairs.len() >= 2,
            three_kind: self.rank_groups.trips().is_some(),
            straight: self.straight_info.is_straight,
            flush: self.suit_info.is_flush,
            full_house: self.rank_groups.has_full_house(),
            four_kind: self.rank_groups.quad().is_some(),
            straight_flush,
            royal_flush: straight_flush && self.straight_info.top_rank == Some(Rank::Ace),
        }
    }

    pub fn build_evaluation(&self, category: Category, tiebreak: &[Rank]) -> Evaluation {
        Evaluation {
            category,
            flags: self.flags(),
            best: self.sorted_cards.clone(),
            value: HandValue::from_parts(category, tiebreak),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyse(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn royal_flush_flags() {
        let a = analyse("As Ks Qs Js Ts");
        let f = a.flags();
        assert!(f.royal_flush && f.straight_flush && f.straight && f.flush);
        assert!(!f.pair && !f.three_kind);
    }

    #[test]
    fn full_house_sets_component_flags() {
        let f = analyse("Kh Kd Kc Qs Qh").flags();
        assert!(f.full_house && f.three_kind && f.pair);
        assert!(!f.two_pair && !f.four_kind);
    }

    #[test]
    fn quads_do_not_count_as_pair() {
        let f = analyse("9h 9d 9c 9s 2h").flags();
        assert!(f.four_kind);
        assert!(!f.pair && !f.three_kind);
    }

    #[test]
    fn wheel_is_a_five_high_straight() {
        let a = analyse("Ah 2d 3c 4s 5h");
        assert_eq!(a.straight_info.top_rank, Some(Rank::Five));
        assert!(!a.flags().royal_flush);
    }

    #[test]
    fn sorted_descending() {
        let a = analyse("3s Ah 5d Kc 9s");
        let ranks: Vec<u8> = a.ranks.iter().map(|r| r.value()).collect();
        assert_eq!(ranks, vec![14, 13, 9, 5, 3]);
    }

    #[test]
    fn short_hands_only_group_ranks() {
        let a = analyse("7h 7d 8h");
        let f = a.flags();
        assert!(f.pair);
        assert!(!f.flush && !f.straight && !f.full_house);
    }
}
