use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Each category detector knows how to recognise its category and build the
/// tiebreak for it.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

fn top_of_run(analysis: &HandAnalysis) -> Vec<Rank> {
    analysis.straight_info.top_rank.into_iter().collect()
}

fn group_then_kickers(lead: &[Rank], analysis: &HandAnalysis, kickers: usize) -> Vec<Rank> {
    let mut tiebreak = lead.to_vec();
    tiebreak.extend(analysis.rank_groups.kickers().into_iter().take(kickers));
    tiebreak
}

pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush() && analysis.straight_info.top_rank == Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::RoyalFlush, &top_of_run(analysis))
    }
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::StraightFlush, &top_of_run(analysis))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let lead: Vec<Rank> = analysis.rank_groups.quad().into_iter().collect();
        let tiebreak = group_then_kickers(&lead, analysis, 1);
        analysis.build_evaluation(Category::FourOfAKind, &tiebreak)
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let mut tiebreak: Vec<Rank> = analysis.rank_groups.trips().into_iter().collect();
        tiebreak.extend(analysis.rank_groups.pairs().into_iter().take(1));
        analysis.build_evaluation(Category::FullHouse, &tiebreak)
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Flush, &analysis.ranks)
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Straight, &top_of_run(analysis))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let lead: Vec<Rank> = analysis.rank_groups.trips().into_iter().collect();
        let tiebreak = group_then_kickers(&lead, analysis, 2);
        analysis.build_evaluation(Category::ThreeOfAKind, &tiebreak)
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() >= 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pairs: Vec<Rank> = analysis.rank_groups.pairs().into_iter().take(2).collect();
        let tiebreak = group_then_kickers(&pairs, analysis, 1);
        analysis.build_evaluation(Category::TwoPair, &tiebreak)
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pair: Vec<Rank> = analysis.rank_groups.pairs();
        let tiebreak = group_then_kickers(&pair, analysis, 3);
        analysis.build_evaluation(Category::Pair, &tiebreak)
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // fallback
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard, &analysis.ranks)
    }
}

/// Highest category first; the first match wins.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
