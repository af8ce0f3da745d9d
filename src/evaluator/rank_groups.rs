use crate::cards::Rank;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from a count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|(_, count)| *count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unpaired ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    /// True when every rank appears once.
    pub fn all_distinct(&self) -> bool {
        self.groups.iter().all(|(_, count)| *count == 1)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut c = [0u8; 15];
        for &(rank, n) in pairs {
            c[rank as usize] = n;
        }
        c
    }

    #[test]
    fn quad_with_kicker() {
        let g = RankGroups::from_counts(&counts(&[(14, 4), (13, 1)]));
        assert_eq!(g.quad(), Some(Rank::Ace));
        assert_eq!(g.kickers(), vec![Rank::King]);
        assert!(g.pairs().is_empty());
    }

    #[test]
    fn full_house_needs_trips_and_pair() {
        let g = RankGroups::from_counts(&counts(&[(14, 3), (13, 2)]));
        assert!(g.has_full_house());
        let g = RankGroups::from_counts(&counts(&[(14, 3)]));
        assert!(!g.has_full_house());
    }

    #[test]
    fn short_hand_groups() {
        // three-card hand: 8 8 A
        let g = RankGroups::from_counts(&counts(&[(8, 2), (14, 1)]));
        assert_eq!(g.pairs(), vec![Rank::Eight]);
        assert_eq!(g.kickers(), vec![Rank::Ace]);
        assert!(!g.all_distinct());
    }

    #[test]
    fn sorted_by_count_then_rank() {
        let g = RankGroups::from_counts(&counts(&[(5, 1), (14, 1), (10, 2)]));
        let ranks: Vec<Rank> = g.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Ace, Rank::Five]);
    }
}
