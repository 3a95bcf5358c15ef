use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::models::CompetitorId;

/// Deterministic roster draw: same seed and division always give the same
/// order. The division number is mixed into the seed so divisions sharing a
/// season seed are drawn independently.
pub fn draw_roster(roster: &[CompetitorId], seed: u64, division_number: u32) -> Vec<CompetitorId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ u64::from(division_number));
    let mut drawn = roster.to_vec();
    drawn.shuffle(&mut rng);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<CompetitorId> {
        (0..12).map(|i| CompetitorId::new(format!("fighter_{i:02}"))).collect()
    }

    #[test]
    fn test_draw_is_deterministic() {
        assert_eq!(draw_roster(&roster(), 42, 1), draw_roster(&roster(), 42, 1));
    }

    #[test]
    fn test_draw_is_a_permutation() {
        let mut drawn = draw_roster(&roster(), 7, 3);
        drawn.sort();
        assert_eq!(drawn, roster());
    }

    #[test]
    fn test_divisions_draw_independently() {
        assert_ne!(draw_roster(&roster(), 42, 1), draw_roster(&roster(), 42, 2));
    }
}
