//! Confetti burst planning
//!
//! Purely cosmetic. The plan is computed here from a seeded RNG; the DOM side
//! spawns one fixed-position dot per piece and removes it after its lifetime.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Piece colors (indigo, pink, amber, emerald, red)
pub const CONFETTI_COLORS: [&str; 5] = ["#6366f1", "#ec4899", "#f59e0b", "#10b981", "#ef4444"];

/// Shortest fall animation (s)
pub const MIN_FALL_SECS: f32 = 2.0;
/// Longest fall animation (s, exclusive)
pub const MAX_FALL_SECS: f32 = 5.0;

/// Keyframes the falling pieces animate with
pub const CONFETTI_KEYFRAMES: &str = "
@keyframes confettiFall {
    0% { transform: translateY(-10px) rotate(0deg); opacity: 1; }
    100% { transform: translateY(100vh) rotate(720deg); opacity: 0; }
}";

/// One falling dot
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Delay from burst start until the piece is spawned (ms)
    pub spawn_delay_ms: u32,
    /// Horizontal start position (vw, 0..100)
    pub left_vw: f32,
    pub color: &'static str,
    /// Fall animation length (s)
    pub fall_secs: f32,
}

impl ConfettiPiece {
    /// Inline style for the spawned element
    pub fn style(&self) -> String {
        format!(
            "position: fixed; left: {:.3}vw; top: -10px; width: 10px; height: 10px; \
             background-color: {}; border-radius: 50%; pointer-events: none; z-index: 9999; \
             animation: confettiFall {:.3}s linear forwards;",
            self.left_vw, self.color, self.fall_secs
        )
    }
}

/// Seeded planner for confetti bursts
#[derive(Debug, Clone)]
pub struct ConfettiPlanner {
    rng: Pcg32,
    count: usize,
    stagger_ms: u32,
}

impl ConfettiPlanner {
    pub fn new(seed: u64, count: usize, stagger_ms: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            count,
            stagger_ms,
        }
    }

    /// Plan the next burst, pieces ordered by spawn time
    pub fn plan_burst(&mut self) -> Vec<ConfettiPiece> {
        (0..self.count)
            .map(|i| ConfettiPiece {
                spawn_delay_ms: (i as u32).saturating_mul(self.stagger_ms),
                left_vw: self.rng.random::<f32>() * 100.0,
                color: CONFETTI_COLORS[self.rng.random_range(0..CONFETTI_COLORS.len())],
                fall_secs: self.rng.random_range(MIN_FALL_SECS..MAX_FALL_SECS),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_burst_shape() {
        let mut planner = ConfettiPlanner::new(7, CONFETTI_COUNT, CONFETTI_STAGGER_MS);
        let burst = planner.plan_burst();
        assert_eq!(burst.len(), 50);
        assert_eq!(burst[0].spawn_delay_ms, 0);
        assert_eq!(burst[49].spawn_delay_ms, 49 * 50);
        for piece in &burst {
            assert!((0.0..100.0).contains(&piece.left_vw));
            assert!((MIN_FALL_SECS..MAX_FALL_SECS).contains(&piece.fall_secs));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn test_huge_stagger_saturates() {
        let burst = ConfettiPlanner::new(3, 50, 100_000_000).plan_burst();
        assert_eq!(burst[0].spawn_delay_ms, 0);
        assert_eq!(burst[1].spawn_delay_ms, 100_000_000);
        assert_eq!(burst[49].spawn_delay_ms, u32::MAX);
    }

    #[test]
    fn test_same_seed_same_burst() {
        let a = ConfettiPlanner::new(42, 10, 50).plan_burst();
        let b = ConfettiPlanner::new(42, 10, 50).plan_burst();
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_mentions_animation() {
        let piece = ConfettiPiece {
            spawn_delay_ms: 0,
            left_vw: 12.5,
            color: "#6366f1",
            fall_secs: 3.25,
        };
        let style = piece.style();
        assert!(style.contains("left: 12.500vw"));
        assert!(style.contains("background-color: #6366f1"));
        assert!(style.contains("confettiFall 3.250s linear forwards"));
    }
}
