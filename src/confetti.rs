//! Confetti Layout
//!
//! Computes where each confetti piece starts and how it falls.
//! The overlay component only turns pieces into styled elements.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfettiConfig;

/// Longest initial delay, so the burst reads as one wave
const MAX_DELAY_MS: u32 = 1200;

/// One falling piece, positioned in CSS pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub color: String,
    pub spin_deg: f64,
    pub drift_px: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl ConfettiPiece {
    /// Inline style; the `confetti-fall` keyframes read the custom properties
    pub fn style(&self, fall_px: u32, repeat: bool) -> String {
        format!(
            "left: {:.1}px; width: {:.1}px; height: {:.1}px; background: {}; \
             --drift: {:.1}px; --spin: {:.0}deg; --fall: {}px; \
             animation-delay: {}ms; animation-duration: {}ms; animation-iteration-count: {};",
            self.left_px,
            self.width_px,
            self.height_px,
            self.color,
            self.drift_px,
            self.spin_deg,
            fall_px,
            self.delay_ms,
            self.duration_ms,
            if repeat { "infinite" } else { "1" },
        )
    }
}

/// Lay out `config.particle_count` pieces across `width` pixels.
///
/// Deterministic for a given seed and width.
pub fn layout_pieces(config: &ConfettiConfig, width: f64) -> Vec<ConfettiPiece> {
    if config.colors.is_empty() {
        return Vec::new();
    }
    let width = width.max(0.0);
    let mut rng = SmallRng::seed_from_u64(config.seed);

    (0..config.particle_count)
        .map(|_| {
            let left_px = if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 };
            let width_px = rng.gen_range(6.0..12.0);
            ConfettiPiece {
                left_px,
                width_px,
                height_px: width_px * rng.gen_range(0.4..1.0),
                color: config.colors[rng.gen_range(0..config.colors.len())].clone(),
                spin_deg: rng.gen_range(-720.0..720.0),
                drift_px: rng.gen_range(-80.0..80.0),
                delay_ms: rng.gen_range(0..MAX_DELAY_MS),
                duration_ms: rng.gen_range(2500..4500),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_count_and_palette() {
        let config = ConfettiConfig::default();
        let pieces = layout_pieces(&config, 800.0);
        assert_eq!(pieces.len(), config.particle_count);
        for piece in &pieces {
            assert!(config.colors.contains(&piece.color));
            assert!(piece.left_px >= 0.0 && piece.left_px < 800.0);
            assert!(piece.delay_ms < MAX_DELAY_MS);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let config = ConfettiConfig::default();
        assert_eq!(layout_pieces(&config, 640.0), layout_pieces(&config, 640.0));

        let other = ConfettiConfig { seed: config.seed + 1, ..config.clone() };
        assert_ne!(layout_pieces(&config, 640.0), layout_pieces(&other, 640.0));
    }

    #[test]
    fn test_zero_width_and_empty_palette() {
        let config = ConfettiConfig { particle_count: 10, ..Default::default() };
        assert!(layout_pieces(&config, 0.0).iter().all(|p| p.left_px == 0.0));

        let empty = ConfettiConfig { colors: Vec::new(), ..config };
        assert!(layout_pieces(&empty, 500.0).is_empty());
    }

    #[test]
    fn test_style_one_shot_vs_repeat() {
        let config = ConfettiConfig { particle_count: 1, ..Default::default() };
        let piece = &layout_pieces(&config, 300.0)[0];
        assert!(piece.style(600, false).contains("animation-iteration-count: 1;"));
        assert!(piece.style(600, true).contains("animation-iteration-count: infinite;"));
        assert!(piece.style(600, false).contains("--fall: 600px;"));
    }
}
