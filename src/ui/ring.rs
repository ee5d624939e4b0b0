//! The circular progress dial.
//!
//! The dial is a fixed-radius ring whose lit arc shrinks as the phase
//! elapses, exactly like an SVG circle stroke with a growing dash
//! offset: the lit stroke length is the circumference minus
//! [`stroke_offset`].

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::constants::ring::{ARC_STEPS, CIRCUMFERENCE, RADIUS};

/// How much of the dial stroke is dark, in display units. Zero on a
/// freshly-loaded phase, the full circumference at 00:00.
pub fn stroke_offset(fraction_remaining: f64) -> f64 {
    CIRCUMFERENCE * (1.0 - fraction_remaining.clamp(0.0, 1.0))
}

/// The lit portion of the dial, swept clockwise from 12 o'clock.
pub struct ProgressArc {
    /// Portion of the dial still lit, in [0,1].
    pub fraction: f64,
    pub color: Color,
}

impl Shape for ProgressArc {
    fn draw(&self, painter: &mut Painter) {
        let lit = CIRCUMFERENCE - stroke_offset(self.fraction);
        if lit <= 0.0 {
            return;
        }
        let sweep = std::f64::consts::TAU * lit / CIRCUMFERENCE;
        let steps = (ARC_STEPS as f64 * lit / CIRCUMFERENCE).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let angle = std::f64::consts::FRAC_PI_2 - sweep * (i as f64 / steps as f64);
            let x = RADIUS * angle.cos();
            let y = RADIUS * angle.sin();
            if let Some((px, py)) = painter.get_point(x, y) {
                painter.paint(px, py, self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_phase_has_no_offset() {
        assert_eq!(stroke_offset(1.0), 0.0);
    }

    #[test]
    fn elapsed_phase_offsets_the_full_circumference() {
        assert_eq!(stroke_offset(0.0), CIRCUMFERENCE);
        assert!((CIRCUMFERENCE - 2.0 * std::f64::consts::PI * 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_grows_as_time_runs_out() {
        let half = stroke_offset(0.5);
        assert!(half > stroke_offset(0.75));
        assert!(half < stroke_offset(0.25));
        assert!((half - CIRCUMFERENCE / 2.0).abs() < 1e-9);
    }

    #[test]
    fn offset_clamps_out_of_range_fractions() {
        assert_eq!(stroke_offset(1.5), 0.0);
        assert_eq!(stroke_offset(-0.5), CIRCUMFERENCE);
    }
}
