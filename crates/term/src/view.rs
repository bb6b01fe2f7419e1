//! RunView: maps engine state into display lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::types::Phase;

/// Builds the lines the renderer prints each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunView;

impl RunView {
    /// Render the current state around the latest display payload from the
    /// engine (the Braille strip, or the loss banner once lost).
    pub fn render(&self, game: &GameState, payload: &str) -> Vec<String> {
        vec![
            "DOTDASH".to_string(),
            payload.to_string(),
            format!("SCORE {:>6}   BEST {:>6}", game.display_score(), game.best()),
            match game.phase() {
                Phase::Running => "any key jumps - q quits".to_string(),
                Phase::Lost => "press any key to restart".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_passes_through() {
        let game = GameState::new(1);
        let lines = RunView.render(&game, "\u{2800}\u{28FF}");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "\u{2800}\u{28FF}");
    }

    #[test]
    fn test_hint_follows_phase() {
        let mut game = GameState::with_width(4, 1);
        assert!(RunView.render(&game, "")[3].contains("jumps"));

        // A grounded player on a narrow field loses to the first obstacle.
        for _ in 0..200 {
            game.tick();
            if game.lost() {
                break;
            }
        }
        assert!(game.lost());
        assert!(RunView.render(&game, "")[3].contains("restart"));
    }

    #[test]
    fn test_score_line_shows_clamped_score_and_best() {
        let mut game = GameState::new(9);
        game.tick();
        let lines = RunView.render(&game, "");
        assert!(lines[2].contains("SCORE"));
        assert!(lines[2].contains("BEST"));
        // Early score is still in the negative offset, displayed as 0.
        assert!(lines[2].contains('0'));
    }
}
