//! Game state module - the complete runner simulation
//!
//! Ties together the pixel grid, the jump curve, the hurdle scheduler, and
//! the Braille encoder. `tick` advances the world by one column and returns
//! the payload for the display sink; `input` is the single jump-or-restart
//! action bound to any key.

use crate::braille;
use crate::grid::PixelGrid;
use crate::scheduler::HurdleScheduler;
use crate::types::{
    Phase, BLANK_GLYPH, DEFAULT_GRID_WIDTH, GRID_HEIGHT, JUMP_HEIGHTS, RESTART_DEBOUNCE_TICKS,
};

/// Complete run state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: PixelGrid,
    scheduler: HurdleScheduler,
    /// Index into the jump curve while airborne, `None` when grounded.
    jump_phase: Option<usize>,
    /// Starts at `-(width - 1)` so the displayed score reads 0 once the
    /// first full screen has scrolled past the player.
    score: i64,
    best: u32,
    phase: Phase,
    /// Debounce counter for the restart action.
    ticks_since_loss: u32,
}

impl GameState {
    /// Create a run at the default width with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_width(DEFAULT_GRID_WIDTH, seed)
    }

    /// Create a run over a custom grid width.
    pub fn with_width(width: usize, seed: u32) -> Self {
        Self {
            grid: PixelGrid::new(width),
            scheduler: HurdleScheduler::new(seed),
            jump_phase: None,
            score: initial_score(width),
            best: 0,
            phase: Phase::Running,
            ticks_since_loss: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    /// Raw distance counter; negative until the first screen has scrolled.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Score as shown to the player, clamped at zero.
    pub fn display_score(&self) -> u32 {
        self.score.max(0) as u32
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn is_airborne(&self) -> bool {
        self.jump_phase.is_some()
    }

    /// Rows above the floor right now.
    pub fn current_height(&self) -> usize {
        self.jump_phase.map(|p| JUMP_HEIGHTS[p]).unwrap_or(0)
    }

    /// Grid row the player occupies (always column 0).
    pub fn player_row(&self) -> usize {
        (GRID_HEIGHT - 1) - self.current_height()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut PixelGrid {
        &mut self.grid
    }

    /// Begin a jump if grounded. Airborne presses are ignored; a jump can
    /// be neither chained nor extended.
    pub fn jump(&mut self) {
        if self.phase == Phase::Running && self.jump_phase.is_none() {
            self.jump_phase = Some(0);
        }
    }

    /// The jump-or-restart action bound to any key press.
    pub fn input(&mut self) {
        match self.phase {
            Phase::Running => self.jump(),
            Phase::Lost => {
                if self.ticks_since_loss >= RESTART_DEBOUNCE_TICKS {
                    self.reset();
                }
            }
        }
    }

    /// Reset to the initial state. The best score survives, and the RNG
    /// continues its stream instead of replaying the previous run.
    pub fn reset(&mut self) {
        let width = self.grid.width();
        let seed = self.scheduler.seed();
        let best = self.best;
        *self = Self::with_width(width, seed);
        self.best = best;
    }

    /// Advance the simulation one tick.
    ///
    /// Returns the payload for the display sink: the Braille strip while
    /// running, the loss banner exactly once after a collision, and `None`
    /// afterwards (and on the collision tick itself).
    pub fn tick(&mut self) -> Option<String> {
        if self.phase == Phase::Lost {
            return self.tick_lost();
        }

        // Airborne players ride the curve and land past its end.
        if let Some(p) = self.jump_phase {
            self.jump_phase = if p + 1 < JUMP_HEIGHTS.len() {
                Some(p + 1)
            } else {
                None
            };
        }

        self.grid.scroll_left();

        // The column that just scrolled under the player decides survival.
        if self.grid.get(self.player_row(), 0) {
            self.phase = Phase::Lost;
            self.ticks_since_loss = 0;
            return None;
        }

        self.score += 1;

        let column = self.scheduler.next_column();
        self.grid.write_last_column(column);

        Some(self.compose_frame())
    }

    fn tick_lost(&mut self) -> Option<String> {
        self.ticks_since_loss = self.ticks_since_loss.saturating_add(1);
        if self.ticks_since_loss == 1 {
            let score = self.display_score();
            if score > self.best {
                self.best = score;
            }
            return Some(loss_banner(score));
        }
        None
    }

    /// Player composited into a snapshot; the live grid never contains the
    /// player pixel.
    fn compose_frame(&self) -> String {
        let mut composite = self.grid.clone();
        composite.set(self.player_row(), 0, true);
        braille::render(&composite)
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &HurdleScheduler {
        &self.scheduler
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

fn initial_score(width: usize) -> i64 {
    -(width as i64 - 1)
}

/// Loss banner with every space encoded as the blank Braille glyph, keeping
/// the payload valid for glyph-only display sinks.
fn loss_banner(score: u32) -> String {
    format!("You lost! Score: {score}. Press any key to restart.")
        .chars()
        .map(|c| if c == ' ' { BLANK_GLYPH } else { c })
        .collect()
}
