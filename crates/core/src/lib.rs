//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole simulation: the scrolling pixel grid, the
//! bitmap-to-Braille encoder, obstacle templates, the spawn scheduler, and
//! the tick/jump/restart state machine. It has **zero dependencies** on UI
//! or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same obstacle stream
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs headless anywhere a `String` can be displayed
//!
//! # Module Structure
//!
//! - [`grid`]: the 4-row scrolling pixel grid with in-place column shifts
//! - [`braille`]: packs 2x4 pixel blocks into Braille glyphs (U+2800..U+28FF)
//! - [`hurdles`]: obstacle templates with spacing rules and weighted selection
//! - [`scheduler`]: fair, difficulty-ramping obstacle placement
//! - [`rng`]: seeded LCG for reproducible runs
//! - [`game_state`]: complete run state - jump curve, collision, scoring
//!
//! # Game Rules
//!
//! - The player is the leftmost pixel; the world scrolls left one pixel
//!   column per tick.
//! - A jump follows a fixed height curve and cannot be extended or chained.
//! - An obstacle spawns only after a minimum breather, with a probability
//!   that ramps toward certainty the longer the field stays empty.
//! - Every obstacle template is clearable under the jump curve, and enforced
//!   lead/trail gaps keep consecutive obstacles clearable too.
//! - Colliding with an obstacle ends the run; after a short debounce any key
//!   starts a fresh one.
//!
//! # Example
//!
//! ```
//! use dotdash_core::GameState;
//!
//! let mut game = GameState::new(12345);
//!
//! // Each tick yields one Braille frame, 20 glyphs for the default width.
//! let frame = game.tick().expect("running game always yields a frame");
//! assert_eq!(frame.chars().count(), 20);
//!
//! // Any key press is the jump-or-restart action.
//! game.input();
//! ```

pub mod braille;
pub mod game_state;
pub mod grid;
pub mod hurdles;
pub mod rng;
pub mod scheduler;

pub use dotdash_types as types;

// Re-export commonly used items for convenience
pub use braille::{cell_count, cell_glyph, render};
pub use game_state::GameState;
pub use grid::PixelGrid;
pub use hurdles::{HurdleCatalog, HurdleId, HurdleShape};
pub use rng::SimpleRng;
pub use scheduler::{spawn_probability, HurdleScheduler};
