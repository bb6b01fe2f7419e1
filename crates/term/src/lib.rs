//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: [`view::RunView`] maps engine
//! state into plain display lines (pure, unit-testable) and
//! [`renderer::TerminalRenderer`] flushes those lines to a real terminal
//! through a reusable write buffer.

pub mod renderer;
pub mod view;

pub use dotdash_core as core;
pub use dotdash_types as types;

pub use renderer::TerminalRenderer;
pub use view::RunView;
