//! Screens of the terminal UI.

mod game;
mod welcome;

pub use game::GameScreen;
pub use welcome::{WelcomeField, WelcomeScreen};
