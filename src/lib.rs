// Library interface for dead-hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod gallows;
pub mod game_state;
pub mod logging;
pub mod songbank;

// Re-export commonly used items for easier testing
pub use engine::{GuessOutcome, GuessState, RoundStatus, accept_guess, is_solved, render_mask};
pub use game_state::{BoardView, GameInterface, RoundResult, Scoreboard, game_loop, play_round};
pub use songbank::{EMBEDDED_SONGBANK, load_songbank_from_str};
