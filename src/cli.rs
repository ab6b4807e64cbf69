use crate::game_state::{BoardView, GameInterface, GuessProblem, PlayerInput, Scoreboard};
use crate::gallows;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

const BANNER_WIDTH: usize = 44;

/// Grateful Dead hangman. No options: the songbank and the wrong-guess
/// limit are fixed. Clap still supplies --help/--version and rejects
/// stray arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn clear_screen() {
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
        log::debug!("screen clear failed: {e}");
    }
}

fn print_banner() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("       GRATEFUL DEAD HANGMAN");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Terminal implementation of the game interface: reads lines from any
/// `BufRead` (stdin in production, a cursor in tests) and writes the
/// board to stdout.
pub struct ConsoleInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// One raw line, or `None` once the input stream is exhausted.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf),
            Err(e) => {
                log::debug!("input read failed: {e}");
                None
            }
        }
    }

    /// Show a message and hold until the player presses Enter.
    fn pause(&mut self, message: &str) {
        print!("  {message} (press Enter)");
        let _ = io::stdout().flush();
        let _ = self.read_line();
    }
}

impl<R: BufRead> GameInterface for ConsoleInterface<R> {
    fn show_intro(&mut self) {
        clear_screen();
        print_banner();
        println!();
        println!("  Guess the Grateful Dead song title,");
        println!("  one letter at a time!");
        println!();
        println!("  You get {} wrong guesses before", gallows::MAX_WRONG);
        println!("  the Deadhead is hung.");
        println!();
        self.pause("Press Enter to start...");
    }

    fn show_board(&mut self, view: &BoardView) {
        clear_screen();
        print_banner();
        println!("{}", view.stage);
        println!("  Song:  {}", view.masked_title);
        let wrong = if view.wrong_letters.is_empty() {
            "(none)".to_string()
        } else {
            view.wrong_letters
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("  Wrong: {wrong}");
        println!("  Guesses left: {}", view.guesses_left);
        println!("{}", "-".repeat(BANNER_WIDTH));
    }

    fn read_guess(&mut self) -> PlayerInput {
        print!("\n  Guess a letter: ");
        let _ = io::stdout().flush();
        match self.read_line() {
            Some(line) => PlayerInput::Line(line),
            None => PlayerInput::Quit,
        }
    }

    fn show_guess_problem(&mut self, problem: GuessProblem) {
        match problem {
            GuessProblem::InvalidLength => self.pause("Please enter a single letter."),
            GuessProblem::AlreadyGuessed => self.pause("You already guessed that letter."),
        }
    }

    fn show_win(&mut self, title: &str) {
        println!("\n  You got it! The song is \"{title}\".");
        println!("  What a long, strange trip it's been!\n");
    }

    fn show_loss(&mut self, title: &str) {
        println!("\n  Game over! The song was \"{title}\".");
        println!("  Looks like you need more time on the bus.\n");
    }

    fn show_score(&mut self, score: &Scoreboard) {
        println!("  Score: {} wins out of {} games", score.wins, score.games);
    }

    fn read_play_again(&mut self) -> bool {
        print!("\n  Play again? (y/n): ");
        let _ = io::stdout().flush();
        match self.read_line() {
            Some(line) => line.trim().eq_ignore_ascii_case("y"),
            None => false,
        }
    }

    fn show_farewell(&mut self, score: &Scoreboard) {
        println!();
        println!("  Final score: {}/{}", score.wins, score.games);
        println!("  Fare thee well, Deadhead!");
        println!();
    }
}
