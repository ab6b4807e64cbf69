use crate::engine::{
    GuessOutcome, GuessState, RoundStatus, accept_guess, render_mask, round_status,
};
use crate::gallows;
use crate::songbank::pick;
use rand::Rng;

/// Everything the display sink needs for one board draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub stage: &'static str,
    pub masked_title: String,
    /// Sorted for display; the engine itself never orders them.
    pub wrong_letters: Vec<char>,
    pub guesses_left: usize,
}

impl BoardView {
    #[must_use]
    pub fn new(title: &str, state: &GuessState) -> Self {
        let mut wrong_letters: Vec<char> = state.wrong_letters.iter().copied().collect();
        wrong_letters.sort_unstable();
        Self {
            stage: gallows::stage(state.wrong_count),
            masked_title: render_mask(title, &state.correct_letters),
            wrong_letters,
            guesses_left: gallows::MAX_WRONG.saturating_sub(state.wrong_count),
        }
    }
}

/// Running score, threaded through the outer loop as a plain value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins: u32,
    pub games: u32,
}

/// A recoverable guess rejection, reported and re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessProblem {
    InvalidLength,
    AlreadyGuessed,
}

/// One line of player input, or the end of the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Line(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
    /// Input stream ended mid-round; the session winds down without
    /// scoring the round.
    Quit,
}

/// The seam between the game loop and the terminal. Input methods hand
/// back raw lines; trimming and case-folding are the engine's job.
pub trait GameInterface {
    fn show_intro(&mut self);
    fn show_board(&mut self, view: &BoardView);
    fn read_guess(&mut self) -> PlayerInput;
    fn show_guess_problem(&mut self, problem: GuessProblem);
    fn show_win(&mut self, title: &str);
    fn show_loss(&mut self, title: &str);
    fn show_score(&mut self, score: &Scoreboard);
    fn read_play_again(&mut self) -> bool;
    fn show_farewell(&mut self, score: &Scoreboard);
}

/// Drive one round from a chosen title to its outcome.
pub fn play_round<I: GameInterface>(title: &str, interface: &mut I) -> RoundResult {
    let mut state = GuessState::new();

    loop {
        let view = BoardView::new(title, &state);
        interface.show_board(&view);

        // Solved is checked before exhausted, so a finishing guess on
        // the last allowed miss still wins.
        match round_status(title, &state, gallows::MAX_WRONG) {
            RoundStatus::Won => {
                interface.show_win(title);
                return RoundResult::Won;
            }
            RoundStatus::Lost => {
                interface.show_loss(title);
                return RoundResult::Lost;
            }
            RoundStatus::InProgress => {}
        }

        let raw = match interface.read_guess() {
            PlayerInput::Line(line) => line,
            PlayerInput::Quit => return RoundResult::Quit,
        };

        match accept_guess(&mut state, title, &raw) {
            GuessOutcome::Correct => {
                log::debug!("correct guess, {} letters still hidden", hidden_letters(title, &state));
            }
            GuessOutcome::Wrong => {
                log::debug!("wrong guess, {} misses so far", state.wrong_count);
            }
            GuessOutcome::InvalidLength => {
                interface.show_guess_problem(GuessProblem::InvalidLength);
            }
            GuessOutcome::AlreadyGuessed => {
                interface.show_guess_problem(GuessProblem::AlreadyGuessed);
            }
        }
    }
}

fn hidden_letters(title: &str, state: &GuessState) -> usize {
    title
        .chars()
        .filter(|ch| {
            ch.is_ascii_alphabetic() && !state.correct_letters.contains(&ch.to_ascii_uppercase())
        })
        .count()
}

/// Run rounds until the player declines to continue, returning the
/// final score.
pub fn game_loop<I: GameInterface, R: Rng>(
    songs: &[String],
    interface: &mut I,
    rng: &mut R,
) -> Scoreboard {
    interface.show_intro();

    let mut score = Scoreboard::default();
    loop {
        let title = pick(songs, rng);
        log::debug!("round {} starts, title chosen: {title}", score.games + 1);

        match play_round(title, interface) {
            RoundResult::Won => {
                score.games += 1;
                score.wins += 1;
            }
            RoundResult::Lost => {
                score.games += 1;
            }
            RoundResult::Quit => break,
        }

        interface.show_score(&score);
        if !interface.read_play_again() {
            break;
        }
    }

    log::info!("session over: {} wins in {} games", score.wins, score.games);
    interface.show_farewell(&score);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Scripted interface: feeds canned lines and records what the loop
    /// asked it to display.
    struct Scripted {
        lines: Vec<String>,
        next: usize,
        boards: usize,
        problems: Vec<GuessProblem>,
        wins: Vec<String>,
        losses: Vec<String>,
        last_view: Option<BoardView>,
    }

    impl Scripted {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                next: 0,
                boards: 0,
                problems: Vec::new(),
                wins: Vec::new(),
                losses: Vec::new(),
                last_view: None,
            }
        }

        fn next_line(&mut self) -> Option<String> {
            let line = self.lines.get(self.next).cloned();
            self.next += 1;
            line
        }
    }

    impl GameInterface for Scripted {
        fn show_intro(&mut self) {}

        fn show_board(&mut self, view: &BoardView) {
            self.boards += 1;
            self.last_view = Some(view.clone());
        }

        fn read_guess(&mut self) -> PlayerInput {
            match self.next_line() {
                Some(line) => PlayerInput::Line(line),
                None => PlayerInput::Quit,
            }
        }

        fn show_guess_problem(&mut self, problem: GuessProblem) {
            self.problems.push(problem);
        }

        fn show_win(&mut self, title: &str) {
            self.wins.push(title.to_string());
        }

        fn show_loss(&mut self, title: &str) {
            self.losses.push(title.to_string());
        }

        fn show_score(&mut self, _score: &Scoreboard) {}

        fn read_play_again(&mut self) -> bool {
            matches!(self.next_line().as_deref().map(str::trim), Some("y"))
        }

        fn show_farewell(&mut self, _score: &Scoreboard) {}
    }

    fn bank(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_play_round_win() {
        let mut ui = Scripted::new(&["R", "I", "P", "L", "E"]);
        assert_eq!(play_round("Ripple", &mut ui), RoundResult::Won);
        assert_eq!(ui.wins, vec!["Ripple"]);
        assert!(ui.losses.is_empty());
        // One board per prompt plus the final solved board.
        assert_eq!(ui.boards, 6);
    }

    #[test]
    fn test_play_round_loss_on_sixth_miss() {
        let mut ui = Scripted::new(&["Q", "W", "X", "Y", "Z", "V"]);
        assert_eq!(play_round("Ripple", &mut ui), RoundResult::Lost);
        assert_eq!(ui.losses, vec!["Ripple"]);
        let view = ui.last_view.expect("board drawn");
        assert_eq!(view.guesses_left, 0);
        assert_eq!(view.wrong_letters, vec!['Q', 'V', 'W', 'X', 'Y', 'Z']);
    }

    #[test]
    fn test_play_round_reports_invalid_and_duplicate() {
        let mut ui = Scripted::new(&["AB", "", "R", "R", "I", "P", "L", "E"]);
        assert_eq!(play_round("Ripple", &mut ui), RoundResult::Won);
        assert_eq!(
            ui.problems,
            vec![
                GuessProblem::InvalidLength,
                GuessProblem::InvalidLength,
                GuessProblem::AlreadyGuessed,
            ]
        );
    }

    #[test]
    fn test_play_round_quits_on_end_of_input() {
        let mut ui = Scripted::new(&["R"]);
        assert_eq!(play_round("Ripple", &mut ui), RoundResult::Quit);
        assert!(ui.wins.is_empty());
        assert!(ui.losses.is_empty());
    }

    #[test]
    fn test_board_view_snapshot() {
        let mut state = GuessState::new();
        accept_guess(&mut state, "Dark Star", "D");
        accept_guess(&mut state, "Dark Star", "Q");
        accept_guess(&mut state, "Dark Star", "B");

        let view = BoardView::new("Dark Star", &state);
        assert_eq!(view.masked_title, "D _ _ _    _ _ _ _");
        assert_eq!(view.wrong_letters, vec!['B', 'Q']);
        assert_eq!(view.guesses_left, 4);
        assert_eq!(view.stage, gallows::stage(2));
    }

    #[test]
    fn test_game_loop_single_round_win() {
        let songs = bank(&["Ripple"]);
        let mut ui = Scripted::new(&["R", "I", "P", "L", "E", "n"]);
        let mut rng = StdRng::seed_from_u64(1);
        let score = game_loop(&songs, &mut ui, &mut rng);
        assert_eq!(score, Scoreboard { wins: 1, games: 1 });
    }

    #[test]
    fn test_game_loop_replay_then_decline() {
        let songs = bank(&["Ripple"]);
        let mut ui = Scripted::new(&[
            "R", "I", "P", "L", "E", "y", // win, play again
            "Q", "W", "X", "Y", "Z", "V", "n", // lose, stop
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let score = game_loop(&songs, &mut ui, &mut rng);
        assert_eq!(score, Scoreboard { wins: 1, games: 2 });
    }

    #[test]
    fn test_game_loop_quit_mid_round_scores_nothing() {
        let songs = bank(&["Ripple"]);
        let mut ui = Scripted::new(&["R"]);
        let mut rng = StdRng::seed_from_u64(1);
        let score = game_loop(&songs, &mut ui, &mut rng);
        assert_eq!(score, Scoreboard::default());
    }

    #[test]
    fn test_game_loop_anything_but_y_ends_session() {
        let songs = bank(&["Ripple"]);
        let mut ui = Scripted::new(&["R", "I", "P", "L", "E", "yes please"]);
        let mut rng = StdRng::seed_from_u64(1);
        let score = game_loop(&songs, &mut ui, &mut rng);
        assert_eq!(score, Scoreboard { wins: 1, games: 1 });
    }
}
