use std::collections::HashSet;

/// Per-round guess bookkeeping.
///
/// `wrong_count` always equals `wrong_letters.len()`; the two sets stay
/// disjoint because a letter is classified at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GuessState {
    pub correct_letters: HashSet<char>,
    pub wrong_letters: HashSet<char>,
    pub wrong_count: usize,
}

impl GuessState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn is_guessed(&self, letter: char) -> bool {
        self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Input was not exactly one alphabetic character.
    InvalidLength,
    /// Letter was already classified this round.
    AlreadyGuessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Build the partially-revealed rendering of `title`.
///
/// Spaces widen to a double-space gap, revealed letters keep their
/// original case, punctuation passes through, and everything else
/// becomes an underscore. Elements are joined with single spaces.
#[must_use]
pub fn render_mask(title: &str, correct_letters: &HashSet<char>) -> String {
    let parts: Vec<String> = title
        .chars()
        .map(|ch| {
            if ch == ' ' {
                "  ".to_string()
            } else if correct_letters.contains(&ch.to_ascii_uppercase()) {
                ch.to_string()
            } else if !ch.is_ascii_alphabetic() {
                ch.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    parts.join(" ")
}

/// True iff every letter of `title` has been guessed. Spaces and
/// punctuation never block a solve.
#[must_use]
pub fn is_solved(title: &str, correct_letters: &HashSet<char>) -> bool {
    title
        .chars()
        .all(|ch| !ch.is_ascii_alphabetic() || correct_letters.contains(&ch.to_ascii_uppercase()))
}

/// Validate and classify one raw guess line against `title`, updating
/// `state` in place on a `Correct`/`Wrong` outcome. Rejected guesses
/// leave the state untouched.
pub fn accept_guess(state: &mut GuessState, title: &str, raw_input: &str) -> GuessOutcome {
    let normalized = raw_input.trim().to_uppercase();
    let mut chars = normalized.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => ch,
        _ => return GuessOutcome::InvalidLength,
    };

    if state.is_guessed(letter) {
        return GuessOutcome::AlreadyGuessed;
    }

    if title.to_uppercase().contains(letter) {
        state.correct_letters.insert(letter);
        GuessOutcome::Correct
    } else {
        state.wrong_letters.insert(letter);
        state.wrong_count += 1;
        GuessOutcome::Wrong
    }
}

/// Evaluate the round state machine for one step. The solved check runs
/// first, so a guess that completes the title on the last allowed miss
/// still wins.
#[must_use]
pub fn round_status(title: &str, state: &GuessState, max_wrong: usize) -> RoundStatus {
    if is_solved(title, &state.correct_letters) {
        RoundStatus::Won
    } else if state.wrong_count >= max_wrong {
        RoundStatus::Lost
    } else {
        RoundStatus::InProgress
    }
}
