//! ASCII-art gallows, one stage per wrong guess.

pub const STAGES: [&str; 7] = [
    r"
  ------
  |    |
  |
  |
  |
  |
------
",
    r"
  ------
  |    |
  |    O
  |
  |
  |
------
",
    r"
  ------
  |    |
  |    O
  |    |
  |
  |
------
",
    r"
  ------
  |    |
  |    O
  |   /|
  |
  |
------
",
    r"
  ------
  |    |
  |    O
  |   /|\
  |
  |
------
",
    r"
  ------
  |    |
  |    O
  |   /|\
  |   /
  |
------
",
    r"
  ------
  |    |
  |    O
  |   /|\
  |   / \
  |
------
",
];

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG: usize = STAGES.len() - 1;

/// Stage art for a given wrong-guess count, clamped to the final stage.
#[must_use]
pub fn stage(wrong_count: usize) -> &'static str {
    STAGES[wrong_count.min(MAX_WRONG)]
}
