use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

pub const EMBEDDED_SONGBANK: &str = include_str!("resources/songs.txt");

/// The songbank failed its startup invariants. Reported once on stderr;
/// there is no recovery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongbankError {
    Empty,
    Duplicate(String),
    BadCharacter { title: String, ch: char },
}

impl fmt::Display for SongbankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "songbank is empty"),
            Self::Duplicate(title) => write!(f, "duplicate title in songbank: {title}"),
            Self::BadCharacter { title, ch } => {
                write!(f, "title {title:?} contains unsupported character {ch:?}")
            }
        }
    }
}

impl std::error::Error for SongbankError {}

/// Parse a newline-delimited songbank, keeping titles as written
/// (matching is case-insensitive, display is not).
#[must_use]
pub fn load_songbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check the data invariants: non-empty, no case-insensitive duplicates,
/// titles made only of letters, spaces, and apostrophes.
pub fn validate(songs: &[String]) -> Result<(), SongbankError> {
    if songs.is_empty() {
        return Err(SongbankError::Empty);
    }
    let mut seen = std::collections::HashSet::new();
    for title in songs {
        if let Some(ch) = title
            .chars()
            .find(|&c| !c.is_ascii_alphabetic() && c != ' ' && c != '\'')
        {
            return Err(SongbankError::BadCharacter {
                title: title.clone(),
                ch,
            });
        }
        if !seen.insert(title.to_uppercase()) {
            return Err(SongbankError::Duplicate(title.clone()));
        }
    }
    Ok(())
}

/// Pick one title uniformly at random. The caller supplies the RNG so
/// rounds can be made deterministic under test.
#[must_use]
pub fn pick<'a, R: Rng>(songs: &'a [String], rng: &mut R) -> &'a str {
    songs
        .choose(rng)
        .expect("songbank is validated non-empty at startup")
}
