use thiserror::Error;

/// Widest board extent supported in either dimension. File letters run
/// "a" through "z", then "aa" through "zz", so index 701 ("zz") is the
/// last addressable file.
pub const MAX_BOARD_EXTENT: usize = 702;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("file index {index} is outside the supported range 0..{}", MAX_BOARD_EXTENT)]
    FileIndexOutOfRange { index: usize },
    #[error("malformed file letter {letter:?}, expected one or two lowercase a-z characters")]
    MalformedFileLetter { letter: String },
    #[error("malformed position notation {notation:?}, expected file letters followed by a rank number")]
    MalformedNotation { notation: String },
    #[error("rank number must be a positive integer, got {rank:?}")]
    InvalidRankNumber { rank: String },
}

/// Maps a zero-based file index to its letter form: 0 is "a", 25 is "z",
/// 26 is "aa", 701 is "zz". Two-letter files have no "zero-th" leading
/// letter, so the leading letter is offset by one less than the trailing
/// one. Negative and fractional indices are unrepresentable by `usize`.
pub fn index_to_file_letter(index: usize) -> Result<String, CoordinateError> {
    if index >= MAX_BOARD_EXTENT {
        return Err(CoordinateError::FileIndexOutOfRange { index });
    }
    if index < 26 {
        return Ok(((b'a' + index as u8) as char).to_string());
    }
    let leading = (b'a' - 1 + (index / 26) as u8) as char;
    let trailing = (b'a' + (index % 26) as u8) as char;
    Ok(format!("{}{}", leading, trailing))
}

/// Inverse of [`index_to_file_letter`]. Accepts exactly one or two ASCII
/// lowercase letters; anything else is malformed.
pub fn file_letter_to_index(letter: &str) -> Result<usize, CoordinateError> {
    let malformed = || CoordinateError::MalformedFileLetter {
        letter: letter.to_string(),
    };
    match letter.as_bytes() {
        [c] if c.is_ascii_lowercase() => Ok((c - b'a') as usize),
        [c1, c2] if c1.is_ascii_lowercase() && c2.is_ascii_lowercase() => {
            Ok(((c1 - b'a') as usize + 1) * 26 + (c2 - b'a') as usize)
        }
        _ => Err(malformed()),
    }
}
