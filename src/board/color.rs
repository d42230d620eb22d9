use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Rank direction this color's pieces consider "forward". Relative move
    /// offsets are multiplied by this before they touch the board.
    pub fn orientation(&self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White, Color::Black.opposite());
        assert_eq!(Color::Black, Color::White.opposite());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(1, Color::White.orientation());
        assert_eq!(-1, Color::Black.orientation());
    }
}
