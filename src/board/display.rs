use std::fmt;

use common::coordinate::index_to_file_letter;

use super::RectangularBoard;

impl fmt::Display for RectangularBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ranks render top-down so the first player's side sits at the bottom
        for rank in (0..self.height()).rev() {
            write!(f, "{:>4} ", rank + 1)?;
            for file in 0..self.width() {
                let position = common::coordinate::Position::new(file, rank);
                let glyph = self
                    .piece_at(position)
                    .map(|piece| piece.display_character())
                    .unwrap_or('.');
                write!(f, " {:2}", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "     ")?;
        for file in 0..self.width() {
            let letter = index_to_file_letter(file).map_err(|_| fmt::Error)?;
            write!(f, " {:2}", letter)?;
        }
        writeln!(f)
    }
}
