//! Piece-placement text (the first FEN field) for [`Board`].
//!
//! The first segment describes row 0 (Black's back rank), matching FEN's
//! rank-8-first ordering, so `Square(row, col)` maps directly onto the text.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement text for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a piece-placement string.
    ///
    /// Only the placement field is read; a full FEN line is accepted and its
    /// remaining fields are ignored. The result is not structurally validated,
    /// so fixtures may omit kings; call [`Board::validate`] when that matters.
    pub fn from_placement(text: &str) -> Result<Board, FenError> {
        let placement = text.split_whitespace().next().unwrap_or_default();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_index, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col = col.saturating_add(digit as u8);
                    continue;
                }

                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::new(row_index as u8, col).ok_or(FenError::BadRankLength {
                    rank_index: row_index,
                    length: col as usize + 1,
                })?;
                board.place(sq, piece);
                col += 1;
            }

            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index: row_index,
                    length: col as usize,
                });
            }
        }

        Ok(board)
    }

    /// Serialize the piece placement.
    pub fn to_placement(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(text: &str) -> Result<Board, FenError> {
        Board::from_placement(text)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().iter().enumerate() {
            let mut empty_count = 0u8;

            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row_idx < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::error::FenError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_placement_matches_starting_position() {
        let parsed: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
        assert_eq!(Board::starting_position().to_placement(), STARTING_PLACEMENT);
    }

    #[test]
    fn full_fen_line_is_accepted() {
        let board =
            Board::from_placement("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.piece_at(Square::at(4, 4)), Some(Piece::WHITE_PAWN));
        assert!(board.is_empty(Square::at(6, 4)));
    }

    #[test]
    fn sparse_fixture_without_kings() {
        let board = Board::from_placement("8/8/8/3r4/8/8/8/8").unwrap();
        assert_eq!(board.piece_count(), 1);
        assert_eq!(board.piece_at(Square::at(3, 3)), Some(Piece::BLACK_ROOK));
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(FenError::WrongRankCount { found: 3 })
        );
    }

    #[test]
    fn bad_row_length() {
        assert!(matches!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPieceChar { character: '9' })
        ));
        assert!(matches!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(FenError::BadRankLength { rank_index: 0, length: 7 })
        ));
        assert!(matches!(
            Board::from_placement("8p/8/8/8/8/8/8/8"),
            Err(FenError::BadRankLength { rank_index: 0, length: 9 })
        ));
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            Board::from_placement("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::InvalidPieceChar { character: 'x' })
        );
    }
}
