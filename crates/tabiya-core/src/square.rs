//! Board squares addressed by (row, column), top row first.

use std::fmt;

/// A square on the board.
///
/// Row 0 is the eighth rank (Black's back rank) and row 7 is the first rank;
/// column 0 is the a-file. Both components are always in `0..8`: an
/// off-board coordinate has no `Square`, only `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either component is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from in-range components.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both components are below 8.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Create a square from a scan index (`row * 8 + col`).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        Square::new(index / 8, index % 8)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Scan index, `row * 8 + col`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Rank number as printed in algebraic notation (1..=8).
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// File letter as printed in algebraic notation.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    pub const fn same_row(self, other: Square) -> bool {
        self.row == other.row
    }

    pub const fn same_col(self, other: Square) -> bool {
        self.col == other.col
    }

    pub const fn same_diagonal(self, other: Square) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }

    /// Unit step from `self` toward `other`, each component in {-1, 0, 1}.
    pub fn direction_to(self, other: Square) -> (i8, i8) {
        let dr = (other.row as i8 - self.row as i8).signum();
        let dc = (other.col as i8 - self.col as i8).signum();
        (dr, dc)
    }

    /// King-move distance between two squares.
    pub const fn distance(self, other: Square) -> u8 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc { dr } else { dc }
    }

    /// All 64 squares in scan order: row 0 (a8..h8) first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square::at(i / 8, i % 8))
    }

    // Named square constants
    pub const A8: Square = Square::at(0, 0);
    pub const B8: Square = Square::at(0, 1);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);
    pub const A7: Square = Square::at(1, 0);
    pub const B7: Square = Square::at(1, 1);
    pub const C7: Square = Square::at(1, 2);
    pub const D7: Square = Square::at(1, 3);
    pub const E7: Square = Square::at(1, 4);
    pub const F7: Square = Square::at(1, 5);
    pub const G7: Square = Square::at(1, 6);
    pub const H7: Square = Square::at(1, 7);
    pub const A6: Square = Square::at(2, 0);
    pub const B6: Square = Square::at(2, 1);
    pub const C6: Square = Square::at(2, 2);
    pub const D6: Square = Square::at(2, 3);
    pub const E6: Square = Square::at(2, 4);
    pub const F6: Square = Square::at(2, 5);
    pub const G6: Square = Square::at(2, 6);
    pub const H6: Square = Square::at(2, 7);
    pub const A5: Square = Square::at(3, 0);
    pub const B5: Square = Square::at(3, 1);
    pub const C5: Square = Square::at(3, 2);
    pub const D5: Square = Square::at(3, 3);
    pub const E5: Square = Square::at(3, 4);
    pub const F5: Square = Square::at(3, 5);
    pub const G5: Square = Square::at(3, 6);
    pub const H5: Square = Square::at(3, 7);
    pub const A4: Square = Square::at(4, 0);
    pub const B4: Square = Square::at(4, 1);
    pub const C4: Square = Square::at(4, 2);
    pub const D4: Square = Square::at(4, 3);
    pub const E4: Square = Square::at(4, 4);
    pub const F4: Square = Square::at(4, 5);
    pub const G4: Square = Square::at(4, 6);
    pub const H4: Square = Square::at(4, 7);
    pub const A3: Square = Square::at(5, 0);
    pub const B3: Square = Square::at(5, 1);
    pub const C3: Square = Square::at(5, 2);
    pub const D3: Square = Square::at(5, 3);
    pub const E3: Square = Square::at(5, 4);
    pub const F3: Square = Square::at(5, 5);
    pub const G3: Square = Square::at(5, 6);
    pub const H3: Square = Square::at(5, 7);
    pub const A2: Square = Square::at(6, 0);
    pub const B2: Square = Square::at(6, 1);
    pub const C2: Square = Square::at(6, 2);
    pub const D2: Square = Square::at(6, 3);
    pub const E2: Square = Square::at(6, 4);
    pub const F2: Square = Square::at(6, 5);
    pub const G2: Square = Square::at(6, 6);
    pub const H2: Square = Square::at(6, 7);
    pub const A1: Square = Square::at(7, 0);
    pub const B1: Square = Square::at(7, 1);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn top_row_is_rank_eight() {
        assert_eq!(Square::A8.row(), 0);
        assert_eq!(Square::A8.col(), 0);
        assert_eq!(Square::H1.row(), 7);
        assert_eq!(Square::H1.col(), 7);
        assert_eq!(Square::E1.rank(), 1);
        assert_eq!(Square::E8.rank(), 8);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::new(7, 0).map(|s| s.to_string()).as_deref(), Some("a1"));
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("e44").is_none());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn offsets_stay_on_board() {
        assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
        assert_eq!(Square::A1.offset(1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::H8.offset(-1, 0), None);
        assert_eq!(Square::B1.offset(-2, 1), Some(Square::C3));
    }

    #[test]
    fn line_predicates() {
        assert!(Square::A1.same_row(Square::H1));
        assert!(Square::E2.same_col(Square::E7));
        assert!(Square::A1.same_diagonal(Square::H8));
        assert!(Square::C1.same_diagonal(Square::H6));
        assert!(!Square::C1.same_diagonal(Square::C2));
    }

    #[test]
    fn direction_and_distance() {
        assert_eq!(Square::E1.direction_to(Square::E8), (-1, 0));
        assert_eq!(Square::E4.direction_to(Square::B1), (1, -1));
        assert_eq!(Square::D4.direction_to(Square::D4), (0, 0));
        assert_eq!(Square::A1.distance(Square::H8), 7);
        assert_eq!(Square::E4.distance(Square::F6), 2);
    }

    #[test]
    fn scan_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[63], Square::H1);
        for (i, sq) in squares.iter().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i as u8), Some(*sq));
        }
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::G7), "Square(g7)");
    }
}
