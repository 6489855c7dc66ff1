//! Board structure with side-to-move tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Direction axis pairs for win checking: horizontal, vertical, both diagonals
const AXES: [[(i32, i32); 2]; 4] = [
    [(0, 1), (0, -1)],
    [(1, 0), (-1, 0)],
    [(1, 1), (-1, -1)],
    [(1, -1), (-1, 1)],
];

/// Game board: one bitboard per color plus the side to move.
///
/// The board starts empty with Black to move. `make_move` places a stone
/// for the side to move but never advances the turn; callers alternate
/// turns themselves via `switch_turn`. Cloning produces a fully independent
/// copy, which is how the search explores hypothetical continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    /// Side to move (never `Empty`)
    to_move: Stone,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            to_move: Stone::Black,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get stone at signed coordinates; out-of-range reads as `Empty`
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Stone {
        if Pos::is_valid(row, col) {
            self.get(Pos::new(row as u8, col as u8))
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// True iff the coordinates are in bounds and the cell is empty
    #[inline]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col) && self.is_empty(Pos::new(row as u8, col as u8))
    }

    /// Side to move
    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Flip the side to move
    #[inline]
    pub fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Set the side to move. `Empty` is silently ignored.
    #[inline]
    pub fn set_turn(&mut self, stone: Stone) {
        if stone != Stone::Empty {
            self.to_move = stone;
        }
    }

    /// Place the side-to-move stone at the given coordinates.
    ///
    /// Returns `false` (leaving the board unchanged) if the cell is out of
    /// bounds or occupied. Does not advance the turn; the caller alternates
    /// turns after checking for a win.
    #[inline]
    pub fn make_move(&mut self, row: i32, col: i32) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.place_stone(Pos::new(row as u8, col as u8), self.to_move);
        true
    }

    /// Place a stone unconditionally (no validity check).
    /// Use `make_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Check whether the last move at `pos` completed five or more in a row.
    ///
    /// Counts contiguous side-to-move stones outward along each of the four
    /// axis pairs through `pos`. Called after `make_move` and before
    /// `switch_turn`, so the side to move is still the placer. Overlines
    /// (runs longer than five) count as wins.
    #[must_use]
    pub fn check_win(&self, pos: Pos) -> bool {
        for axis in &AXES {
            let mut count = 1;
            for &(dr, dc) in axis {
                let mut r = i32::from(pos.row) + dr;
                let mut c = i32::from(pos.col) + dc;
                while self.stone_at(r, c) == self.to_move {
                    count += 1;
                    if count >= 5 {
                        return true;
                    }
                    r += dr;
                    c += dc;
                }
            }
            if count >= 5 {
                return true;
            }
        }
        false
    }

    /// All empty cells in row-major order.
    /// The order is stable so searches and tests are deterministic.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(r, c);
                if self.is_empty(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Coordinate-labelled text rendering, useful when debugging searches
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{c:2}")?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE as u8 {
            write!(f, "{r:2} |")?;
            for c in 0..BOARD_SIZE as u8 {
                let ch = match self.get(Pos::new(r, c)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}
