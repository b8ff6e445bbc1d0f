//! Pieces module - 4x4 occupancy patterns and the shape catalogue
//!
//! Every piece is a 4x4 box of booleans. Templates are top-aligned so a piece
//! spawned at row 0 is fully visible. Rotation is a plain 90° clockwise
//! transform of the box (transpose, then mirror); there are no kick tables.

use crate::types::{PieceKind, PATTERN_SIZE, SPAWN_COL, SPAWN_ROW};

/// Offset of an occupied sub-cell from the box origin, `(col, row)`
pub type SubCell = (i8, i8);

/// A 4x4 occupancy box, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    rows: [[bool; PATTERN_SIZE]; PATTERN_SIZE],
}

impl Pattern {
    pub const fn new(rows: [[bool; PATTERN_SIZE]; PATTERN_SIZE]) -> Self {
        Self { rows }
    }

    /// Build a pattern from four 4-character strings, `#` marking occupancy.
    ///
    /// ```
    /// use console_tetris_core::Pattern;
    ///
    /// let o = Pattern::from_rows([".##.", ".##.", "....", "...."]);
    /// assert_eq!(o.occupied().count(), 4);
    /// ```
    pub fn from_rows(rows: [&str; PATTERN_SIZE]) -> Self {
        let mut out = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(PATTERN_SIZE).enumerate() {
                out[r][c] = ch == '#';
            }
        }
        Self { rows: out }
    }

    /// Iterate occupied sub-cells as `(col, row)` offsets
    pub fn occupied(&self) -> impl Iterator<Item = SubCell> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(move |(c, _)| (c as i8, r as i8))
        })
    }

    /// 90° clockwise: `out[r][c] = in[N-1-c][r]`
    pub fn rotated_cw(&self) -> Self {
        let mut out = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        for (r, line) in out.iter_mut().enumerate() {
            for (c, cell) in line.iter_mut().enumerate() {
                *cell = self.rows[PATTERN_SIZE - 1 - c][r];
            }
        }
        Self { rows: out }
    }
}

const fn row(bits: [u8; PATTERN_SIZE]) -> [bool; PATTERN_SIZE] {
    [bits[0] == 1, bits[1] == 1, bits[2] == 1, bits[3] == 1]
}

const EMPTY: [bool; PATTERN_SIZE] = [false; PATTERN_SIZE];

const I_SHAPE: Pattern = Pattern::new([row([1, 1, 1, 1]), EMPTY, EMPTY, EMPTY]);
const O_SHAPE: Pattern = Pattern::new([row([0, 1, 1, 0]), row([0, 1, 1, 0]), EMPTY, EMPTY]);
const T_SHAPE: Pattern = Pattern::new([row([0, 1, 0, 0]), row([1, 1, 1, 0]), EMPTY, EMPTY]);
const S_SHAPE: Pattern = Pattern::new([row([0, 1, 1, 0]), row([1, 1, 0, 0]), EMPTY, EMPTY]);
const Z_SHAPE: Pattern = Pattern::new([row([1, 1, 0, 0]), row([0, 1, 1, 0]), EMPTY, EMPTY]);
const J_SHAPE: Pattern = Pattern::new([row([1, 0, 0, 0]), row([1, 1, 1, 0]), EMPTY, EMPTY]);
const L_SHAPE: Pattern = Pattern::new([row([0, 0, 1, 0]), row([1, 1, 1, 0]), EMPTY, EMPTY]);

/// Get the spawn template for a piece kind
pub fn template(kind: PieceKind) -> &'static Pattern {
    match kind {
        PieceKind::I => &I_SHAPE,
        PieceKind::O => &O_SHAPE,
        PieceKind::T => &T_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
    }
}

/// Active falling piece: its own copy of the pattern plus the box origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub pattern: Pattern,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// Create a piece of `kind` at the spawn coordinate
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            pattern: *template(kind),
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }

    /// Occupied grid coordinates, `(col, row)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.pattern
            .occupied()
            .filter_map(move |(dc, dr)| {
                Some((self.col.checked_add(dc)?, self.row.checked_add(dr)?))
            })
    }
}
