//! Glyphs and colours for board symbols.

use crate::types::Symbol;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb, bold: bool) -> Self {
        Self { fg, bg, bold }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0), false)
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Two terminal columns per board cell compensate for glyph aspect ratio.
pub const CELL_WIDTH: u16 = 2;

/// Glyph (exactly `CELL_WIDTH` columns wide) and style for a symbol
pub fn appearance(symbol: Symbol) -> (&'static str, CellStyle) {
    match symbol {
        Symbol::Empty => (" .", CellStyle::new(Rgb::new(80, 80, 90), WELL_BG, false)),
        Symbol::Wall => ("▓▓", CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0), false)),
        Symbol::Block => ("[]", CellStyle::new(Rgb::new(90, 170, 230), WELL_BG, false)),
        Symbol::Active => ("[]", CellStyle::new(Rgb::new(250, 210, 70), WELL_BG, true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_span_one_board_cell() {
        for symbol in [Symbol::Empty, Symbol::Wall, Symbol::Block, Symbol::Active] {
            let (glyph, _) = appearance(symbol);
            assert_eq!(glyph.chars().count(), CELL_WIDTH as usize, "{symbol:?}");
        }
    }

    #[test]
    fn active_piece_stands_out_from_locked_blocks() {
        let (_, active) = appearance(Symbol::Active);
        let (_, block) = appearance(Symbol::Block);
        assert_ne!(active, block);
    }
}
