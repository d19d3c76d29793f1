//! 3x5 bitmap font for the digits 0-9

/// Glyph width in pixels
pub const GLYPH_WIDTH: usize = 3;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 5;

/// Font errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Requested digit is not in 0..=9
    InvalidDigit(u8),
}

/// A 3 wide by 5 tall pixel pattern, indexed `[row][column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl Glyph {
    /// Build a glyph from rows of `#` (lit) and `.` (off)
    const fn from_art(art: [&[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        let mut rows = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        let mut y = 0;
        while y < GLYPH_HEIGHT {
            let mut x = 0;
            while x < GLYPH_WIDTH {
                rows[y][x] = art[y][x] == b'#';
                x += 1;
            }
            y += 1;
        }
        Self { rows }
    }

    /// Build a glyph from a full grid
    pub const fn from_rows(rows: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Check if the cell at column `dx`, row `dy` is lit
    pub fn is_lit(&self, dx: usize, dy: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.get(dx))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the (dx, dy) offsets of every lit cell, row by row
    pub fn lit_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, lit)| **lit)
                .map(move |(dx, _)| (dx as u8, dy as u8))
        })
    }
}

#[rustfmt::skip]
const GLYPHS: [Glyph; 10] = [
    Glyph::from_art([b"###", b"#.#", b"#.#", b"#.#", b"###"]), // 0
    Glyph::from_art([b"##.", b".#.", b".#.", b".#.", b"###"]), // 1
    Glyph::from_art([b"###", b"..#", b"###", b"#..", b"###"]), // 2
    Glyph::from_art([b"###", b"..#", b"###", b"..#", b"###"]), // 3
    Glyph::from_art([b"#.#", b"#.#", b"###", b"..#", b"..#"]), // 4
    Glyph::from_art([b"###", b"#..", b"###", b"..#", b"###"]), // 5
    Glyph::from_art([b"##.", b"#..", b"###", b"#.#", b"###"]), // 6
    Glyph::from_art([b"###", b"..#", b"..#", b"..#", b"..#"]), // 7
    Glyph::from_art([b"###", b"#.#", b"###", b"#.#", b"###"]), // 8
    Glyph::from_art([b"###", b"#.#", b"###", b"..#", b"..#"]), // 9
];

/// Look up the glyph for a digit
pub fn glyph(digit: u8) -> Result<&'static Glyph, FontError> {
    GLYPHS
        .get(digit as usize)
        .ok_or(FontError::InvalidDigit(digit))
}

/// Map a glyph back to its digit
pub fn decode(glyph: &Glyph) -> Option<u8> {
    GLYPHS.iter().position(|g| g == glyph).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Column-major 15-bit packing, MSB is the top-left cell
    const PACKED: [u16; 10] = [
        0b111111000111111,
        0b100011111100001,
        0b101111010111101,
        0b101011010111111,
        0b111000010011111,
        0b111011010110111,
        0b111111010100111,
        0b100001000011111,
        0b111111010111111,
        0b111001010011111,
    ];

    fn unpack(bits: u16) -> Glyph {
        let cols = [(bits >> 10) & 0b11111, (bits >> 5) & 0b11111, bits & 0b11111];
        let mut rows = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (dx, col) in cols.iter().enumerate() {
            for (dy, row) in rows.iter_mut().enumerate() {
                row[dx] = col & (1 << (4 - dy)) != 0;
            }
        }
        Glyph::from_rows(rows)
    }

    #[test]
    fn test_matches_packed_bitmaps() {
        for (digit, bits) in PACKED.iter().enumerate() {
            assert_eq!(*glyph(digit as u8).unwrap(), unpack(*bits), "digit {}", digit);
        }
    }

    #[test]
    fn test_every_digit_has_lit_cells() {
        for digit in 0..=9 {
            assert!(glyph(digit).unwrap().lit_cells().count() > 0);
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for digit in 0..=9 {
            assert_eq!(decode(glyph(digit).unwrap()), Some(digit));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(glyph(10), Err(FontError::InvalidDigit(10)));
        assert_eq!(glyph(255), Err(FontError::InvalidDigit(255)));
    }

    #[test]
    fn test_lit_cells_of_one() {
        let one = glyph(1).unwrap();
        assert!(one.is_lit(0, 0));
        assert!(!one.is_lit(2, 0));
        assert!(!one.is_lit(3, 0));
        assert_eq!(one.lit_cells().count(), 8);
        assert_eq!(one.lit_cells().next(), Some((0, 0)));
    }

    #[test]
    fn test_blank_grid_decodes_to_none() {
        let blank = Glyph::from_rows([[false; GLYPH_WIDTH]; GLYPH_HEIGHT]);
        assert_eq!(decode(&blank), None);
    }
}
