//! Two-line character display.
//!
//! Row 0 carries a header, row 1 live content that is overwritten in
//! place.  Writes never erase what they don't cover, so callers pad
//! their strings to wipe stale trailing characters.

use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};

/// Character-cell display driven by the session.
pub trait TextDisplay {
    /// Blank every cell and home the cursor.
    fn clear(&mut self);
    /// Write `text` at the cursor, advancing it.  Text past the right
    /// edge is dropped.
    fn write(&mut self, text: &str);
    fn move_cursor(&mut self, row: u8, col: u8);
    /// Move to column 0 of the next row.
    fn newline(&mut self);
}

/// In-memory character cells with a cursor.
///
/// The OLED driver renders from this buffer; tests read it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    cells: [[u8; DISPLAY_COLS]; DISPLAY_ROWS],
    row: usize,
    col: usize,
    dirty: bool,
}

impl CharGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; DISPLAY_COLS]; DISPLAY_ROWS],
            row: 0,
            col: 0,
            dirty: true,
        }
    }

    /// Contents of `row`, trailing blanks included.
    pub fn line(&self, row: usize) -> &str {
        // Only printable ASCII is ever stored.
        core::str::from_utf8(&self.cells[row]).unwrap_or("")
    }

    /// Contents of `row` without trailing blanks.
    pub fn trimmed(&self, row: usize) -> &str {
        self.line(row).trim_end()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Returns `true` once, after any change since the last call.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == b' ')
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for CharGrid {
    fn clear(&mut self) {
        self.cells = [[b' '; DISPLAY_COLS]; DISPLAY_ROWS];
        self.row = 0;
        self.col = 0;
        self.dirty = true;
    }

    fn write(&mut self, text: &str) {
        if self.row >= DISPLAY_ROWS {
            return;
        }
        for ch in text.chars() {
            if self.col >= DISPLAY_COLS {
                break;
            }
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            if self.cells[self.row][self.col] != byte {
                self.cells[self.row][self.col] = byte;
                self.dirty = true;
            }
            self.col += 1;
        }
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        self.row = usize::from(row).min(DISPLAY_ROWS - 1);
        self.col = usize::from(col).min(DISPLAY_COLS);
    }

    fn newline(&mut self) {
        self.row = (self.row + 1).min(DISPLAY_ROWS);
        self.col = 0;
    }
}
