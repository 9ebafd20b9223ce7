//! Character-grid canvas for terminals and tests
//!
//! Each cell covers a block of playfield pixels; a cell is painted if any
//! pixel of a drawn rectangle falls inside it. Cells remember the [`Style`]
//! that last painted them so a color terminal can tint them.

use std::fmt;
use std::ops::Range;

use super::{Canvas, Style};
use crate::sim::{Playfield, Rect};

#[derive(Debug, Clone)]
pub struct TextCanvas {
    field_width: i32,
    field_height: i32,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    styles: Vec<Option<Style>>,
}

impl TextCanvas {
    pub fn new(field: &Playfield, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            field_width: field.width(),
            field_height: field.height(),
            cols,
            rows,
            cells: vec![' '; cols * rows],
            styles: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Style of the last draw that touched the cell; `None` for background
    pub fn style_at(&self, col: usize, row: usize) -> Option<Style> {
        if col < self.cols && row < self.rows {
            self.styles[row * self.cols + col]
        } else {
            None
        }
    }

    fn glyph(style: Style) -> char {
        match style {
            Style::Frame => '#',
            Style::MiddleLine => ':',
            Style::Score => '0',
            Style::Paddle => 'H',
            Style::Ball => 'O',
        }
    }

    /// Cells touched by pixels `start..start + len` on an axis of `pixels`
    /// mapped onto `cells` cells
    fn span(start: i32, len: i32, pixels: i32, cells: usize) -> Range<usize> {
        if len <= 0 || pixels <= 0 {
            return 0..0;
        }
        let cells_i = cells as i64;
        let px = pixels as i64;
        let lo = (start as i64 * cells_i).div_euclid(px);
        let hi = -((-(start as i64 + len as i64) * cells_i).div_euclid(px));
        let lo = lo.clamp(0, cells_i) as usize;
        let hi = hi.clamp(0, cells_i) as usize;
        lo..hi.max(lo)
    }

    fn cell_ranges(&self, rect: Rect) -> (Range<usize>, Range<usize>) {
        (
            Self::span(rect.x, rect.width, self.field_width, self.cols),
            Self::span(rect.y, rect.height, self.field_height, self.rows),
        )
    }

    fn put(&mut self, col: usize, row: usize, ch: char, style: Style) {
        if col < self.cols && row < self.rows {
            let i = row * self.cols + col;
            self.cells[i] = ch;
            self.styles[i] = Some(style);
        }
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self) {
        self.cells.fill(' ');
        self.styles.fill(None);
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) {
        let ch = Self::glyph(style);
        let (cols, rows) = self.cell_ranges(rect);
        for row in rows {
            for col in cols.clone() {
                self.put(col, row, ch, style);
            }
        }
    }

    fn outline_rect(&mut self, rect: Rect, style: Style) {
        let ch = Self::glyph(style);
        let (cols, rows) = self.cell_ranges(rect);
        if cols.is_empty() || rows.is_empty() {
            return;
        }
        let (last_col, last_row) = (cols.end - 1, rows.end - 1);
        for col in cols.clone() {
            self.put(col, rows.start, ch, style);
            self.put(col, last_row, ch, style);
        }
        for row in rows {
            self.put(cols.start, row, ch, style);
            self.put(last_col, row, ch, style);
        }
    }

    fn draw_number(&mut self, rect: Rect, value: u32, style: Style) {
        let (cols, rows) = self.cell_ranges(rect);
        if cols.is_empty() || rows.is_empty() {
            return;
        }
        let digits = value.to_string();
        let row = (rows.start + rows.end) / 2;
        let mid = (cols.start + cols.end) / 2;
        let start = mid.saturating_sub(digits.len() / 2);
        for (i, ch) in digits.chars().enumerate() {
            self.put(start + i, row, ch, style);
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = line.iter().collect();
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
