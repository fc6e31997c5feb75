use console::{Color, Style, Term};

use super::{Rect, Size, Surface, Tone};
use crate::error::Result;

/// One character cell of the terminal buffer.
#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    fg: Tone,
    bg: Tone,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Tone::Label,
            bg: Tone::Background,
        }
    }
}

/// Terminal-backed drawing surface.
///
/// Geometry is measured in character cells: one surface unit is one cell.
/// Fills paint cell backgrounds, strokes draw box-drawing glyphs along the
/// rectangle perimeter, and text writes glyphs clipped to the buffer.
/// Nothing touches the terminal until [`Surface::present`] repaints the
/// frame from the home position.
pub struct TermSurface {
    term: Term,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TermSurface {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            self.cells.get_mut(y * self.width + x)
        } else {
            None
        }
    }

    /// Converts a fractional span to clamped integer cell bounds.
    fn span(start: f64, extent: f64, limit: usize) -> (usize, usize) {
        let from = start.round().max(0.0) as usize;
        let to = (start + extent).round().max(0.0) as usize;
        (from.min(limit), to.min(limit))
    }
}

impl Surface for TermSurface {
    fn viewport(&self) -> Size {
        let (rows, cols) = self.term.size();
        Size {
            width: f64::from(cols),
            height: f64::from(rows),
        }
    }

    fn resize(&mut self, size: Size) {
        self.width = size.width.round().max(0.0) as usize;
        self.height = size.height.round().max(0.0) as usize;
        self.cells = vec![Cell::default(); self.width * self.height];
    }

    fn fill_rect(&mut self, rect: Rect, tone: Tone) {
        let (x0, x1) = Self::span(rect.x, rect.width, self.width);
        let (y0, y1) = Self::span(rect.y, rect.height, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = self.cell_mut(x, y) {
                    *cell = Cell {
                        bg: tone,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, tone: Tone) {
        let (x0, x1) = Self::span(rect.x, rect.width, self.width);
        let (y0, y1) = Self::span(rect.y, rect.height, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for x in x0..x1 {
            for y in [y0, y1 - 1] {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.glyph = '─';
                    cell.fg = tone;
                }
            }
        }
        for y in y0..y1 {
            for x in [x0, x1 - 1] {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.glyph = '│';
                    cell.fg = tone;
                }
            }
        }
        for (x, y, glyph) in [
            (x0, y0, '┌'),
            (x1 - 1, y0, '┐'),
            (x0, y1 - 1, '└'),
            (x1 - 1, y1 - 1, '┘'),
        ] {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.glyph = glyph;
                cell.fg = tone;
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, tone: Tone) {
        let row = y.round().max(0.0) as usize;
        let start = x.round().max(0.0) as usize;

        for (offset, glyph) in text.chars().enumerate() {
            match self.cell_mut(start + offset, row) {
                Some(cell) => {
                    cell.glyph = glyph;
                    cell.fg = tone;
                }
                None => break,
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.term.hide_cursor()?;
        self.term.move_cursor_to(0, 0)?;

        let mut frame = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                let styled = Style::new()
                    .fg(device_color(cell.fg))
                    .bg(device_color(cell.bg))
                    .apply_to(cell.glyph);
                frame.push_str(&styled.to_string());
            }
            if y + 1 < self.height {
                frame.push('\n');
            }
        }

        self.term.write_str(&frame)?;
        self.term.flush()?;

        Ok(())
    }
}

fn device_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Failure => Color::Red,
        Tone::Pending => Color::Color256(244),
        Tone::Background => Color::Black,
        Tone::Outline => Color::Black,
        Tone::Label => Color::White,
    }
}
