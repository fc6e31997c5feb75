mod term;

pub use term::TermSurface;

use crate::error::Result;

/// Dimensions of a drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// An axis-aligned rectangle on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Semantic colors used by the board. The surface implementation decides
/// how each tone maps onto the device palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Most recent run passed.
    Success,
    /// Most recent run failed.
    Failure,
    /// No usable history yet.
    Pending,
    /// Unoccupied grid cell.
    Background,
    /// Tile border.
    Outline,
    /// Tile caption text.
    Label,
}

/// An abstract drawing target for the tile grid.
///
/// Drawing calls mutate an internal buffer and cannot fail; [`Surface::present`]
/// flushes the buffer to the device and is the only fallible operation.
/// Implementations clamp out-of-bounds geometry rather than panic.
pub trait Surface {
    /// Current device dimensions; queried before every redraw so window
    /// resizes are picked up without caching.
    fn viewport(&self) -> Size;

    /// Reallocates the buffer to the given size, discarding prior content.
    fn resize(&mut self, size: Size);

    fn fill_rect(&mut self, rect: Rect, tone: Tone);

    fn stroke_rect(&mut self, rect: Rect, tone: Tone);

    /// Draws `text` left-aligned starting at (`x`, `y`).
    fn fill_text(&mut self, text: &str, x: f64, y: f64, tone: Tone);

    /// Flushes the buffer to the device.
    fn present(&mut self) -> Result<()>;
}
