//! What the simulation hands over to whoever draws it.

use crate::cell::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const ALIVE_COLOR: Color = Color::rgb(0, 0, 0);
pub const BACKGROUND_COLOR: Color = Color::rgb(255, 255, 255);

/// Color of a cell in the given state. Dead cells are the same color as the background.
pub const fn cell_color(alive: bool) -> Color {
    if alive { ALIVE_COLOR } else { BACKGROUND_COLOR }
}

/// A single live cell, ready to be drawn at its world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub position: Coord,
    pub color: Color,
}
