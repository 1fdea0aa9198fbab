use std::time::Duration;

/// Knobs of the terminal front-end. Everything is fixed at compile time.
pub struct Config;

impl Config {
    pub const FRAMERATE: u32 = 30;
    pub const FRAMETIME: Duration = Duration::from_millis(1_000 / Self::FRAMERATE as u64);

    /// How far a single key press pans the view, in braille dots
    pub const PAN_STEP: i64 = 8;

    /// Zoom level `z` means each braille dot covers a `2^z x 2^z` square of cells
    pub const MAX_ZOOM_LEVEL: u32 = 16;
}
