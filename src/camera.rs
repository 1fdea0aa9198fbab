use crate::ScreenSize;
use crate::WorldOffset;
use crate::config::Config;
use crate::render::BACKGROUND_COLOR;
use crate::render::Drawable;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Braille dots per terminal cell, horizontally and vertically
pub const DOTS_PER_COL: usize = 2;
pub const DOTS_PER_ROW: usize = 4;

/// A view on the world, drawn with braille characters.
///
/// Each terminal cell holds `2x4` dots. At zoom level `z`, a dot covers a `2^z x 2^z` square of
/// world cells and is on if any of them is alive.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the cell buffer, in dots
    w: usize,

    /// Height of the cell buffer, in dots
    h: usize,

    /// World `x` coordinate of the top left dot
    x: WorldOffset,

    /// World `y` coordinate of the top left dot
    y: WorldOffset,

    zoom: u32,
}

impl Camera {
    /// Create a camera filling `cols x rows` terminal cells, looking at the origin.
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        let mut cam = Self {
            cb: Vec::new(),
            fb: String::new(),
            cp: Vec::new(),
            w: 0,
            h: 0,
            x: 0,
            y: 0,
            zoom: 0,
        };

        cam.resize(cols, rows);
        cam
    }

    /// Change the size of the view. The top left corner stays put.
    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        let (bw, bh) = (cols as usize, rows as usize);

        self.w = bw * DOTS_PER_COL;
        self.h = bh * DOTS_PER_ROW;
        self.cb = vec![false; self.w * self.h];
        self.cp = vec![BRAILLE_EMPTY; bw * bh];

        // For each braille character, we need 3 bytes. For each newline, we need one byte.
        self.fb = String::with_capacity(3 * (bw * bh) + bh);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom
    }

    /// World coordinate of the top left corner of the view.
    pub fn origin(&self) -> (WorldOffset, WorldOffset) {
        (self.x, self.y)
    }

    /// Move the view by `(dx, dy)` dots.
    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.x = self.x.wrapping_add(dx << self.zoom);
        self.y = self.y.wrapping_add(dy << self.zoom);
    }

    pub fn zoom_in(&mut self) {
        if self.zoom > 0 {
            self.set_zoom(self.zoom - 1);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom < Config::MAX_ZOOM_LEVEL {
            self.set_zoom(self.zoom + 1);
        }
    }

    /// Change the zoom level, keeping the center of the view in place.
    fn set_zoom(&mut self, zoom: u32) {
        let (cx, cy) = self.center();

        self.zoom = zoom;
        self.x = cx.wrapping_sub(((self.w / 2) as WorldOffset) << zoom);
        self.y = cy.wrapping_sub(((self.h / 2) as WorldOffset) << zoom);
    }

    /// World coordinate at the center of the view
    fn center(&self) -> (WorldOffset, WorldOffset) {
        (
            self.x.wrapping_add(((self.w / 2) as WorldOffset) << self.zoom),
            self.y.wrapping_add(((self.h / 2) as WorldOffset) << self.zoom),
        )
    }

    /// Zoom all the way in and center the view on the origin.
    pub fn reset_view(&mut self) {
        self.zoom = 0;
        self.x = -((self.w / 2) as WorldOffset);
        self.y = -((self.h / 2) as WorldOffset);
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Turn on the dots covering live cells. Anything out of view, or colored like the
    /// background, is skipped.
    pub fn draw<I>(&mut self, drawables: I)
    where
        I: IntoIterator<Item = Drawable>,
    {
        for Drawable { position, color } in drawables {
            if color == BACKGROUND_COLOR {
                continue;
            }

            let dx = position.x.wrapping_sub(self.x) >> self.zoom;
            let dy = position.y.wrapping_sub(self.y) >> self.zoom;

            let (Ok(dx), Ok(dy)) = (usize::try_from(dx), usize::try_from(dy)) else {
                continue;
            };

            if dx < self.w && dy < self.h {
                self.draw_pixel(dx, dy);
            }
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Turn the cell buffer into lines of braille characters, one per terminal row.
    pub fn render(&mut self) -> &str {
        let bw = self.w / DOTS_PER_COL;

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                let hex = Self::get_hex_value(x, y);

                self.cp[(y / DOTS_PER_ROW) * bw + (x / DOTS_PER_COL)] += hex;
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
