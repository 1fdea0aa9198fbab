//! The Life 1.06 plaintext pattern format.
//!
//! ```notrust
//! #Life 1.06
//! 0 -1
//! 1 0
//! -1 1 0 1 1 1
//! ```
//!
//! The first line is the header. Everything after it is a whitespace separated list of `x y`
//! pairs, each naming one live cell in absolute coordinates. Line breaks carry no meaning.
//!
//! See: https://conwaylife.com/wiki/Life_1.06

use std::io;
use std::io::Read;
use std::io::Write;

use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::WorldOffset;
use crate::cell::Coord;
use crate::grid::SparseGrid;
use crate::parse_util;

pub use crate::parse_util::ConvertError;
pub use crate::parse_util::ParseError;

pub const HEADER: &[u8] = b"#Life 1.06";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unrecognized header: {0}")]
    Header(#[from] ParseError),

    #[error("Failed to parse x coordinate of pair {pair}: {source}")]
    ParseX {
        pair: usize,
        #[source]
        source: ConvertError,
    },

    #[error("Failed to parse y coordinate of pair {pair}: {source}")]
    ParseY {
        pair: usize,
        #[source]
        source: ConvertError,
    },

    #[error("Expected y coordinate of pair {pair}, found end of input")]
    NoY { pair: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid Life 1.06 pattern: {0}")]
    Format(#[from] FormatError),

    #[error("Failed to read pattern: {0}")]
    Io(#[from] io::Error),
}

/// Parse a Life 1.06 pattern into its list of live cells.
///
/// Duplicate cells are only kept once. The returned cells are sorted.
pub fn read_life106(bytes: &[u8]) -> Result<Vec<Coord>, FormatError> {
    let (header, mut bytes) = parse_util::take_line(bytes);
    parse_util::is_slice(HEADER, parse_util::trim_ws_end(header))?;

    let mut cells = Vec::new();

    loop {
        let pair = cells.len() + 1;

        let (Some(x), rest) = parse_util::take_until_ws(parse_util::take_ws(bytes)) else {
            break;
        };

        let (Some(y), rest) = parse_util::take_until_ws(parse_util::take_ws(rest)) else {
            return Err(FormatError::NoY { pair });
        };

        let x: WorldOffset =
            parse_util::convert(x).map_err(|source| FormatError::ParseX { pair, source })?;
        let y: WorldOffset =
            parse_util::convert(y).map_err(|source| FormatError::ParseY { pair, source })?;

        cells.push(Coord::new(x, y));
        bytes = rest;
    }

    let n = cells.len();
    cells.sort_unstable();
    cells.dedup();

    if cells.len() != n {
        warn!(duplicates = n - cells.len(), "Life 1.06 pattern lists some cells more than once");
    }

    Ok(cells)
}

/// Read a whole Life 1.06 pattern from `reader`.
pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<Coord>, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let cells = read_life106(&bytes)?;
    debug!(bytes = bytes.len(), cells = cells.len(), "Read Life 1.06 pattern");

    Ok(cells)
}

/// Write the live cells of the current generation of `grid` as a Life 1.06 pattern.
///
/// Cells are written one pair per line, sorted, so the output is stable.
pub fn write_life106<W: Write>(grid: &SparseGrid, mut writer: W) -> io::Result<()> {
    let mut cells: Vec<_> = grid.live_cells().collect();
    cells.sort_unstable();

    writer.write_all(HEADER)?;
    writer.write_all(b"\n")?;

    for Coord { x, y } in cells {
        writeln!(writer, "{x} {y}")?;
    }

    writer.flush()
}
