use std::str::FromStr;
use std::str::Utf8Error;

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unexpected end of file, expected \"{exp}\"")]
    UnexpectedEof { exp: String },

    #[error("Expected \"{exp}\", but got \"{got}\"")]
    UnexpectedSlice { exp: String, got: String },
}

/// Consumes the slice until a non-ascii whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[i..]
}

/// Drops trailing ascii whitespace from the slice.
pub fn trim_ws_end(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);

    &bytes[..i]
}

/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Splits off a whole line, consuming its linebreak (`\n` or `\r\n`) without returning it.
pub fn take_line(bytes: &[u8]) -> (&[u8], &[u8]) {
    let (line, bytes) = match take_until(b'\n', bytes) {
        (Some(line), bytes) => (line, take_1(bytes).1),
        (None, bytes) => (&bytes[..0], take_1(bytes).1),
    };

    let line = line.strip_suffix(b"\r").unwrap_or(line);

    (line, bytes)
}

/// Checks that `bytes` is exactly `bs`.
pub fn is_slice(bs: &[u8], bytes: &[u8]) -> ParseResult<()> {
    if bytes.is_empty() && !bs.is_empty() {
        return Err(ParseError::UnexpectedEof {
            exp: String::from_utf8_lossy(bs).to_string(),
        });
    }

    if bs != bytes {
        return Err(ParseError::UnexpectedSlice {
            exp: String::from_utf8_lossy(bs).to_string(),
            got: String::from_utf8_lossy(bytes).to_string(),
        });
    }

    Ok(())
}

/// Advance the slice until `P` is satisfied, without consuming the byte that satisfied it.
///
/// If `P` is never satisfied, the whole slice is taken. Returns `None` when nothing was taken.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    let i = bytes.iter().position(|&b| p(b)).unwrap_or(bytes.len());

    if i == 0 {
        (None, bytes)
    } else {
        let (res, bytes) = bytes.split_at(i);

        (Some(res), bytes)
    }
}

/// Advance the slice until byte `b` is found, without consuming it.
pub fn take_until(b: u8, bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_fn(|a| a == b, bytes)
}

/// Like `take_until`, but stops at the first ascii whitespace character found, without consuming
/// it.
pub fn take_until_ws(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_fn(|a| a.is_ascii_whitespace(), bytes)
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error parsing bytes from UTF-8: {0}")]
    InvalidUTF8(#[from] Utf8Error),

    #[error("Failed to convert \"{str}\"")]
    ParseError { str: String },
}

/// Converts `&[u8]` to `T` if `T: FromStr`.
pub fn convert<T: FromStr>(bytes: &[u8]) -> Result<T, ConvertError> {
    let str = std::str::from_utf8(bytes)?;

    let Ok(res) = str.parse::<T>() else {
        return Err(ConvertError::ParseError {
            str: str.to_string(),
        });
    };

    Ok(res)
}
