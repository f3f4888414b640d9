// File: src/color/parse.rs
use thiserror::Error;

use crate::color::{Color, Hsl, names};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digit")]
    InvalidHex,
    #[error("malformed color function")]
    InvalidFunc,
    #[error("component out of range")]
    OutOfRange,
    #[error("unknown color name")]
    UnknownName,
}

/// Parse a hex color body (without the leading `#`).
///
/// The allowed forms are `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`; short
/// forms expand by nibble duplication and alpha digits are validated but
/// discarded.
fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    use ParseColorError::*;

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.as_bytes();
    let (r, g, b) = match bytes.len() {
        3 | 4 => {
            let r = nibble(bytes[0]).ok_or(InvalidHex)?;
            let g = nibble(bytes[1]).ok_or(InvalidHex)?;
            let b = nibble(bytes[2]).ok_or(InvalidHex)?;
            if bytes.len() == 4 {
                nibble(bytes[3]).ok_or(InvalidHex)?;
            }
            (r * 17, g * 17, b * 17)
        }
        6 | 8 => {
            let pair = |hi: u8, lo: u8| -> Result<u8, ParseColorError> {
                let h = nibble(hi).ok_or(InvalidHex)?;
                let l = nibble(lo).ok_or(InvalidHex)?;
                Ok(h << 4 | l)
            };
            if bytes.len() == 8 {
                pair(bytes[6], bytes[7])?;
            }
            (
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            )
        }
        _ => return Err(InvalidLength),
    };

    Ok(Color::from_rgb(r, g, b))
}

// Accepts commas, spaces, or the slash before a CSS Level 4 alpha as
// separators, so both legacy and modern argument styles tokenize the same.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// A single rgb() channel: integer 0-255 or a percentage.
fn parse_channel(tok: &str) -> Result<u8, ParseColorError> {
    use ParseColorError::*;

    if let Some(pct) = tok.strip_suffix('%') {
        let v = pct.parse::<f32>().map_err(|_| InvalidFunc)?;
        if !(0.0..=100.0).contains(&v) {
            return Err(OutOfRange);
        }
        Ok((v / 100.0 * 255.0 + 0.5).floor() as u8)
    } else {
        tok.parse::<u16>()
            .ok()
            .filter(|&v| v <= 255)
            .map(|v| v as u8)
            .ok_or(OutOfRange)
    }
}

/// A saturation/lightness argument; the `%` suffix is optional.
fn parse_fraction(tok: &str) -> Result<f32, ParseColorError> {
    use ParseColorError::*;

    let raw = tok.strip_suffix('%').unwrap_or(tok);
    let v = raw.parse::<f32>().map_err(|_| InvalidFunc)?;
    if !(0.0..=100.0).contains(&v) {
        return Err(OutOfRange);
    }
    Ok(v / 100.0)
}

/// `rgb(r, g, b)` / `rgba(...)`; a trailing alpha argument is ignored.
fn parse_css_rgb(args: &str) -> Result<Color, ParseColorError> {
    let toks = split_args(args);
    if toks.len() != 3 && toks.len() != 4 {
        return Err(ParseColorError::InvalidFunc);
    }
    Ok(Color::from_rgb(
        parse_channel(toks[0])?,
        parse_channel(toks[1])?,
        parse_channel(toks[2])?,
    ))
}

/// `hsl(h, s%, l%)` / `hsla(...)`; hue takes an optional `deg` suffix and
/// a trailing alpha argument is ignored.
fn parse_css_hsl(args: &str) -> Result<Color, ParseColorError> {
    let toks = split_args(args);
    if toks.len() != 3 && toks.len() != 4 {
        return Err(ParseColorError::InvalidFunc);
    }
    let hue_tok = toks[0].strip_suffix("deg").unwrap_or(toks[0]);
    let h = hue_tok
        .parse::<f32>()
        .map_err(|_| ParseColorError::InvalidFunc)?;
    let s = parse_fraction(toks[1])?;
    let l = parse_fraction(toks[2])?;

    Ok(Color::from_hsl(Hsl {
        h: h.rem_euclid(360.0),
        s,
        l,
    }))
}

fn strip_func<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

pub(crate) fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(rest) = s.strip_prefix('#') {
        return parse_hex(rest.trim());
    }

    let lower = s.to_ascii_lowercase();

    // "rgba" before "rgb", "hsla" before "hsl": the longer prefix wins.
    if let Some(args) = strip_func(&lower, "rgba").or_else(|| strip_func(&lower, "rgb")) {
        return parse_css_rgb(args);
    }
    if let Some(args) = strip_func(&lower, "hsla").or_else(|| strip_func(&lower, "hsl")) {
        return parse_css_hsl(args);
    }

    if let Some(color) = names::lookup(&lower) {
        return Ok(color);
    }

    // Bare hex without '#' ("3b82f6"), as lenient parsers accept. No CSS
    // keyword consists solely of hex digits, so the name lookup above
    // cannot shadow this.
    if matches!(lower.len(), 3 | 4 | 6 | 8) && lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return parse_hex(&lower);
    }

    Err(ParseColorError::UnknownName)
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
