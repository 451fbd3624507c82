//! Startup banner: "BID-WINNER" in figlet art, shaded top to bottom.
//! Uses figlet's built-in standard font.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "BID-WINNER";
const TAGLINE: &str = "Dominate the freelance market. Stop writing, start closing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Blend toward `other`; `weight` 0.0 keeps `self`, 1.0 gives `other`.
    fn mix(self, other: Rgb, weight: f64) -> Rgb {
        let w = weight.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * w).round() as u8;
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

const SIGNAL_RED: Rgb = Rgb(0xff, 0x4b, 0x4b);
const AMBER: Rgb = Rgb(0xff, 0xb0, 0x00);

/// Title as figlet art, or the plain title if the font fails to load.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Color for each of `rows` lines, red at the top to amber at the bottom.
fn row_shades(rows: usize) -> Vec<Rgb> {
    let span = rows.saturating_sub(1).max(1) as f64;
    (0..rows).map(|row| SIGNAL_RED.mix(AMBER, row as f64 / span)).collect()
}

/// Prints the welcome banner followed by version and tagline. Output errors are ignored.
pub fn print_welcome() {
    let art = title_art();
    let lines: Vec<&str> = art.lines().collect();
    let mut out = stdout().lock();

    for (line, shade) in lines.iter().zip(row_shades(lines.len())) {
        let _ = queue!(out, SetForegroundColor(shade.into()), Print(line), Print("\r\n"));
    }
    let _ = queue!(
        out,
        SetForegroundColor(AMBER.into()),
        Print(format!("v{}  {}\r\n\r\n", env!("CARGO_PKG_VERSION"), TAGLINE)),
        ResetColor
    );
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints_and_clamp() {
        assert_eq!(SIGNAL_RED.mix(AMBER, 0.0), SIGNAL_RED);
        assert_eq!(SIGNAL_RED.mix(AMBER, 1.0), AMBER);
        assert_eq!(SIGNAL_RED.mix(AMBER, 3.0), AMBER);
    }

    #[test]
    fn test_row_shades_span_gradient() {
        let shades = row_shades(6);
        assert_eq!(shades.len(), 6);
        assert_eq!(shades[0], SIGNAL_RED);
        assert_eq!(shades[5], AMBER);
        assert_eq!(row_shades(1), vec![SIGNAL_RED]);
        assert!(row_shades(0).is_empty());
    }
}
