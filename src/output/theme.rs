//! Terminal colors for stream tags and match strength

use owo_colors::AnsiColors;

use crate::catalog::StreamColor;

/// Terminal color for a stream's display tag
pub fn stream_color(color: StreamColor) -> AnsiColors {
    match color {
        StreamColor::Primary => AnsiColors::Blue,
        StreamColor::Warning => AnsiColors::Yellow,
        StreamColor::Success => AnsiColors::Green,
        StreamColor::Accent => AnsiColors::Magenta,
    }
}

/// Traffic-light color for a match percentage
pub fn match_color(percentage: u32) -> AnsiColors {
    if percentage >= 70 {
        AnsiColors::Green
    } else if percentage >= 40 {
        AnsiColors::Yellow
    } else {
        AnsiColors::Red
    }
}

/// Color for a college rating on the 0-5 scale
pub fn rating_color(rating: f64) -> AnsiColors {
    match_color((rating / 5.0 * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_color_thresholds() {
        assert_eq!(match_color(100), AnsiColors::Green);
        assert_eq!(match_color(70), AnsiColors::Green);
        assert_eq!(match_color(69), AnsiColors::Yellow);
        assert_eq!(match_color(40), AnsiColors::Yellow);
        assert_eq!(match_color(39), AnsiColors::Red);
    }

    #[test]
    fn test_rating_color() {
        assert_eq!(rating_color(4.4), AnsiColors::Green);
        assert_eq!(rating_color(3.0), AnsiColors::Yellow);
        assert_eq!(rating_color(1.0), AnsiColors::Red);
    }
}
