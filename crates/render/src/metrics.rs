//! Helvetica advance widths for text placement.
//!
//! Widths are in 1/1000 em units (Adobe base-14 metrics) for the WinAnsi
//! subset a challan actually uses; unmatched characters fall back to an
//! average lowercase width. Centered runs are the only consumer, so a close
//! approximation for exotic glyphs is fine.

/// Width of a full run at `size` points.
pub(crate) fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c, bold)).sum();
    units as f32 * size / 1000.0
}

fn char_units(c: char, bold: bool) -> u32 {
    if bold { bold_units(c) } else { regular_units(c) }
}

fn regular_units(c: char) -> u32 {
    match c {
        ' ' => 278,
        '0'..='9' => 556,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'Q' => 778,
        'I' => 278,
        'J' => 500,
        'L' => 556,
        'M' => 833,
        'W' => 944,
        'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 556,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'f' | 't' => 278,
        'i' | 'j' | 'l' => 222,
        'm' => 833,
        'r' => 333,
        'w' => 722,
        '.' | ',' | ':' | ';' | '/' | '\\' | '!' => 278,
        '-' | '(' | ')' | '[' | ']' => 333,
        '#' | '$' | '_' => 556,
        '%' => 889,
        '&' => 667,
        '*' => 389,
        '@' => 1015,
        _ => 556,
    }
}

fn bold_units(c: char) -> u32 {
    match c {
        ' ' => 278,
        '0'..='9' => 556,
        'A' | 'B' | 'C' | 'D' | 'H' | 'K' | 'N' | 'R' | 'U' => 722,
        'E' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667,
        'F' | 'T' | 'Z' | 'L' => 611,
        'G' | 'O' | 'Q' => 778,
        'I' => 278,
        'J' => 556,
        'M' => 833,
        'W' => 944,
        'a' | 'c' | 'e' | 's' | 'v' | 'x' | 'y' | 'k' => 556,
        'b' | 'd' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 611,
        'f' | 't' => 333,
        'i' | 'j' | 'l' => 278,
        'm' => 889,
        'r' => 389,
        'w' => 778,
        'z' => 500,
        '.' | ',' | '/' | '\\' | '!' => 278,
        ':' | ';' | '-' | '(' | ')' | '[' | ']' => 333,
        '#' | '$' | '_' => 556,
        '%' => 889,
        '&' => 722,
        '*' => 389,
        '@' => 975,
        _ => 556,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_font_size() {
        let small = text_width("Bank Copy", 8.0, true);
        let large = text_width("Bank Copy", 16.0, true);
        assert!((large - 2.0 * small).abs() < f32::EPSILON * 100.0);
    }

    #[test]
    fn bold_runs_are_at_least_as_wide() {
        let regular = text_width("Challan Valid Till", 9.0, false);
        let bold = text_width("Challan Valid Till", 9.0, true);
        assert!(bold >= regular);
    }
}
