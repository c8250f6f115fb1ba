//! Block letter art for the starcard avatar.

/// Height of every glyph in lines.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of every glyph in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Latin capitals A-Z (5 lines tall, 5 chars wide)
pub const LETTERS: [[&str; GLYPH_HEIGHT]; 26] = [
    // A
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    // B
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
    // D
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    // E
    ["█████", "█    ", "████ ", "█    ", "█████"],
    // F
    ["█████", "█    ", "████ ", "█    ", "█    "],
    // G
    [" ████", "█    ", "█  ██", "█   █", " ████"],
    // H
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    // I
    ["█████", "  █  ", "  █  ", "  █  ", "█████"],
    // J
    ["█████", "   █ ", "   █ ", "█  █ ", " ██  "],
    // K
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    // L
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    // M
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // O
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    // P
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    // Q
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    // R
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // U
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // W
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    // X
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // Z
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Look up the block glyph for a character, if the font has one.
pub fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(&LETTERS[(upper as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Build block art for avatar initials.
///
/// Characters the font does not cover are drawn as themselves, centered in
/// the middle line of a glyph-sized cell, so any script still renders.
///
/// # Returns
/// `GLYPH_HEIGHT` lines, or no lines at all for empty initials.
pub fn build_initials_art(initials: &str) -> Vec<String> {
    if initials.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(); GLYPH_HEIGHT];
    for (i, ch) in initials.chars().enumerate() {
        for (row, line) in lines.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            match glyph(ch) {
                Some(rows) => line.push_str(rows[row]),
                None if row == GLYPH_HEIGHT / 2 => {
                    line.push_str("  ");
                    line.push(ch);
                    line.push_str("  ");
                }
                None => line.push_str(&" ".repeat(GLYPH_WIDTH)),
            }
        }
    }
    lines
}

/// Display width of the art produced for `initials`, in columns.
pub fn initials_art_width(initials: &str) -> usize {
    let n = initials.chars().count();
    if n == 0 { 0 } else { n * GLYPH_WIDTH + (n - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_uniform() {
        for rows in LETTERS {
            for row in rows {
                assert_eq!(row.chars().count(), GLYPH_WIDTH);
            }
        }
    }

    #[test]
    fn test_build_two_letters() {
        let art = build_initials_art("AL");
        assert_eq!(art.len(), GLYPH_HEIGHT);
        assert_eq!(art[0], " ███  █    ");
        assert_eq!(art[4], "█   █ █████");
        assert!(art.iter().all(|l| l.chars().count() == initials_art_width("AL")));
    }

    #[test]
    fn test_lowercase_uses_capital_glyph() {
        assert_eq!(build_initials_art("f"), build_initials_art("F"));
    }

    #[test]
    fn test_uncovered_character_falls_back() {
        let art = build_initials_art("И");
        assert_eq!(art[2], "  И  ");
        assert_eq!(art[0], "     ");
    }

    #[test]
    fn test_empty() {
        assert!(build_initials_art("").is_empty());
        assert_eq!(initials_art_width(""), 0);
    }
}
