//! Large block glyphs for the countdown display.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns between two glyphs.
const GLYPH_GAP: &str = " ";

type Glyph = [&'static str; GLYPH_HEIGHT];

/// Returns the block glyph for a character of the countdown display.
///
/// Covers digits, the colon, the space and the letters of "TIME UP".
fn glyph(c: char) -> Glyph {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        ' ' => [" ", " ", " ", " ", " "],
        'T' => ["███", " █ ", " █ ", " █ ", " █ "],
        'I' => ["███", " █ ", " █ ", " █ ", "███"],
        'M' => ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'E' => ["███", "█  ", "██ ", "█  ", "███"],
        'U' => ["█ █", "█ █", "█ █", "█ █", "███"],
        'P' => ["███", "█ █", "███", "█  ", "█  "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

/// Renders `text` as `GLYPH_HEIGHT` rows of block characters.
pub fn render(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for (i, c) in text.chars().enumerate() {
        let glyph = glyph(c);
        for (row, part) in rows.iter_mut().zip(glyph) {
            if i > 0 {
                row.push_str(GLYPH_GAP);
            }
            row.push_str(part);
        }
    }
    rows
}

/// Display width of `render(text)` in terminal columns.
pub fn width(text: &str) -> usize {
    render(text)
        .first()
        .map(|row| row.chars().count())
        .unwrap_or(0)
}
