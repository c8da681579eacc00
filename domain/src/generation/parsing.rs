//! Parsing of raw model output into domain results.
//!
//! Models are asked for plain unnumbered title lines, but in practice
//! still return enumerators ("1. ") and bullet glyphs. These functions
//! are pure and total: they never fail, they only degrade to a shorter
//! or unchanged result.

/// Parse raw outline text into a list of section titles.
///
/// Splits on line breaks, drops blank lines, strips a leading
/// `"<number>. "` enumerator when the `". "` appears within the first
/// four characters, strips leading bullet glyphs, and truncates the
/// result to `requested` entries. Never pads: if the model produced
/// fewer titles than requested, the shorter list is returned as-is and
/// the caller decides what to do about the shortfall.
pub fn parse_outline(raw: &str, requested: usize) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumerator)
        .map(|line| line.trim_start_matches(['•', '-', '*', ' ']).trim().to_string())
        .filter(|line| !line.is_empty())
        .take(requested)
        .collect()
}

/// Drop a leading `"N. "` enumerator, if one starts within the first
/// four characters of the line.
fn strip_enumerator(line: &str) -> &str {
    let head: String = line.chars().take(4).collect();
    if head.contains(". ") {
        match line.split_once(". ") {
            Some((_, rest)) => rest,
            None => line,
        }
    } else {
        line
    }
}

/// Normalize body content: trim surrounding whitespace only.
///
/// The model's internal formatting (paragraphs, bullet dashes) is
/// trusted for body text.
pub fn normalize_content(raw: &str) -> String {
    raw.trim().to_string()
}
