use std::sync::LazyLock;

use regex::Regex;

/// Glyphs that may open a section header, e.g. "🪂일상생활: ...".
///
/// This is the only delimiter inventory the parser knows about. Both the
/// extractor and the line stripper compile their patterns from it, so a glyph
/// added here is picked up by both.
pub const SECTION_ICONS: &[&str] = &[
    "🪂",  // parachute
    "💲",  // money
    "⛪",  // church
    "📦",  // package
    "⚖️", // scales
    "🌾",  // crop
    "🗳️", // ballot box
    "🗺️", // world map
];

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// One or more icon glyphs back to back.
pub static ICON_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?:{})+", icon_alternation())).unwrap());

/// A single line that starts (after optional whitespace) with an icon run,
/// has a colon later on the same line, and anything after it.
pub static HEADER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*(?:{})+[^:\n]*:", icon_alternation())).unwrap());

/// `glyph1\x{FE0F}?|glyph2\x{FE0F}?|...`: feeds differ on whether the
/// emoji presentation selector is present, so it is optional for every glyph.
fn icon_alternation() -> String {
    SECTION_ICONS
        .iter()
        .map(|icon| {
            let base = icon.trim_end_matches(VARIATION_SELECTOR);
            format!(r"{}\x{{FE0F}}?", regex::escape(base))
        })
        .collect::<Vec<_>>()
        .join("|")
}
