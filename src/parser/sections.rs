use serde::Serialize;

use super::icons::ICON_RUN_RE;

/// An icon-tagged block inside a post body, e.g. "🪂일상: 오늘은 날씨가 좋다".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Split `text` into icon-tagged sections, in the order they appear.
///
/// A section is an icon run, a title running up to the first colon after it,
/// and a description running from that colon to the next icon run (or the
/// end of the text). Descriptions cross newlines freely. Titles may be empty
/// ("🪂: ...") and are still emitted.
pub fn extract_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(icon) = ICON_RUN_RE.find_at(text, pos) {
        // No colon left means no later icon can open a section either.
        let Some(colon) = text[icon.end()..].find(':').map(|i| icon.end() + i) else {
            break;
        };
        let desc_start = colon + 1;
        let desc_end = ICON_RUN_RE
            .find_at(text, desc_start)
            .map_or(text.len(), |next| next.start());

        sections.push(Section {
            icon: icon.as_str().trim().to_string(),
            title: text[icon.end()..colon].trim().to_string(),
            description: text[desc_start..desc_end].trim().to_string(),
        });
        pos = desc_end;
    }

    sections
}

// ── Tests ──
