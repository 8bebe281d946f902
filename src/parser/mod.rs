pub mod date;
pub mod icons;
pub mod sections;
pub mod strip;

use crate::post::RawPost;
use crate::view::PostView;
use date::DateFormatter;

/// Segment one post: sections come from the summary, the remainder from the
/// body (falling back to the summary), plus the display date.
pub fn process_post(post: &RawPost, dates: &DateFormatter) -> PostView {
    PostView {
        title: post.title.clone(),
        category: post.category.clone(),
        emoji: post.emoji.clone(),
        date: dates.format(&post.date),
        remainder: strip::strip_section_lines(post.main_text()),
        sections: sections::extract_sections(&post.content),
        source_url: post.source_url.clone(),
    }
}

// ── Tests ──
