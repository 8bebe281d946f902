//! Plain-text rendering of feed cards and post popups.

use crate::layout::{FeedLayout, PopupState};
use crate::parser::date::DateFormatter;
use crate::post::RawPost;
use crate::view::{PostView, ViewBlock};

const PREVIEW_LINES: usize = 2;
const PREVIEW_WIDTH: usize = 60;
const SOURCE_LABEL: &str = "원문 보기";

pub const EMPTY_FEED: &str = "No posts.";

/// Featured and recent card grids. Card numbers are feed indices, the same
/// ones `show <INDEX>` takes.
pub fn render_feed(layout: &FeedLayout, dates: &DateFormatter, popup: &PopupState) -> String {
    if layout.is_empty() {
        return format!("{}\n", EMPTY_FEED);
    }

    let mut buf = String::new();
    buf.push_str("== Featured Posts ==\n\n");
    for (idx, post) in layout.featured.iter().enumerate() {
        buf.push_str(&render_card(idx, post, dates, popup));
        buf.push('\n');
    }

    if !layout.recent.is_empty() {
        buf.push_str("== Most Recent ==\n\n");
        let base = layout.featured.len();
        for (i, post) in layout.recent.iter().enumerate() {
            buf.push_str(&render_card(base + i, post, dates, popup));
            buf.push('\n');
        }
    }

    buf
}

fn render_card(idx: usize, post: &RawPost, dates: &DateFormatter, popup: &PopupState) -> String {
    let mut card = format!(
        "#{:<3} [{}] {}\n     {} {}\n",
        idx,
        post.category,
        dates.format(&post.date),
        post.emoji,
        post.title
    );

    for line in post.content.lines().filter(|l| !l.trim().is_empty()).take(PREVIEW_LINES) {
        card.push_str(&format!("     {}\n", truncate(line.trim(), PREVIEW_WIDTH)));
    }

    if popup.shows_card_source(idx, post) {
        if let Some(url) = &post.source_url {
            card.push_str(&format!("     {}: {}\n", SOURCE_LABEL, url));
        }
    }
    card
}

/// The popup for one post: title, composed blocks, then the actions.
pub fn render_popup(view: &PostView) -> String {
    let mut buf = format!("── {} ──\n\n", view.title);

    for block in view.blocks() {
        match block {
            ViewBlock::Lead(text) => {
                buf.push_str(text);
                buf.push_str("\n\n");
            }
            ViewBlock::Section(s) => {
                buf.push_str(&format!("{} {}: {}\n", s.icon, s.title, s.description));
            }
            ViewBlock::SourceLink(url) => {
                buf.push_str(&format!("\n{}: {}\n", SOURCE_LABEL, url));
            }
        }
    }

    // The news-article action only exists when there is somewhere to go.
    buf.push('\n');
    if view.source_url.is_some() {
        buf.push_str("[닫기] [뉴스기사]\n");
    } else {
        buf.push_str("[닫기]\n");
    }
    buf
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
