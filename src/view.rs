use serde::Serialize;

use crate::parser::sections::Section;

/// Everything the display layer needs for one post.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub category: String,
    pub emoji: String,
    /// Already formatted as `YYYY.MM.DD` when the raw date parsed.
    pub date: String,
    pub remainder: String,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBlock<'a> {
    Lead(&'a str),
    Section(&'a Section),
    SourceLink(&'a str),
}

impl PostView {
    /// Popup content in display order: lead paragraph (if any), sections as
    /// extracted, then the source link (if any).
    pub fn blocks(&self) -> Vec<ViewBlock<'_>> {
        let mut blocks = Vec::with_capacity(self.sections.len() + 2);
        if !self.remainder.is_empty() {
            blocks.push(ViewBlock::Lead(&self.remainder));
        }
        blocks.extend(self.sections.iter().map(ViewBlock::Section));
        if let Some(url) = &self.source_url {
            blocks.push(ViewBlock::SourceLink(url));
        }
        blocks
    }
}
