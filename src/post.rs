use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Glyph shown on a card when the feed leaves `이모지` blank.
pub const DEFAULT_EMOJI: &str = "📰";

/// One object of the feed's JSON array, as sent over the wire.
///
/// Every field is decoded leniently: missing keys, `null`, arrays and
/// objects all become "", numbers and booleans their JSON text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedRecord {
    #[serde(rename = "제목", default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(rename = "카테고리", default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "이모지", default, deserialize_with = "lenient_text")]
    pub emoji: String,
    #[serde(rename = "날짜", default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "내용", default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(rename = "본문", default, deserialize_with = "lenient_text")]
    pub body: String,
    #[serde(rename = "출처", default, deserialize_with = "lenient_text")]
    pub source: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// A normalized, read-only post snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPost {
    pub title: String,
    pub category: String,
    pub emoji: String,
    pub date: String,
    /// Summary text; carries the icon-tagged sections.
    pub content: String,
    /// Long-form text, when the feed sends one.
    pub body: Option<String>,
    pub source_url: Option<String>,
}

impl From<FeedRecord> for RawPost {
    fn from(r: FeedRecord) -> Self {
        RawPost {
            title: r.title,
            category: r.category,
            emoji: if r.emoji.trim().is_empty() {
                DEFAULT_EMOJI.to_string()
            } else {
                r.emoji
            },
            date: r.date,
            content: r.content,
            body: non_empty(r.body),
            source_url: non_empty(r.source),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl RawPost {
    /// Text the remainder is stripped from: the body, else the summary.
    pub fn main_text(&self) -> &str {
        self.body.as_deref().unwrap_or(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> RawPost {
        serde_json::from_str::<FeedRecord>(json).unwrap().into()
    }

    #[test]
    fn full_record() {
        let post = decode(
            r#"{"제목":"제목1","카테고리":"정치","이모지":"🗳️","날짜":"2024-03-05",
                "내용":"요약","본문":"본문 전체","출처":"https://news.example/1"}"#,
        );
        assert_eq!(post.title, "제목1");
        assert_eq!(post.category, "정치");
        assert_eq!(post.emoji, "🗳️");
        assert_eq!(post.body.as_deref(), Some("본문 전체"));
        assert_eq!(post.source_url.as_deref(), Some("https://news.example/1"));
        assert_eq!(post.main_text(), "본문 전체");
    }

    #[test]
    fn missing_fields_become_empty() {
        let post = decode("{}");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert_eq!(post.date, "");
        assert_eq!(post.emoji, DEFAULT_EMOJI);
        assert!(post.body.is_none());
        assert!(post.source_url.is_none());
        assert_eq!(post.main_text(), "");
    }

    #[test]
    fn null_and_odd_types() {
        let post = decode(r#"{"제목":null,"날짜":45352,"내용":["x"],"본문":{},"출처":true}"#);
        assert_eq!(post.title, "");
        assert_eq!(post.date, "45352");
        assert_eq!(post.content, "");
        assert!(post.body.is_none());
        assert_eq!(post.source_url.as_deref(), Some("true"));
    }

    #[test]
    fn empty_body_falls_back_to_content() {
        let post = decode(r#"{"내용":"요약 🪂일상: 내용","본문":""}"#);
        assert!(post.body.is_none());
        assert_eq!(post.main_text(), "요약 🪂일상: 내용");
    }

    #[test]
    fn blank_emoji_gets_default() {
        assert_eq!(decode(r#"{"이모지":"  "}"#).emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn unknown_keys_ignored() {
        let post = decode(r#"{"제목":"t","조회수":12}"#);
        assert_eq!(post.title, "t");
    }
}
