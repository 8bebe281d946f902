use std::sync::LazyLock;

use regex::Regex;

use super::icons::HEADER_LINE_RE;

static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Remove section header lines and return the narrative remainder.
///
/// Works line by line: only the line a header starts on is dropped. A
/// description that continues onto following lines (which the extractor
/// folds into the section) stays in the remainder.
pub fn strip_section_lines(text: &str) -> String {
    let kept = text
        .split('\n')
        .map(|line| if HEADER_LINE_RE.is_match(line) { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n");

    NEWLINE_RUN_RE.replace_all(&kept, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::extract_sections;

    #[test]
    fn removes_header_lines_keeps_paragraphs() {
        let text = "🪂일상: 소소한 이야기\n💲경제: 주가 상승\n\n\n첫 문단\n\n둘째 문단";
        assert_eq!(strip_section_lines(text), "첫 문단\n둘째 문단");
    }

    #[test]
    fn lead_text_survives() {
        let text = "앞부분 설명\n🪂일상: 소소한 이야기\n💲경제: 주가 상승";
        assert_eq!(strip_section_lines(text), "앞부분 설명");
    }

    #[test]
    fn text_without_icons_only_collapses_and_trims() {
        assert_eq!(strip_section_lines("  하나\n\n\n둘\n셋  \n"), "하나\n둘\n셋");
        assert_eq!(strip_section_lines(""), "");
    }

    #[test]
    fn indented_header_is_removed() {
        assert_eq!(strip_section_lines("본문\n   ⚖️사회: 판결\n끝"), "본문\n끝");
    }

    #[test]
    fn icon_mid_line_is_not_a_header() {
        let text = "오늘의 요약 🪂일상: 평온";
        assert_eq!(strip_section_lines(text), text);
    }

    #[test]
    fn icon_line_without_colon_is_kept() {
        assert_eq!(strip_section_lines("🪂 콜론 없는 줄\n다음: 줄"), "🪂 콜론 없는 줄\n다음: 줄");
    }

    #[test]
    fn empty_title_header_is_removed() {
        assert_eq!(strip_section_lines("🪂: 제목 없음\n본문"), "본문");
    }

    #[test]
    fn continuation_lines_stay_in_remainder() {
        let text = "🌾농업: 첫 줄\n이어지는 줄\n📦물류: 끝";
        assert_eq!(strip_section_lines(text), "이어지는 줄");
        // The extractor folds the same line into the first description.
        assert_eq!(extract_sections(text)[0].description, "첫 줄\n이어지는 줄");
    }

    #[test]
    fn crlf_header_line_is_removed() {
        assert_eq!(strip_section_lines("본문\r\n💲경제: 상승\r\n끝"), "본문\r\n끝");
    }

    #[test]
    fn stripping_is_idempotent() {
        let samples = [
            "",
            "앞부분 설명\n🪂일상: 소소한 이야기\n💲경제: 주가 상승",
            "\n\n  🪂: x\n\n본문\n\n\n⚖️사회: y\n꼬리  ",
            "🌾농업: 첫 줄\n이어지는 줄\n📦물류: 끝",
            "본문\r\n💲경제: 상승\r\n\r\n끝",
            "   \n 🗳️선거: 투표\n   본문",
        ];
        for text in samples {
            let once = strip_section_lines(text);
            assert_eq!(strip_section_lines(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn remainder_and_sections_cover_all_words() {
        let text = "서두 문장입니다\n🪂일상: 소소한 이야기\n중간 줄\n💲경제: 주가 상승\n⚖️사회: 판결 선고";
        let remainder = strip_section_lines(text);
        let rendered: Vec<String> = extract_sections(text)
            .iter()
            .map(|s| format!("{}{}: {}", s.icon, s.title, s.description))
            .collect();

        for word in text.split_whitespace() {
            let covered = remainder.contains(word) || rendered.iter().any(|r| r.contains(word));
            assert!(covered, "lost {word:?}");
        }
    }
}
