//! Highlight partitioning.

use crate::matcher::MatchRecord;
use serde::{Deserialize, Serialize};

/// One contiguous run of rendered text.
///
/// Match segments keep the ordinal of the match they came from, so two
/// adjacent matches stay distinguishable even with no gap between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
    pub match_ordinal: Option<usize>,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
            match_ordinal: None,
        }
    }

    pub fn matched(text: impl Into<String>, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            is_match: true,
            match_ordinal: Some(ordinal),
        }
    }
}

/// Partition `text` into plain and match segments.
///
/// `matches` should be the ordered, non-overlapping output of the enumerator
/// for this same `text`. Records that overlap an earlier one or do not fit
/// `text` are skipped, so concatenating the returned segments always
/// reproduces `text` exactly. Zero-width matches yield empty match segments.
pub fn render(text: &str, matches: &[MatchRecord]) -> Vec<HighlightSegment> {
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for m in matches {
        if m.byte_start < last {
            continue;
        }
        let (Some(gap), Some(matched)) = (text.get(last..m.byte_start), text.get(m.byte_range()))
        else {
            continue;
        };
        if !gap.is_empty() {
            segments.push(HighlightSegment::plain(gap));
        }
        segments.push(HighlightSegment::matched(matched, m.ordinal));
        last = m.byte_end;
    }

    if last < text.len() {
        segments.push(HighlightSegment::plain(&text[last..]));
    }
    segments
}

/// Rebuild the text from its segments.
pub fn concat(segments: &[HighlightSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::matcher::enumerate;

    fn segments(pattern: &str, flags: &str, text: &str) -> Vec<HighlightSegment> {
        let matcher = compile(pattern, flags.parse().unwrap()).unwrap();
        let matches = enumerate(&matcher, text).unwrap();
        render(text, &matches)
    }

    #[test]
    fn test_gaps_and_remainder() {
        let segs = segments(r"\d+", "g", "a1 b22 c");
        assert_eq!(
            segs,
            vec![
                HighlightSegment::plain("a"),
                HighlightSegment::matched("1", 0),
                HighlightSegment::plain(" b"),
                HighlightSegment::matched("22", 1),
                HighlightSegment::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(
            segments("z", "g", "abc"),
            vec![HighlightSegment::plain("abc")]
        );
        assert!(segments("z", "g", "").is_empty());
    }

    #[test]
    fn test_adjacent_matches_not_merged() {
        let segs = segments("a", "g", "aa");
        assert_eq!(
            segs,
            vec![HighlightSegment::matched("a", 0), HighlightSegment::matched("a", 1)]
        );
    }

    #[test]
    fn test_zero_width_matches() {
        let segs = segments("", "g", "ab");
        assert_eq!(
            segs,
            vec![
                HighlightSegment::matched("", 0),
                HighlightSegment::plain("a"),
                HighlightSegment::matched("", 1),
                HighlightSegment::plain("b"),
                HighlightSegment::matched("", 2),
            ]
        );
        assert_eq!(concat(&segs), "ab");
    }

    #[test]
    fn test_lossless_partition() {
        let cases = [
            (r"\w+", "g", "héllo wörld 😀!"),
            ("x*", "g", "aaa"),
            ("^", "gm", "one\ntwo\n"),
            ("(a)|(b)", "g", "cabbage"),
            ("o", "", "foo boo"),
        ];
        for (pattern, flags, text) in cases {
            assert_eq!(concat(&segments(pattern, flags, text)), text, "{pattern}");
        }
    }

    #[test]
    fn test_match_covering_everything() {
        let segs = segments(".*", "s", "a\nb");
        assert_eq!(segs, vec![HighlightSegment::matched("a\nb", 0)]);
    }

    #[test]
    fn test_records_from_other_text_are_skipped() {
        let matcher = compile("b", "g".parse().unwrap()).unwrap();
        let foreign = enumerate(&matcher, "😀😀b").unwrap();
        assert_eq!(foreign[0].byte_range(), 8..9);
        assert_eq!(render("ab", &foreign), vec![HighlightSegment::plain("ab")]);

        // Byte 1 falls inside 'é'.
        let split = enumerate(&matcher, "xb").unwrap();
        assert_eq!(render("é", &split), vec![HighlightSegment::plain("é")]);
    }

    #[test]
    fn test_overlapping_records_are_skipped() {
        let matcher = compile("a", "g".parse().unwrap()).unwrap();
        let mut matches = enumerate(&matcher, "aa").unwrap();
        matches.push(matches[0].clone());
        let segs = render("aa", &matches);
        assert_eq!(segs.len(), 2);
        assert_eq!(concat(&segs), "aa");
    }
}
