//! Match enumeration with `g` / `y` flag semantics.
//!
//! The enumerator walks a cursor through the text:
//! - without the global flag it makes a single attempt;
//! - with it, each search starts where the previous match ended;
//! - after a zero-width match the cursor moves one character further so the
//!   walk always makes progress;
//! - with the sticky flag a match must start exactly at the cursor, and the
//!   first anchored miss ends the walk.

use crate::compiler::CompiledMatcher;
use crate::error::EnumerationError;
use crate::matcher::offsets::Utf16Offsets;
use crate::matcher::types::{CaptureGroup, MatchRecord};
use tracing::{debug, trace};

/// Iterator over the matches of one `(matcher, text)` pair.
///
/// Yields matches in strictly increasing, non-overlapping order. After an
/// error has been yielded the iterator is exhausted.
#[derive(Debug)]
pub struct MatchEnumerator<'m, 't> {
    matcher: &'m CompiledMatcher,
    text: &'t str,
    offsets: Utf16Offsets<'t>,
    cursor: usize,
    emitted: usize,
    done: bool,
}

impl<'m, 't> MatchEnumerator<'m, 't> {
    pub fn new(matcher: &'m CompiledMatcher, text: &'t str) -> Self {
        Self {
            matcher,
            text,
            offsets: Utf16Offsets::new(text),
            cursor: 0,
            emitted: 0,
            done: false,
        }
    }

    fn next_match(&mut self) -> Result<Option<MatchRecord>, EnumerationError> {
        let flags = self.matcher.flags();
        let found = if flags.sticky() {
            self.matcher.captures_anchored_at(self.text, self.cursor)?
        } else {
            self.matcher.captures_at(self.text, self.cursor)?
        };
        let Some(spans) = found else {
            return Ok(None);
        };
        let Some(whole) = spans.first().cloned().flatten() else {
            return Err(EnumerationError::Engine(
                "engine reported a match without a span".to_string(),
            ));
        };

        if let Some(max) = self.matcher.max_matches() {
            if self.emitted == max {
                return Err(EnumerationError::TooManyMatches(max));
            }
        }

        let names = self.matcher.group_names();
        let mut groups = Vec::with_capacity(names.len());
        for (span, name) in spans.iter().skip(1).zip(names) {
            groups.push(match span {
                Some(span) => CaptureGroup {
                    name: name.clone(),
                    text: Some(self.text[span.clone()].to_string()),
                    index: Some(self.offsets.to_utf16(span.start)),
                },
                None => CaptureGroup::absent(name.clone()),
            });
        }

        let record = MatchRecord {
            ordinal: self.emitted,
            index: self.offsets.to_utf16(whole.start),
            end_index: self.offsets.to_utf16(whole.end),
            byte_start: whole.start,
            byte_end: whole.end,
            text: self.text[whole.clone()].to_string(),
            groups,
        };
        trace!(
            ordinal = record.ordinal,
            index = record.index,
            end = record.end_index,
            "match"
        );
        self.emitted += 1;

        if !flags.global() {
            self.done = true;
            return Ok(Some(record));
        }

        self.cursor = whole.end;
        if whole.is_empty() {
            // Step over one whole character; a UTF-8 string cannot be split
            // inside a code point.
            match self.text[self.cursor..].chars().next() {
                Some(c) => self.cursor += c.len_utf8(),
                None => self.done = true,
            }
        }
        Ok(Some(record))
    }
}

impl Iterator for MatchEnumerator<'_, '_> {
    type Item = Result<MatchRecord, EnumerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_match() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Collect every match, or fail without partial results.
pub fn enumerate(
    matcher: &CompiledMatcher,
    text: &str,
) -> Result<Vec<MatchRecord>, EnumerationError> {
    let result: Result<Vec<_>, _> = MatchEnumerator::new(matcher, text).collect();
    match &result {
        Ok(matches) => debug!(
            pattern = matcher.source(),
            flags = %matcher.flags(),
            matches = matches.len(),
            "enumerated matches"
        ),
        Err(err) => debug!(pattern = matcher.source(), error = %err, "enumeration failed"),
    }
    result
}
