//! Engine backends behind a compiled matcher.
//!
//! Patterns that fit the linear-time `regex` engine compile there and can
//! never blow up at match time. Anything needing backtracking features
//! (backreferences, lookaround) goes to `fancy-regex`, which enforces the
//! configured backtrack budget.

use crate::config::{EnginePreference, MatchConfig};
use crate::error::{CompileError, EnumerationError};
use crate::flags::{FlagKind, Flags};
use regex_automata::util::syntax;
use regex_automata::{meta, Anchored, Input};
use serde::Serialize;
use std::ops::Range;
use tracing::debug;

/// Byte spans of one match: index 0 is the whole match, then one entry per
/// capturing group (`None` when the group did not participate).
pub(crate) type CaptureSpans = Vec<Option<Range<usize>>>;

/// Which engine a matcher was compiled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Linear,
    Backtracking,
}

/// A compiled backend. Sticky matchers carry a second, anchored program so
/// an attempt at the cursor never scans the rest of the text.
#[derive(Debug)]
pub(crate) enum Engine {
    Linear {
        re: regex::Regex,
        anchored: Option<meta::Regex>,
    },
    Backtracking {
        re: fancy_regex::Regex,
        anchored: Option<fancy_regex::Regex>,
    },
}

impl Engine {
    pub(crate) fn build(
        source: &str,
        flags: Flags,
        config: &MatchConfig,
    ) -> Result<Self, CompileError> {
        if config.engine == EnginePreference::Auto {
            match build_linear(source, flags, config) {
                Ok(re) => {
                    let anchored = if flags.sticky() {
                        Some(build_anchored_linear(source, flags, config)?)
                    } else {
                        None
                    };
                    return Ok(Engine::Linear { re, anchored });
                }
                Err(regex::Error::CompiledTooBig(limit)) => {
                    return Err(CompileError::new(format!(
                        "Compiled regex exceeds size limit of {limit} bytes"
                    )));
                }
                Err(err) => {
                    debug!(error = %err, "linear engine rejected pattern; using backtracking engine");
                }
            }
        }
        let re = build_backtracking(source, flags, config)?;
        let anchored = if flags.sticky() {
            Some(build_backtracking(&format!(r"\G(?:{source})"), flags, config)?)
        } else {
            None
        };
        Ok(Engine::Backtracking { re, anchored })
    }

    pub(crate) fn kind(&self) -> EngineKind {
        match self {
            Engine::Linear { .. } => EngineKind::Linear,
            Engine::Backtracking { .. } => EngineKind::Backtracking,
        }
    }

    /// Capturing groups excluding the implicit whole-match group.
    pub(crate) fn group_names(&self) -> Vec<Option<String>> {
        let names: Vec<Option<String>> = match self {
            Engine::Linear { re, .. } => re
                .capture_names()
                .map(|name| name.map(str::to_string))
                .collect(),
            Engine::Backtracking { re, .. } => re
                .capture_names()
                .map(|name| name.map(str::to_string))
                .collect(),
        };
        names.into_iter().skip(1).collect()
    }

    /// Leftmost match starting at or after byte offset `pos`. Text before
    /// `pos` still counts as context for anchors, word boundaries and
    /// lookbehind.
    pub(crate) fn captures_at(
        &self,
        text: &str,
        pos: usize,
    ) -> Result<Option<CaptureSpans>, EnumerationError> {
        match self {
            Engine::Linear { re, .. } => Ok(re
                .captures_at(text, pos)
                .map(|caps| caps.iter().map(|m| m.map(|m| m.range())).collect())),
            Engine::Backtracking { re, .. } => fancy_captures(re, text, pos),
        }
    }

    /// A match that starts exactly at `pos`, with the same context rules as
    /// [`Engine::captures_at`].
    pub(crate) fn captures_anchored_at(
        &self,
        text: &str,
        pos: usize,
    ) -> Result<Option<CaptureSpans>, EnumerationError> {
        let spans = match self {
            Engine::Linear {
                anchored: Some(re), ..
            } => {
                let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
                let mut caps = re.create_captures();
                re.search_captures(&input, &mut caps);
                if !caps.is_match() {
                    return Ok(None);
                }
                Some(
                    (0..caps.group_len())
                        .map(|i| caps.get_group(i).map(|span| span.range()))
                        .collect(),
                )
            }
            Engine::Backtracking {
                anchored: Some(re), ..
            } => fancy_captures(re, text, pos)?,
            // Compiled without the sticky flag: search, then keep only a
            // match at `pos`.
            _ => self.captures_at(text, pos)?,
        };
        Ok(spans.filter(|spans| {
            matches!(spans.first(), Some(Some(whole)) if whole.start == pos)
        }))
    }
}

fn fancy_captures(
    re: &fancy_regex::Regex,
    text: &str,
    pos: usize,
) -> Result<Option<CaptureSpans>, EnumerationError> {
    let Some(caps) = re.captures_from_pos(text, pos)? else {
        return Ok(None);
    };
    Ok(Some(
        (0..caps.len())
            .map(|i| caps.get(i).map(|m| m.start()..m.end()))
            .collect(),
    ))
}

fn build_linear(
    source: &str,
    flags: Flags,
    config: &MatchConfig,
) -> Result<regex::Regex, regex::Error> {
    regex::RegexBuilder::new(source)
        .case_insensitive(flags.contains(FlagKind::CaseInsensitive))
        .multi_line(flags.contains(FlagKind::Multiline))
        .dot_matches_new_line(flags.contains(FlagKind::DotAll))
        .size_limit(config.size_limit)
        .build()
}

/// Same syntax as [`build_linear`], on the meta engine that `regex` wraps,
/// because only the meta engine accepts anchored searches over a sub-range.
fn build_anchored_linear(
    source: &str,
    flags: Flags,
    config: &MatchConfig,
) -> Result<meta::Regex, CompileError> {
    meta::Regex::builder()
        .syntax(
            syntax::Config::new()
                .case_insensitive(flags.contains(FlagKind::CaseInsensitive))
                .multi_line(flags.contains(FlagKind::Multiline))
                .dot_matches_new_line(flags.contains(FlagKind::DotAll)),
        )
        .configure(meta::Regex::config().nfa_size_limit(Some(config.size_limit)))
        .build(source)
        .map_err(|e| CompileError::new(e.to_string()))
}

fn build_backtracking(
    source: &str,
    flags: Flags,
    config: &MatchConfig,
) -> Result<fancy_regex::Regex, CompileError> {
    let pattern = format!("{}{source}", flags.inline_prefix());
    fancy_regex::RegexBuilder::new(&pattern)
        .backtrack_limit(config.backtrack_limit)
        .delegate_size_limit(config.size_limit)
        .build()
        .map_err(|e| CompileError::new(e.to_string()))
}
