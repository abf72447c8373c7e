//! Backtracking-risk heuristics for user patterns.
//!
//! The score is a cheap lexical estimate, not a proof. It exists so the UI
//! can warn before the backtrack budget trips, and so strict configurations
//! can refuse the worst shapes (nested unbounded quantifiers) up front.

use serde::Serialize;

/// Pattern complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternComplexity {
    /// Literals and simple classes.
    Simple,
    /// Some alternation or classes.
    Medium,
    /// Backtracking-prone constructs.
    Complex,
    /// Nested unbounded quantifiers or equivalent; likely catastrophic.
    Dangerous,
}

impl PatternComplexity {
    pub fn analyze(pattern: &str) -> Self {
        Self::from_score(score(pattern))
    }

    fn from_score(score: usize) -> Self {
        match score {
            0..=1 => PatternComplexity::Simple,
            2..=7 => PatternComplexity::Medium,
            8..=15 => PatternComplexity::Complex,
            _ => PatternComplexity::Dangerous,
        }
    }
}

#[derive(Default)]
struct GroupFrame {
    has_unbounded: bool,
}

fn score(pattern: &str) -> usize {
    let chars: Vec<char> = pattern.chars().collect();
    let mut score = 0;
    let mut stack = vec![GroupFrame::default()];
    let mut class_count = 0;
    let mut i = 0;

    if pattern.contains(".*.*") || pattern.contains(".+.+") {
        score += 10;
    }

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if matches!(chars.get(i + 1), Some('1'..='9')) {
                    score += 5;
                }
                i += 2;
                continue;
            }
            '[' => {
                class_count += 1;
                i = skip_class(&chars, i);
                continue;
            }
            '(' => {
                let rest: String = chars[i + 1..].iter().take(3).collect();
                if rest.starts_with("?=")
                    || rest.starts_with("?!")
                    || rest.starts_with("?<=")
                    || rest.starts_with("?<!")
                {
                    score += 5;
                }
                stack.push(GroupFrame::default());
            }
            ')' => {
                if stack.len() > 1 {
                    let frame = stack.pop().unwrap_or_default();
                    let repeat = repetition_at(&chars, i + 1);
                    if repeat.is_some() && frame.has_unbounded {
                        score += 20;
                    }
                    if let Some(parent) = stack.last_mut() {
                        parent.has_unbounded |=
                            frame.has_unbounded || repeat == Some(Repeat::Unbounded);
                    }
                    i += 1;
                    continue;
                }
            }
            '|' => score += 1,
            '*' | '+' => {
                if let Some(frame) = stack.last_mut() {
                    frame.has_unbounded = true;
                }
            }
            '{' => {
                if repetition_at(&chars, i) == Some(Repeat::Unbounded) {
                    if let Some(frame) = stack.last_mut() {
                        frame.has_unbounded = true;
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    score += class_count / 2;
    if pattern.len() > 100 {
        score += 3;
    }
    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Bounded,
    Unbounded,
}

/// Classifies the quantifier starting at `i`, if any.
fn repetition_at(chars: &[char], i: usize) -> Option<Repeat> {
    match chars.get(i)? {
        '*' | '+' => Some(Repeat::Unbounded),
        '{' => {
            let close = chars[i..].iter().position(|&c| c == '}')? + i;
            let body: String = chars[i + 1..close].iter().collect();
            let mut parts = body.splitn(2, ',');
            let min = parts.next()?;
            if min.is_empty() || !min.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            match parts.next() {
                None => Some(Repeat::Bounded),
                Some("") => Some(Repeat::Unbounded),
                Some(max) if max.chars().all(|c| c.is_ascii_digit()) => Some(Repeat::Bounded),
                Some(_) => None,
            }
        }
        _ => None,
    }
}

/// Returns the index just past the character class opening at `start`.
fn skip_class(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    // A leading `]` (or `^]`) is literal.
    if chars.get(i) == Some(&'^') {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            ']' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}
