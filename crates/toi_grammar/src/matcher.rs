//! Matcher runtime.
//!
//! A [`Matcher`] is a tree built once per command and reused for every input
//! line. Matching walks the tree left to right over byte positions in the
//! line, filling a [`CaptureSet`] as capture slots are passed.

use std::fmt;
use std::rc::Rc;

use toi_foundation::normalize;

use crate::capture::{CaptureKind, CaptureResolver, CaptureSet};

/// A compiled matcher node.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// A word, compared case-insensitively. Stored lowercased.
    Literal(String),
    /// Zero or more whitespace characters.
    Whitespace,
    /// Children matched one after the other.
    Sequence(Vec<Matcher>),
    /// The first child that matches wins.
    Alternative(Vec<Matcher>),
    /// The child, or nothing.
    Optional(Box<Matcher>),
    /// A capture slot.
    Capture(CaptureMatcher),
    /// Succeeds only at the end of the line.
    EndOfInput,
}

/// A capture slot: where it stops, and what resolves its text.
#[derive(Clone)]
pub struct CaptureMatcher {
    resolver: Rc<dyn CaptureResolver>,
    until: Option<String>,
}

impl CaptureMatcher {
    /// Creates a slot that consumes up to the first whitespace-delimited
    /// occurrence of `until`, or to the end of the line when `until` is
    /// `None`.
    #[must_use]
    pub fn new(resolver: Rc<dyn CaptureResolver>, until: Option<String>) -> Self {
        Self {
            resolver,
            until: until.map(|w| w.to_lowercase()),
        }
    }

    /// The kind of slot.
    #[must_use]
    pub fn kind(&self) -> CaptureKind {
        self.resolver.kind()
    }

    /// Returns the end position of the captured text, or `None` if there is
    /// nothing to capture.
    fn extent(&self, line: &str, pos: usize) -> Option<usize> {
        let rest = &line[pos..];
        let end = match &self.until {
            Some(word) => pos + find_word_after_first(rest, word)?,
            None => line.len(),
        };
        if line[pos..end].trim().is_empty() {
            None
        } else {
            Some(end)
        }
    }
}

impl fmt::Debug for CaptureMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureMatcher")
            .field("kind", &self.kind())
            .field("until", &self.until)
            .finish()
    }
}

/// Byte offset of the first whitespace-delimited token of `text` equal to
/// `word` (case-insensitively), skipping the first token.
fn find_word_after_first(text: &str, word: &str) -> Option<usize> {
    let mut prev_is_space = true;
    let mut seen_token = false;
    for (i, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if prev_is_space && !is_space {
            if seen_token {
                let token = text[i..].split_whitespace().next().unwrap_or_default();
                if token.to_lowercase() == word {
                    return Some(i);
                }
            }
            seen_token = true;
        }
        prev_is_space = is_space;
    }
    None
}

/// Matches a lowercased literal at the start of `text`, returning the number
/// of bytes consumed.
fn match_literal(text: &str, word: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in word.chars() {
        let (i, ch) = chars.next()?;
        if !ch.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = i + ch.len_utf8();
    }
    // Words end on a boundary: "go" must not match the start of "gold".
    let ends_alnum = word.chars().last().is_some_and(char::is_alphanumeric);
    let next_alnum = text[end..].chars().next().is_some_and(char::is_alphanumeric);
    if ends_alnum && next_alnum {
        None
    } else {
        Some(end)
    }
}

impl Matcher {
    /// Builds the matcher for a literal word.
    #[must_use]
    pub fn literal(word: &str) -> Self {
        Matcher::Literal(word.to_lowercase())
    }

    /// Matches the whole line, returning the captures on success.
    ///
    /// The match must consume the entire line.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<CaptureSet> {
        let mut captures = CaptureSet::new();
        let end = self.match_at(line, 0, &mut captures)?;
        (end == line.len()).then_some(captures)
    }

    /// Matches starting at byte `pos`, returning the position after the
    /// match. Captures are written to `captures` only along the path that
    /// succeeds.
    pub fn match_at(&self, line: &str, pos: usize, captures: &mut CaptureSet) -> Option<usize> {
        match self {
            Matcher::Literal(word) => match_literal(&line[pos..], word).map(|n| pos + n),
            Matcher::Whitespace => {
                let skipped: usize = line[pos..]
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .map(char::len_utf8)
                    .sum();
                Some(pos + skipped)
            }
            Matcher::Sequence(children) => children
                .iter()
                .try_fold(pos, |at, child| child.match_at(line, at, captures)),
            Matcher::Alternative(children) => children.iter().find_map(|child| {
                let mut trial = captures.clone();
                let end = child.match_at(line, pos, &mut trial)?;
                *captures = trial;
                Some(end)
            }),
            Matcher::Optional(child) => {
                let mut trial = captures.clone();
                match child.match_at(line, pos, &mut trial) {
                    Some(end) => {
                        *captures = trial;
                        Some(end)
                    }
                    None => Some(pos),
                }
            }
            Matcher::Capture(slot) => {
                let end = slot.extent(line, pos)?;
                let text = normalize(&line[pos..end]);
                captures.insert(slot.kind(), slot.resolver.resolve(&text));
                Some(end)
            }
            Matcher::EndOfInput => (pos == line.len()).then_some(pos),
        }
    }
}
