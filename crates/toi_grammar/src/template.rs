//! Template parsing.
//!
//! A template is a line of literal words separated by whitespace, with
//! `[...]` marking an optional (nestable) group and `{kind}` marking a
//! capture slot. A backslash makes the next character literal, so `\[`,
//! `\]`, `\{`, `\}` and `\\` can appear inside words.

use std::collections::HashSet;

use thiserror::Error;

use crate::capture::CaptureKind;

/// One parsed element of a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    /// A literal word, lowercased.
    Word(String),
    /// A run of whitespace between pieces.
    Space,
    /// A `[...]` group that may be skipped.
    Optional {
        /// Contents of the group.
        pieces: Vec<Piece>,
        /// Byte offset of the opening bracket.
        offset: usize,
    },
    /// A `{kind}` slot.
    Capture {
        /// What the slot captures.
        kind: CaptureKind,
        /// Byte offset of the opening brace.
        offset: usize,
    },
}

impl Piece {
    /// Returns true for pieces that carry no text of their own.
    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self, Piece::Space)
    }
}

/// Errors found while parsing or compiling a template.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template has no words or captures.
    #[error("template is empty")]
    EmptyTemplate,

    /// A `[` was never closed.
    #[error("unclosed '[' at offset {0}")]
    UnbalancedBracket(usize),

    /// A `]` or `}` appeared without an opener.
    #[error("unexpected '{ch}' at offset {offset}")]
    UnexpectedClosing {
        /// The stray character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A `{` was never closed.
    #[error("unclosed '{{' at offset {0}")]
    UnclosedBrace(usize),

    /// A `{}` with nothing inside.
    #[error("empty capture at offset {0}")]
    EmptyCapture(usize),

    /// A `[]` with nothing inside.
    #[error("empty optional group at offset {0}")]
    EmptyGroup(usize),

    /// The placeholder is not one of the known capture kinds.
    #[error("unknown capture {{{name}}} at offset {offset}")]
    UnknownCapture {
        /// Placeholder text.
        name: String,
        /// Byte offset of the opening brace.
        offset: usize,
    },

    /// The same capture kind appears twice.
    #[error("capture {{{kind}}} appears more than once (offset {offset})")]
    DuplicateCapture {
        /// Repeated kind.
        kind: CaptureKind,
        /// Byte offset of the second occurrence.
        offset: usize,
    },

    /// A capture is directly followed by another capture.
    #[error("capture {{{kind}}} at offset {offset} is followed by another capture")]
    AdjacentCaptures {
        /// Kind of the first capture.
        kind: CaptureKind,
        /// Byte offset of the first capture.
        offset: usize,
    },

    /// A capture is followed by an optional group, so its end is unclear.
    #[error("capture {{{kind}}} at offset {offset} must be followed by a word or the end")]
    UnboundedCapture {
        /// Kind of the capture.
        kind: CaptureKind,
        /// Byte offset of the capture.
        offset: usize,
    },

    /// The stage has no collection to resolve this capture kind against.
    #[error("capture {{{kind}}} is not available here")]
    UnavailableCapture {
        /// Kind of the capture.
        kind: CaptureKind,
    },

    /// The template ends with a lone backslash.
    #[error("trailing backslash")]
    TrailingBackslash,
}

/// A group being built: its pieces and where it opened.
struct Frame {
    pieces: Vec<Piece>,
    offset: usize,
}

/// Parses a template into pieces.
///
/// Whitespace runs collapse into a single [`Piece::Space`], and leading or
/// trailing whitespace is dropped. Words are lowercased.
///
/// # Errors
///
/// Returns a [`TemplateError`] for unbalanced brackets or braces, unknown or
/// empty captures, a repeated capture kind, or a template with no content.
pub fn parse(template: &str) -> Result<Vec<Piece>, TemplateError> {
    let mut stack = vec![Frame {
        pieces: Vec::new(),
        offset: 0,
    }];
    let mut word = String::new();
    let mut chars = template.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => word.extend(escaped.to_lowercase()),
                None => return Err(TemplateError::TrailingBackslash),
            },
            c if c.is_whitespace() => {
                let frame = top(&mut stack);
                flush_word(&mut word, &mut frame.pieces);
                if !frame.pieces.last().is_none_or(Piece::is_space) {
                    frame.pieces.push(Piece::Space);
                }
            }
            '[' => {
                flush_word(&mut word, &mut top(&mut stack).pieces);
                stack.push(Frame {
                    pieces: Vec::new(),
                    offset,
                });
            }
            ']' => {
                flush_word(&mut word, &mut top(&mut stack).pieces);
                if stack.len() < 2 {
                    return Err(TemplateError::UnexpectedClosing { ch, offset });
                }
                let Some(mut group) = stack.pop() else {
                    return Err(TemplateError::UnexpectedClosing { ch, offset });
                };
                trim_spaces(&mut group.pieces);
                if group.pieces.is_empty() {
                    return Err(TemplateError::EmptyGroup(group.offset));
                }
                top(&mut stack).pieces.push(Piece::Optional {
                    pieces: group.pieces,
                    offset: group.offset,
                });
            }
            '{' => {
                flush_word(&mut word, &mut top(&mut stack).pieces);
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnclosedBrace(offset));
                }
                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyCapture(offset));
                }
                let kind = CaptureKind::from_placeholder(name).ok_or_else(|| {
                    TemplateError::UnknownCapture {
                        name: name.to_string(),
                        offset,
                    }
                })?;
                top(&mut stack).pieces.push(Piece::Capture { kind, offset });
            }
            '}' => return Err(TemplateError::UnexpectedClosing { ch, offset }),
            c => word.extend(c.to_lowercase()),
        }
    }

    if stack.len() > 1 {
        let open = stack.last().map_or(0, |f| f.offset);
        return Err(TemplateError::UnbalancedBracket(open));
    }
    let Some(Frame { mut pieces, .. }) = stack.pop() else {
        return Err(TemplateError::EmptyTemplate);
    };
    flush_word(&mut word, &mut pieces);
    trim_spaces(&mut pieces);

    if pieces.is_empty() {
        return Err(TemplateError::EmptyTemplate);
    }
    check_unique_captures(&pieces, &mut HashSet::new())?;
    Ok(pieces)
}

/// Returns true if the first non-space piece is a capture.
#[must_use]
pub fn starts_with_capture(pieces: &[Piece]) -> bool {
    matches!(
        pieces.iter().find(|p| !p.is_space()),
        Some(Piece::Capture { .. })
    )
}

fn top(stack: &mut [Frame]) -> &mut Frame {
    // The root frame is never popped while parsing.
    let last = stack.len() - 1;
    &mut stack[last]
}

fn flush_word(word: &mut String, pieces: &mut Vec<Piece>) {
    if !word.is_empty() {
        pieces.push(Piece::Word(std::mem::take(word)));
    }
}

fn trim_spaces(pieces: &mut Vec<Piece>) {
    while pieces.last().is_some_and(Piece::is_space) {
        pieces.pop();
    }
    if pieces.first().is_some_and(Piece::is_space) {
        pieces.remove(0);
    }
}

fn check_unique_captures(
    pieces: &[Piece],
    seen: &mut HashSet<CaptureKind>,
) -> Result<(), TemplateError> {
    for piece in pieces {
        match piece {
            Piece::Capture { kind, offset } => {
                if !seen.insert(*kind) {
                    return Err(TemplateError::DuplicateCapture {
                        kind: *kind,
                        offset: *offset,
                    });
                }
            }
            Piece::Optional { pieces, .. } => check_unique_captures(pieces, seen)?,
            Piece::Word(_) | Piece::Space => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(w: &str) -> Piece {
        Piece::Word(w.to_string())
    }

    #[test]
    fn parse_words_and_spaces() {
        let pieces = parse("  List   Species ").unwrap();
        assert_eq!(pieces, vec![word("list"), Piece::Space, word("species")]);
    }

    #[test]
    fn parse_nested_optional() {
        let pieces = parse("start [a [new]] game").unwrap();
        assert_eq!(
            pieces,
            vec![
                word("start"),
                Piece::Space,
                Piece::Optional {
                    pieces: vec![
                        word("a"),
                        Piece::Space,
                        Piece::Optional {
                            pieces: vec![word("new")],
                            offset: 9,
                        },
                    ],
                    offset: 6,
                },
                Piece::Space,
                word("game"),
            ]
        );
    }

    #[test]
    fn parse_capture() {
        let pieces = parse("edit {pc}").unwrap();
        assert_eq!(
            pieces[2],
            Piece::Capture {
                kind: CaptureKind::Pc,
                offset: 5
            }
        );
    }

    #[test]
    fn parse_escapes() {
        let pieces = parse(r"say \[hi\] \{x\} a\\b").unwrap();
        assert_eq!(
            pieces,
            vec![
                word("say"),
                Piece::Space,
                word("[hi]"),
                Piece::Space,
                word("{x}"),
                Piece::Space,
                word(r"a\b"),
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse("add [pc"), Err(TemplateError::UnbalancedBracket(4)));
        assert_eq!(
            parse("add pc]"),
            Err(TemplateError::UnexpectedClosing { ch: ']', offset: 6 })
        );
        assert_eq!(parse("edit {pc"), Err(TemplateError::UnclosedBrace(5)));
        assert_eq!(
            parse("edit pc}"),
            Err(TemplateError::UnexpectedClosing { ch: '}', offset: 7 })
        );
        assert_eq!(parse("edit {}"), Err(TemplateError::EmptyCapture(5)));
        assert_eq!(parse("go []"), Err(TemplateError::EmptyGroup(3)));
        assert_eq!(parse("   "), Err(TemplateError::EmptyTemplate));
        assert_eq!(parse(r"oops\"), Err(TemplateError::TrailingBackslash));
        assert!(matches!(
            parse("pick {weapon}"),
            Err(TemplateError::UnknownCapture { ref name, .. }) if name == "weapon"
        ));
    }

    #[test]
    fn duplicate_capture_rejected_even_inside_groups() {
        assert_eq!(
            parse("call {name} to [{name}]"),
            Err(TemplateError::DuplicateCapture {
                kind: CaptureKind::Name,
                offset: 16
            })
        );
    }

    #[test]
    fn starts_with_capture_skips_nothing_but_spaces() {
        assert!(starts_with_capture(&parse("{species}").unwrap()));
        assert!(!starts_with_capture(&parse("species {species}").unwrap()));
        assert!(!starts_with_capture(&parse("[be] {species}").unwrap()));
    }

    proptest! {
        #[test]
        fn plain_text_parses_to_its_words(text in "[A-Za-z?!.,' ]{0,24}[A-Za-z]") {
            let pieces = parse(&text).unwrap();
            let words: Vec<String> = pieces
                .iter()
                .filter_map(|p| match p {
                    Piece::Word(w) => Some(w.clone()),
                    _ => None,
                })
                .collect();
            let expected: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
            prop_assert_eq!(words, expected);
        }
    }
}
