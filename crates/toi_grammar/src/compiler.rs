//! Template compilation.
//!
//! Each template becomes a `Sequence` anchored at both ends of the line.
//! A command's templates become one `Alternative`, with templates that start
//! with a capture placed last so that a catch-all slot cannot starve a
//! literal phrasing.

use thiserror::Error;

use crate::capture::CaptureContext;
use crate::matcher::{CaptureMatcher, Matcher};
use crate::template::{self, Piece, TemplateError};

/// A template that failed to compile.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("\"{template}\": {error}")]
pub struct InvalidTemplate {
    /// The template text.
    pub template: String,
    /// What was wrong with it.
    #[source]
    pub error: TemplateError,
}

/// Compiles a command's alternative templates into one matcher.
///
/// # Errors
///
/// Returns the first template that fails to compile.
pub fn compile<S: AsRef<str>>(
    templates: &[S],
    ctx: &CaptureContext,
) -> Result<Matcher, InvalidTemplate> {
    let mut literal_first = Vec::new();
    let mut capture_first = Vec::new();

    for template in templates {
        let template = template.as_ref();
        let fail = |error| InvalidTemplate {
            template: template.to_string(),
            error,
        };
        let pieces = template::parse(template).map_err(fail)?;
        let matcher = anchored(&pieces, ctx).map_err(fail)?;
        if template::starts_with_capture(&pieces) {
            capture_first.push(matcher);
        } else {
            literal_first.push(matcher);
        }
    }

    literal_first.extend(capture_first);
    Ok(Matcher::Alternative(literal_first))
}

/// Compiles a single template into an anchored matcher.
///
/// # Errors
///
/// Returns a [`TemplateError`] if the template is malformed or uses a
/// capture the context cannot resolve.
pub fn compile_template(template: &str, ctx: &CaptureContext) -> Result<Matcher, TemplateError> {
    anchored(&template::parse(template)?, ctx)
}

fn anchored(pieces: &[Piece], ctx: &CaptureContext) -> Result<Matcher, TemplateError> {
    let mut children = vec![Matcher::Whitespace];
    children.extend(sequence(pieces, Follow::End, ctx)?);
    children.push(Matcher::Whitespace);
    children.push(Matcher::EndOfInput);
    Ok(Matcher::Sequence(children))
}

/// What comes after a piece, looking past whitespace and out of enclosing
/// groups.
#[derive(Clone, Copy)]
enum Follow<'a> {
    End,
    Word(&'a str),
    Capture,
    Group,
}

fn follow_of<'a>(rest: &'a [Piece], outer: Follow<'a>) -> Follow<'a> {
    match rest.iter().find(|p| !p.is_space()) {
        None | Some(Piece::Space) => outer,
        Some(Piece::Word(word)) => Follow::Word(word),
        Some(Piece::Capture { .. }) => Follow::Capture,
        Some(Piece::Optional { .. }) => Follow::Group,
    }
}

fn sequence(
    pieces: &[Piece],
    outer: Follow<'_>,
    ctx: &CaptureContext,
) -> Result<Vec<Matcher>, TemplateError> {
    let mut out = Vec::with_capacity(pieces.len());
    for (i, piece) in pieces.iter().enumerate() {
        let follow = follow_of(&pieces[i + 1..], outer);
        out.push(match piece {
            Piece::Word(word) => Matcher::literal(word),
            Piece::Space => Matcher::Whitespace,
            Piece::Optional { pieces, .. } => {
                Matcher::Optional(Box::new(Matcher::Sequence(sequence(pieces, follow, ctx)?)))
            }
            Piece::Capture { kind, offset } => {
                let until = match follow {
                    Follow::End => None,
                    Follow::Word(word) => Some(word.to_string()),
                    Follow::Capture => {
                        return Err(TemplateError::AdjacentCaptures {
                            kind: *kind,
                            offset: *offset,
                        });
                    }
                    Follow::Group => {
                        return Err(TemplateError::UnboundedCapture {
                            kind: *kind,
                            offset: *offset,
                        });
                    }
                };
                Matcher::Capture(CaptureMatcher::new(ctx.resolver(*kind)?, until))
            }
        });
    }
    Ok(out)
}
