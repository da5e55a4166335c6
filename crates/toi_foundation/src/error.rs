//! Error types for the Toi system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Toi operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid grammar template error.
    #[must_use]
    pub fn invalid_template(
        stage: impl Into<String>,
        command: impl Into<String>,
        template: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::new(ErrorKind::InvalidTemplate {
            stage: stage.into(),
            command: command.into(),
            template: template.into(),
            reason: reason.to_string(),
        })
    }

    /// Creates a missing control entry error.
    #[must_use]
    pub fn missing_control(stage: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingControl {
            stage: stage.into(),
            command: command.into(),
        })
    }

    /// Creates a missing message string error.
    #[must_use]
    pub fn missing_string(catalog: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingString {
            catalog: catalog.into(),
            key: key.into(),
        })
    }

    /// Creates an unknown entry point error.
    #[must_use]
    pub fn unknown_entry_point(flow: impl Into<String>, entry_point: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntryPoint {
            flow: flow.into(),
            entry_point: entry_point.into(),
        })
    }

    /// Creates a data file error.
    #[must_use]
    pub fn data_file(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::DataFile {
            path: path.into(),
            message: message.to_string(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error means the input stream ended.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self.kind, ErrorKind::InputClosed)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A grammar template in a control file could not be compiled.
    #[error("invalid command syntax for {stage}/{command}: \"{template}\": {reason}")]
    InvalidTemplate {
        /// Stage that owns the command.
        stage: String,
        /// Command the template belongs to.
        command: String,
        /// The offending template text.
        template: String,
        /// Why compilation failed.
        reason: String,
    },

    /// A command has no templates in the control catalog.
    #[error("no control templates for {stage}/{command}")]
    MissingControl {
        /// Stage that was queried.
        stage: String,
        /// Command that was queried.
        command: String,
    },

    /// A message key is absent from the string catalog.
    #[error("no string {key} in catalog {catalog}")]
    MissingString {
        /// Catalog (stage) that was queried.
        catalog: String,
        /// Key that was not found.
        key: String,
    },

    /// The same command name was registered twice for a stage.
    #[error("command {command} registered twice for stage {stage}")]
    DuplicateCommand {
        /// Stage that owns the registry.
        stage: String,
        /// Command name registered twice.
        command: String,
    },

    /// A flow was entered through an entry point it does not define.
    #[error("flow {flow} has no entry point \"{entry_point}\"")]
    UnknownEntryPoint {
        /// Flow name.
        flow: String,
        /// Requested entry point.
        entry_point: String,
    },

    /// An entry point was given the wrong number of arguments.
    #[error("entry point {flow}/{entry_point} takes {expected} argument(s), got {actual}")]
    EntryPointArity {
        /// Flow name.
        flow: String,
        /// Entry point name.
        entry_point: String,
        /// Declared argument count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// A control signal reached a place where nothing can receive it.
    #[error("control signal misrouted: {0}")]
    SignalMisrouted(String),

    /// A data file could not be found or parsed.
    #[error("data file {path}: {message}")]
    DataFile {
        /// Path that was read.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// Terminal or stream I/O failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// The input stream ended (Ctrl+D or end of script).
    #[error("input closed")]
    InputClosed,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file or stage name.
    pub source: Option<String>,
    /// Stack of flow/entry point frames active when the error occurred.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_template_names_stage_command_and_text() {
        let err = Error::invalid_template("party creation", "add", "add [pc", "unclosed '['");
        let msg = format!("{err}");
        assert!(msg.contains("party creation/add"));
        assert!(msg.contains("\"add [pc\""));
        assert!(msg.contains("unclosed"));
    }

    #[test]
    fn error_with_context() {
        let err = Error::missing_control("main menu", "quit").with_context(
            ErrorContext::new()
                .with_source("control/main_menu.yaml")
                .with_frame("main menu/start"),
        );

        assert!(matches!(err.kind, ErrorKind::MissingControl { .. }));
        let ctx = err.context.unwrap();
        assert_eq!(ctx.source, Some("control/main_menu.yaml".to_string()));
        assert_eq!(ctx.stack, vec!["main menu/start".to_string()]);
    }

    #[test]
    fn context_display_lists_frames() {
        let ctx = ErrorContext::new()
            .with_source("help.yaml")
            .with_frame("help/general");
        let shown = format!("{ctx}");
        assert!(shown.starts_with("at help.yaml"));
        assert!(shown.contains("  in help/general"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err.kind, ErrorKind::Io(_)));
        assert!(!err.is_input_closed());
    }

    #[test]
    fn input_closed_is_detected() {
        assert!(Error::new(ErrorKind::InputClosed).is_input_closed());
    }
}
