//! The console port: `say` queues output, `ask` flushes it and reads a line.
//!
//! Output is held until the next `ask` (or an explicit `flush`). Long output
//! is paginated: after `page_lines` lines the continue prompt is shown and a
//! line is read before printing the rest.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use toi_foundation::{Error, ErrorKind, Result};
use tracing::trace;

use crate::editor::{LineEditor, ReadResult};

/// Default pagination threshold.
pub const DEFAULT_PAGE_LINES: usize = 20;

/// Shown between pages when no message catalog entry overrides it.
const DEFAULT_CONTINUE: &str = "-- more --";

/// Line-oriented console I/O with pagination.
pub struct GameIo {
    editor: Box<dyn LineEditor>,
    out: Box<dyn Write>,
    pending: Vec<String>,
    page_lines: Option<usize>,
    continue_prompt: String,
    echo: bool,
}

impl GameIo {
    /// Creates a port reading from `editor` and writing to `out`.
    pub fn new(editor: impl LineEditor + 'static, out: impl Write + 'static) -> Self {
        Self {
            editor: Box::new(editor),
            out: Box::new(out),
            pending: Vec::new(),
            page_lines: Some(DEFAULT_PAGE_LINES),
            continue_prompt: DEFAULT_CONTINUE.to_string(),
            echo: false,
        }
    }

    /// Sets the pagination threshold; `None` disables pagination.
    #[must_use]
    pub fn with_page_lines(mut self, page_lines: Option<usize>) -> Self {
        self.page_lines = page_lines.filter(|&n| n > 0);
        self
    }

    /// Sets the prompt shown between pages.
    #[must_use]
    pub fn with_continue_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.continue_prompt = prompt.into();
        self
    }

    /// Writes each prompt and the line read for it to the output, so a
    /// scripted session reads like a transcript.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Queues text for output. Embedded newlines start new lines, and each
    /// line is trimmed.
    pub fn say(&mut self, text: &str) {
        self.pending
            .extend(text.trim_end().lines().map(|l| l.trim().to_string()));
    }

    /// Queues several pieces of text, each starting a new line.
    pub fn say_all<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) {
        for text in texts {
            self.say(text);
        }
    }

    /// Number of lines waiting to be written.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Writes queued output, pausing after every page.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails, or `InputClosed` if input ends
    /// while waiting at a page break.
    pub fn flush(&mut self) -> Result<()> {
        let lines = std::mem::take(&mut self.pending);
        let total = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            writeln!(self.out, "{line}")?;
            let written = i + 1;
            let page_break = self
                .page_lines
                .is_some_and(|page| written % page == 0 && written < total);
            if page_break {
                self.out.flush()?;
                let prompt = self.continue_prompt.clone();
                self.read(&prompt)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Flushes pending output, then reads one line.
    ///
    /// Ctrl+C yields an empty line.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input, or an I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.flush()?;
        let prompt = format!("{} ", prompt.trim_end());
        let line = self.read(&prompt)?;
        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }
        Ok(line)
    }

    fn read(&mut self, prompt: &str) -> Result<String> {
        let line = match self.editor.read_line(prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => String::new(),
            ReadResult::Eof => return Err(Error::new(ErrorKind::InputClosed)),
        };
        trace!(prompt, line = %line, "read line");
        if self.echo {
            writeln!(self.out, "{prompt}{line}")?;
        }
        Ok(line)
    }
}

/// A cloneable in-memory writer, for capturing game output.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
