//! Command registry and dispatch.
//!
//! Each stage owns one [`CommandRegistry`]. Registration compiles templates
//! up front, so a malformed control file fails when the stage is built.
//! Dispatch tries every command; exactly one must match for a handler to be
//! chosen.

use toi_data::ControlCatalog;
use toi_foundation::{Error, ErrorKind, Result};
use tracing::{debug, warn};

use crate::capture::{CaptureContext, CaptureSet};
use crate::compiler::compile;
use crate::matcher::Matcher;

/// A named command: its compiled grammar and its handler.
#[derive(Clone, Debug)]
pub struct Command<H> {
    name: String,
    matcher: Matcher,
    handler: H,
}

impl<H> Command<H> {
    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled grammar.
    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// The result of dispatching one line.
#[derive(Clone, Debug)]
pub enum Dispatch<H> {
    /// No command matched.
    Unrecognized,
    /// Several commands matched; their names, in registration order.
    Ambiguous(Vec<String>),
    /// Exactly one command matched.
    Matched {
        /// Command name.
        name: String,
        /// The command's handler.
        handler: H,
        /// What the line captured.
        captures: CaptureSet,
    },
}

/// The commands of one stage.
#[derive(Debug)]
pub struct CommandRegistry<H> {
    stage: String,
    ctx: CaptureContext,
    commands: Vec<Command<H>>,
}

impl<H: Clone> CommandRegistry<H> {
    /// Creates an empty registry for `stage`, resolving captures against
    /// `ctx`.
    #[must_use]
    pub fn new(stage: impl Into<String>, ctx: CaptureContext) -> Self {
        Self {
            stage: stage.into(),
            ctx,
            commands: Vec::new(),
        }
    }

    /// The stage this registry belongs to.
    #[must_use]
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Compiles `templates` and registers them as command `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplate` naming the stage, command and template if a
    /// template does not compile, `MissingControl` if `templates` is empty,
    /// or `DuplicateCommand` if `name` is already registered.
    pub fn register<S: AsRef<str>>(
        &mut self,
        name: &str,
        templates: &[S],
        handler: H,
    ) -> Result<()> {
        let stage = self.stage.clone();
        self.register_as(&stage, name, templates, handler)
    }

    /// Registers command `command` with the templates `catalog` holds for
    /// `stage`. Shared commands live under their own stage in the catalog,
    /// so `stage` need not be this registry's stage.
    ///
    /// # Errors
    ///
    /// Returns `MissingControl` if the catalog has no templates for the
    /// command, plus the errors of [`CommandRegistry::register`].
    pub fn register_from(
        &mut self,
        catalog: &ControlCatalog,
        stage: &str,
        command: &str,
        handler: H,
    ) -> Result<()> {
        let templates = catalog.templates(stage, command)?;
        self.register_as(stage, command, templates, handler)
    }

    fn register_as<S: AsRef<str>>(
        &mut self,
        source: &str,
        name: &str,
        templates: &[S],
        handler: H,
    ) -> Result<()> {
        if templates.is_empty() {
            return Err(Error::missing_control(source, name));
        }
        if self.commands.iter().any(|c| c.name == name) {
            return Err(Error::new(ErrorKind::DuplicateCommand {
                stage: self.stage.clone(),
                command: name.to_string(),
            }));
        }
        let matcher = compile(templates, &self.ctx).map_err(|invalid| {
            Error::invalid_template(source, name, invalid.template, invalid.error)
        })?;

        debug!(
            stage = %self.stage,
            command = name,
            templates = templates.len(),
            "command registered"
        );
        self.commands.push(Command {
            name: name.to_string(),
            matcher,
            handler,
        });
        Ok(())
    }

    /// Matches `line` against every command.
    #[must_use]
    pub fn dispatch(&self, line: &str) -> Dispatch<H> {
        let mut matches: Vec<(&Command<H>, CaptureSet)> = self
            .commands
            .iter()
            .filter_map(|c| c.matcher.match_line(line).map(|caps| (c, caps)))
            .collect();

        match matches.len() {
            0 => {
                debug!(stage = %self.stage, line, "no command matched");
                Dispatch::Unrecognized
            }
            1 => {
                let (command, captures) = matches.remove(0);
                debug!(stage = %self.stage, command = %command.name, "command matched");
                Dispatch::Matched {
                    name: command.name.clone(),
                    handler: command.handler.clone(),
                    captures,
                }
            }
            _ => {
                let names: Vec<String> = matches.iter().map(|(c, _)| c.name.clone()).collect();
                warn!(stage = %self.stage, line, commands = ?names, "ambiguous command");
                Dispatch::Ambiguous(names)
            }
        }
    }

    /// Iterates over registered command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    /// Looks up a registered command.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command<H>> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
