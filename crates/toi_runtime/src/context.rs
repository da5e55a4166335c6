//! The context every stage receives.

use std::rc::Rc;

use toi_data::{GameData, SharedParty, stage};
use toi_foundation::Result;
use toi_grammar::CaptureContext;

use crate::io::GameIo;

/// I/O, game data, and the session's party.
///
/// Passed explicitly to every flow and handler; nothing reaches game state
/// any other way.
pub struct GameContext {
    /// The console port.
    pub io: GameIo,
    /// Read-only game data.
    pub data: Rc<GameData>,
    /// The party being built or played, once there is one.
    pub party: Option<SharedParty>,
}

impl GameContext {
    /// Creates a context with no party. The continue prompt is taken from
    /// the data's console messages when present.
    #[must_use]
    pub fn new(io: GameIo, data: Rc<GameData>) -> Self {
        let io = match data.strings.get(stage::IO, "continue") {
            Ok(prompt) => io.with_continue_prompt(prompt),
            Err(_) => io,
        };
        Self {
            io,
            data,
            party: None,
        }
    }

    /// A capture context over this data set's species and backgrounds.
    #[must_use]
    pub fn captures(&self) -> CaptureContext {
        CaptureContext::from_data(&self.data)
    }

    /// Looks up a message.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the message is absent.
    pub fn text(&self, stage: &str, key: &str) -> Result<&str> {
        self.data.strings.get(stage, key)
    }

    /// Says a message.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the message is absent.
    pub fn say(&mut self, stage: &str, key: &str) -> Result<()> {
        let text = self.data.strings.get(stage, key)?;
        self.io.say(text);
        Ok(())
    }

    /// Says a message with `{placeholder}`s filled in.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the message is absent.
    pub fn say_with(&mut self, stage: &str, key: &str, values: &[(&str, &str)]) -> Result<()> {
        let text = self.data.strings.format(stage, key, values)?;
        self.io.say(&text);
        Ok(())
    }

    /// Says one list item, prefixed with the list leader.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the leader message is absent.
    pub fn say_item(&mut self, item: &str) -> Result<()> {
        let leader = self.data.strings.get(stage::COMMON, "list leader")?;
        self.io.say(&format!("{leader}{item}"));
        Ok(())
    }

    /// Asks using a message as the prompt.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the prompt is absent, or the errors of
    /// [`GameIo::ask`].
    pub fn ask(&mut self, stage: &str, key: &str) -> Result<String> {
        let prompt = self.data.strings.get(stage, key)?;
        self.io.ask(prompt)
    }

    /// The party's name, if there is a party.
    #[must_use]
    pub fn party_name(&self) -> Option<String> {
        self.party
            .as_ref()
            .map(|party| party.borrow().name().to_string())
    }
}
