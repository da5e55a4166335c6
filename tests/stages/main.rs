//! Integration tests for the game stages.
//!
//! Each test plays a scripted session through the real flows and data, and
//! checks what the player would have seen.

mod characters;
mod menus;
mod party;

use std::rc::Rc;

use toi_data::GameData;
use toi_flow::FlowController;
use toi_foundation::Result;
use toi_runtime::stages::Startup;
use toi_runtime::{GameContext, GameIo, ScriptedEditor, SharedBuffer};

/// Plays `lines` from startup, returning how the game ended and its output.
pub fn play(lines: &[&str]) -> (Result<()>, String) {
    let out = SharedBuffer::new();
    let io = GameIo::new(ScriptedEditor::new(lines.iter().copied()), out.clone())
        .with_page_lines(None)
        .with_echo(true);
    let data = Rc::new(GameData::builtin().unwrap());
    let mut controller = FlowController::new(GameContext::new(io, data));
    let result = controller.run(Startup, "start");
    controller.context_mut().io.flush().unwrap();
    (result, out.contents())
}

/// Asserts that `needles` appear in `haystack` in order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut rest = haystack;
    for needle in needles {
        match rest.find(needle) {
            Some(at) => rest = &rest[at + needle.len()..],
            None => panic!("missing {needle:?} (in order) in:\n{haystack}"),
        }
    }
}
