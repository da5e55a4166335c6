//! The game's flows.
//!
//! ```text
//! startup ──► main menu ──► party creation ──► main menu
//!                 │               │  └─ call ─► character creation
//!                 └─ call ─► help └─ call ─► help
//! ```
//!
//! Arrows are `ChangeFlow`; `call` runs a sub-flow and resumes the caller
//! when it ends.

pub mod char_creation;
pub mod common;
pub mod help;
pub mod main_menu;
pub mod party_creation;
pub mod startup;

use toi_data::Party;
use toi_foundation::Result;
use tracing::info;

pub use char_creation::CharCreation;
pub use common::{Answer, Handler, Stage, ask_yes_no, ask_yes_no_abort, run_commands};
pub use help::Help;
pub use main_menu::MainMenu;
pub use party_creation::PartyCreation;
pub use startup::Startup;

use crate::context::GameContext;

/// Builds every stage once, compiling all of their grammars.
///
/// # Errors
///
/// Returns the first registration error: a malformed template, a missing
/// command, or a capture the stage cannot resolve.
pub fn check_all(ctx: &GameContext) -> Result<()> {
    MainMenu::new(ctx)?;
    PartyCreation::new(ctx)?;
    CharCreation::new(ctx, Party::shared(""))?;
    Help::new(ctx)?;
    info!("all stage grammars compile");
    Ok(())
}
