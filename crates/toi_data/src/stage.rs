//! Stage names and the data files that back them.

/// Commands and messages shared by every stage.
pub const COMMON: &str = "common";
/// Main menu stage.
pub const MAIN_MENU: &str = "main menu";
/// Party creation stage.
pub const PARTY_CREATION: &str = "party creation";
/// Character creation stage.
pub const CHAR_CREATION: &str = "character creation";
/// Interactive help stage.
pub const HELP: &str = "help";
/// Console messages (pagination).
pub const IO: &str = "io";

/// Stage name -> file stem under `control/`.
pub const CONTROL_FILES: &[(&str, &str)] = &[
    (COMMON, "common"),
    (MAIN_MENU, "main_menu"),
    (PARTY_CREATION, "party_creation"),
    (CHAR_CREATION, "char_creation"),
    (HELP, "help"),
];

/// Stage name -> file stem under `strings/`.
pub const STRING_FILES: &[(&str, &str)] = &[
    (COMMON, "common"),
    (MAIN_MENU, "main_menu"),
    (PARTY_CREATION, "party_creation"),
    (CHAR_CREATION, "char_creation"),
    (HELP, "help"),
    (IO, "io"),
];
