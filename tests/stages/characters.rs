//! Character creation, as a sub-flow of party creation.

use crate::{assert_in_order, play};

#[test]
fn done_needs_species_and_background() {
    let (result, out) = play(&[
        "new", "Wolves", "add", "dee", "done", "species hum", "done", "background merc", "done",
        "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Character > done",
            "Choose a species first.",
            "Species: Human.",
            "Character > done",
            "Choose a background first.",
            "Background: Mercenary.",
            "Dee joins the party.",
        ],
    );
}

#[test]
fn unknown_options_are_rejected_by_name() {
    let (result, out) = play(&[
        "new", "Wolves", "add", "eve", "species gnome", "bg bard", "abort", "list", "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "That is not a valid species.",
            "That is not a valid background.",
            "Okay.",
            "Nobody new joins.",
            "Nobody has joined yet.",
        ],
    );
}

#[test]
fn overview_and_option_lists() {
    let (result, out) = play(&[
        "new", "Wolves", "add", "fay", "overview", "species", "bgs", "set species to orc",
        "set bg scholar", "name Fay the Wise", "status", "abort", "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Name: Fay",
            "Species: not selected",
            "Background: not selected",
            "Available species:",
            "* Wood Elf (Elf)",
            "Available backgrounds:",
            "* Thief (Thf)",
            "Species: Orc.",
            "Background: Scholar.",
            "The character is now called Fay The Wise.",
            "Name: Fay The Wise",
            "Species: Orc",
            "Background: Scholar",
            "Stats: str",
        ],
    );
}

#[test]
fn help_inside_a_sub_flow_resumes_it() {
    let (result, out) = play(&[
        "new", "Wolves", "add", "gil", "help characters", "species dwarf", "bg thief", "done",
        "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "While creating a character",
            "Character > species dwarf",
            "Gil joins the party.",
            "Farewell, Wolves!",
        ],
    );
}
