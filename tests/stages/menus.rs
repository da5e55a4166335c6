//! Main menu, help, and the shared command loop.

use crate::{assert_in_order, play};

#[test]
fn quit_from_main_menu() {
    let (result, out) = play(&["quit"]);
    result.unwrap();
    assert_in_order(&out, &["Welcome, traveller.", "Main menu > quit", "Farewell!"]);
}

#[test]
fn empty_and_unknown_input_reprompt() {
    let (result, out) = play(&["", "dance", "exit"]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Please type a command.",
            "Main menu > dance",
            "What?",
            "Main menu > exit",
            "Farewell!",
        ],
    );
}

#[test]
fn end_of_input_closes_the_game() {
    let (result, out) = play(&[]);
    assert!(result.unwrap_err().is_input_closed());
    assert!(out.contains("Welcome, traveller."));
}

#[test]
fn interactive_help_returns_to_the_menu() {
    let (result, out) = play(&["help", "topics", "read species", "back", "quit"]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Commands are typed as plain phrases",
            "Help > topics",
            "Help topics:",
            "* characters",
            "Help > read species",
            "Species set your starting statistics.",
            "Help > back",
            "Back to the game.",
            "Main menu > quit",
        ],
    );
}

#[test]
fn help_on_a_topic_returns_at_once() {
    let (result, out) = play(&["help backgrounds", "? dragons", "quit"]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Backgrounds adjust statistics",
            "Main menu > ? dragons",
            "There is no help on 'dragons'.",
            "Farewell!",
        ],
    );
}
