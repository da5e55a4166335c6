//! Party creation.

use crate::{assert_in_order, play};

#[test]
fn build_a_party_and_return_to_the_menu() {
    let (result, out) = play(&[
        "new party",
        "  iron   wolves ",
        "add",
        "ann",
        "species elf",
        "bg thief",
        "done",
        "list",
        "done",
        "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "What is your party called?",
            "Party: Iron Wolves",
            "A new face approaches.",
            "Species: Wood Elf.",
            "Background: Thief.",
            "Ann joins the party.",
            "Members:",
            "* Ann, Elf Thf",
            "Iron Wolves is complete.",
            "Your party, Iron Wolves, awaits your orders.",
            "Farewell, Iron Wolves!",
        ],
    );
}

#[test]
fn party_name_is_asked_until_given() {
    let (result, out) = play(&["play", "", "   ", "Crows", "quit"]);
    result.unwrap();
    assert_eq!(out.matches("What is your party called?").count(), 3);
    assert!(out.contains("Farewell, Crows!"));
}

#[test]
fn empty_party_cannot_finish() {
    let (result, out) = play(&["new", "Crows", "done", "list", "abort", "quit"]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "A party needs at least one member.",
            "Party: Crows",
            "Nobody has joined yet.",
            "Okay.",
            "Main menu > quit",
            "Farewell!",
        ],
    );
    assert!(!out.contains("awaits your orders"));
}

#[test]
fn rename_delete_and_edit_members() {
    let (result, out) = play(&[
        "new",
        "Wolves",
        "add",
        "bob",
        "species dwarf",
        "bg priest",
        "done",
        "delete bob",
        "maybe",
        "no",
        "rename bob to robert",
        "edit robert",
        "bg ranger",
        "done",
        "list",
        "call the party Grey Wolves",
        "delete robert",
        "y",
        "list",
        "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Bob joins the party.",
            "Really send Bob away?",
            "Please answer yes or no.",
            "Bob stays.",
            "Bob will now be known as Robert.",
            "Robert steps forward.",
            "Background: Ranger.",
            "Robert is ready.",
            "* Robert, Dwa Rng",
            "The party is now called Grey Wolves.",
            "Robert leaves the party.",
            "Party: Grey Wolves",
            "Nobody has joined yet.",
            "Farewell, Grey Wolves!",
        ],
    );
}

#[test]
fn unknown_member_is_reported() {
    let (result, out) = play(&["new", "Wolves", "edit zed", "kick zed", "quit"]);
    result.unwrap();
    assert_eq!(out.matches("There is nobody by that name in the party.").count(), 2);
}

#[test]
fn removed_member_no_longer_resolves() {
    let (result, out) = play(&[
        "new", "Wolves", "add", "cat", "species human", "bg scholar", "done", "remove cat",
        "sure", "edit cat", "quit",
    ]);
    result.unwrap();
    assert_in_order(
        &out,
        &[
            "Cat leaves the party.",
            "Party > edit cat",
            "There is nobody by that name in the party.",
        ],
    );
}
