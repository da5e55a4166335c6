//! Capture resolution against live collections.

use std::rc::Rc;

use toi_data::{Background, Party, Species, Stat, Stats};
use toi_grammar::{CaptureContext, CaptureKind, compile};

fn elf() -> Species {
    Species::new("Elf", "El", Stats::new().with(Stat::Dex, 12))
}

fn context() -> CaptureContext {
    let species = vec![Species::new("Human", "Hum", Stats::new()), elf()];
    let backgrounds = vec![Background::new("Thief", "Thf", Stats::new())];
    CaptureContext::new(species.into(), backgrounds.into())
}

#[test]
fn species_capture_present_with_or_without_resolution() {
    let matcher = compile(&["pick {species}"], &context()).unwrap();

    for line in ["pick elf", "pick el", "PICK   El"] {
        let captures = matcher.match_line(line).unwrap();
        assert!(captures.contains(CaptureKind::Species));
        assert_eq!(captures.species(), Some(&elf()));
    }

    let captures = matcher.match_line("pick dwarf").unwrap();
    assert!(captures.contains(CaptureKind::Species));
    assert!(captures.is_unresolved(CaptureKind::Species));
    assert_eq!(captures.species(), None);
}

#[test]
fn capture_needs_some_text() {
    let matcher = compile(&["pick {species}"], &context()).unwrap();
    assert!(matcher.match_line("pick").is_none());
    assert!(matcher.match_line("pick   ").is_none());
}

#[test]
fn absent_optional_capture_leaves_no_key() {
    let matcher = compile(&["help [{topic}]"], &context()).unwrap();
    let captures = matcher.match_line("help").unwrap();
    assert!(!captures.contains(CaptureKind::Topic));

    let captures = matcher.match_line("help  Wood  Elves").unwrap();
    assert_eq!(captures.text(CaptureKind::Topic), Some("wood elves"));
}

#[test]
fn capture_stops_at_following_word() {
    let party = Party::shared("Wolves");
    let ann = party
        .borrow_mut()
        .add("Ann Marie", elf(), Background::new("Thief", "Thf", Stats::new()));
    let ctx = context().with_party(Rc::clone(&party));
    let matcher = compile(&["rename {pc} to {name}"], &ctx).unwrap();

    let captures = matcher.match_line("rename ann marie to Bea").unwrap();
    assert_eq!(captures.character(), Some(ann));
    assert_eq!(captures.text(CaptureKind::Name), Some("bea"));
}

#[test]
fn roster_is_read_at_match_time() {
    let party = Party::shared("Wolves");
    let ctx = context().with_party(Rc::clone(&party));
    let matcher = compile(&["edit {pc}"], &ctx).unwrap();

    let before = matcher.match_line("edit bob").unwrap();
    assert!(before.is_unresolved(CaptureKind::Pc));

    let bob = party
        .borrow_mut()
        .add("Bob", elf(), Background::new("Thief", "Thf", Stats::new()));
    let after = matcher.match_line("edit bob").unwrap();
    assert_eq!(after.character(), Some(bob));

    party.borrow_mut().remove(bob);
    let removed = matcher.match_line("edit bob").unwrap();
    assert!(removed.is_unresolved(CaptureKind::Pc));
}

#[test]
fn aliases_resolve_characters() {
    let party = Party::shared("Wolves");
    let id = party
        .borrow_mut()
        .add("Aragorn Son Of Arathorn", elf(), Background::new("Thief", "Thf", Stats::new()));
    let matcher = compile(&["edit {pc}"], &context().with_party(Rc::clone(&party))).unwrap();

    assert_eq!(matcher.match_line("edit aragorn").unwrap().character(), Some(id));

    if let Some(pc) = party.borrow_mut().get_mut(id) {
        pc.add_alias("Strider");
    }
    assert_eq!(matcher.match_line("edit strider").unwrap().character(), Some(id));
}
