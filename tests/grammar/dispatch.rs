//! Command dispatch.

use std::cell::Cell;
use std::rc::Rc;

use toi_data::{ControlCatalog, GameData, stage};
use toi_foundation::ErrorKind;
use toi_grammar::{CaptureContext, CommandRegistry, Dispatch};

type Counter = Rc<Cell<u32>>;

fn registry() -> CommandRegistry<Counter> {
    CommandRegistry::new("test", CaptureContext::new(Vec::new().into(), Vec::new().into()))
}

fn run(registry: &CommandRegistry<Counter>, line: &str) -> Dispatch<Counter> {
    let outcome = registry.dispatch(line);
    if let Dispatch::Matched { handler, .. } = &outcome {
        handler.set(handler.get() + 1);
    }
    outcome
}

#[test]
fn overlapping_commands_are_ambiguous_and_run_nothing() {
    let look = Counter::default();
    let examine = Counter::default();
    let mut reg = registry();
    reg.register("look", &["look [around]"], Rc::clone(&look)).unwrap();
    reg.register("examine", &["look", "examine"], Rc::clone(&examine))
        .unwrap();

    match run(&reg, "look") {
        Dispatch::Ambiguous(names) => assert_eq!(names, vec!["look", "examine"]),
        _ => panic!("expected an ambiguous outcome"),
    }
    assert_eq!(look.get(), 0);
    assert_eq!(examine.get(), 0);

    assert!(matches!(run(&reg, "look around"), Dispatch::Matched { .. }));
    assert!(matches!(run(&reg, "examine"), Dispatch::Matched { .. }));
    assert_eq!(look.get(), 1);
    assert_eq!(examine.get(), 1);
}

#[test]
fn unrecognized_input_runs_nothing() {
    let quit = Counter::default();
    let mut reg = registry();
    reg.register("quit", &["quit", "exit"], Rc::clone(&quit)).unwrap();

    assert!(matches!(run(&reg, "dance"), Dispatch::Unrecognized));
    assert!(matches!(run(&reg, "quit now"), Dispatch::Unrecognized));
    assert_eq!(quit.get(), 0);
}

#[test]
fn matched_command_reports_name_and_captures() {
    let mut reg = registry();
    reg.register("rename", &["name [the] party {name}"], Counter::default())
        .unwrap();
    match reg.dispatch("name the party Iron Wolves") {
        Dispatch::Matched { name, captures, .. } => {
            assert_eq!(name, "rename");
            assert_eq!(captures.len(), 1);
        }
        _ => panic!("expected a match"),
    }
}

#[test]
fn broken_control_file_fails_at_registration() {
    let catalog = ControlCatalog::new().with_command(stage::MAIN_MENU, "new party", ["new [party"]);
    let mut reg = registry();
    let err = reg
        .register_from(&catalog, stage::MAIN_MENU, "new party", Counter::default())
        .unwrap_err();
    match err.kind {
        ErrorKind::InvalidTemplate {
            stage,
            command,
            template,
            ..
        } => {
            assert_eq!(stage, "main menu");
            assert_eq!(command, "new party");
            assert_eq!(template, "new [party");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn builtin_stage_grammars_do_not_overlap() {
    let data = GameData::builtin().unwrap();
    let ctx = CaptureContext::from_data(&data);
    let mut reg: CommandRegistry<Counter> = CommandRegistry::new(stage::CHAR_CREATION, ctx);
    for command in data.control.commands(stage::CHAR_CREATION) {
        reg.register_from(&data.control, stage::CHAR_CREATION, command, Counter::default())
            .unwrap();
    }

    for line in ["species", "species elf", "bg thief", "backgrounds", "name Ann", "done"] {
        assert!(
            matches!(reg.dispatch(line), Dispatch::Matched { .. }),
            "{line} should match exactly one command"
        );
    }
}
