//! `ChangeFlow` chains and the outermost flow.

use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowController, FlowValue, Signal};
use toi_foundation::{Error, ErrorKind, Result};

/// Hands over to the next leg until `legs` is zero, recording each hop.
struct Leg {
    legs: u32,
    payload: Option<i64>,
}

impl Leg {
    const ENTRIES: EntryTable<Self, Vec<u32>> = &[
        ("run", EntryPoint::Nullary(Self::run)),
        ("fail", EntryPoint::Nullary(Self::fail)),
    ];
    const ENTRY_POINTS: EntryPoints<Self, Vec<u32>> = EntryPoints::new("leg", Self::ENTRIES);

    fn run(&mut self, hops: &mut Vec<u32>) -> Result<Signal<Vec<u32>>> {
        hops.push(self.legs);
        if self.legs == 0 {
            return Ok(Signal::EndFlow(self.payload.map(FlowValue::Int)));
        }
        let next = Leg {
            legs: self.legs - 1,
            payload: self.payload,
        };
        Ok(Signal::change_flow(next, "run", None))
    }

    fn fail(&mut self, _: &mut Vec<u32>) -> Result<Signal<Vec<u32>>> {
        Err(Error::internal("leg gave out"))
    }
}

impl Flow<Vec<u32>> for Leg {
    fn name(&self) -> &'static str {
        Self::ENTRY_POINTS.flow()
    }

    fn enter(
        &mut self,
        hops: &mut Vec<u32>,
        entry: &str,
        arg: Option<FlowValue>,
    ) -> Result<Signal<Vec<u32>>> {
        Self::ENTRY_POINTS.invoke(self, hops, entry, arg)
    }
}

#[test]
fn change_flow_replaces_until_the_end() {
    let mut controller = FlowController::new(Vec::new());
    controller
        .run(
            Leg {
                legs: 3,
                payload: None,
            },
            "run",
        )
        .unwrap();
    assert_eq!(controller.into_context(), vec![3, 2, 1, 0]);
}

#[test]
fn value_with_no_caller_is_misrouted() {
    let mut controller = FlowController::new(Vec::new());
    let err = controller
        .run(
            Leg {
                legs: 1,
                payload: Some(7),
            },
            "run",
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SignalMisrouted(_)));
}

#[test]
fn unknown_entry_point_is_an_error() {
    let mut controller = FlowController::new(Vec::new());
    let err = controller
        .run(
            Leg {
                legs: 0,
                payload: None,
            },
            "sprint",
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownEntryPoint { .. }));
}

#[test]
fn entry_point_errors_propagate() {
    let mut controller = FlowController::new(Vec::new());
    let err = controller
        .run(
            Leg {
                legs: 0,
                payload: None,
            },
            "fail",
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(controller.context().is_empty());
}
