//! A caller's state survives the sub-flows it calls.

use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal, call};
use toi_foundation::{ErrorKind, Result};

/// Everything the flows did, in order.
type Log = Vec<String>;

/// Calls `Doubler` a few times from inside a loop, keeping a running total.
struct Parent {
    rounds: i64,
    results: Vec<i64>,
}

impl Parent {
    const ENTRIES: EntryTable<Self, Log> = &[("start", EntryPoint::Nullary(Self::start))];
    const ENTRY_POINTS: EntryPoints<Self, Log> = EntryPoints::new("parent", Self::ENTRIES);

    fn start(&mut self, log: &mut Log) -> Result<Signal<Log>> {
        let mut counter = 0;
        while counter < self.rounds {
            counter += 1;
            let child = Box::new(Doubler { scratch: 0 });
            let value = call(child, "double", Some(FlowValue::Int(counter)), log)?;
            log.push(format!("parent resumed at {counter}"));
            self.results.push(value.and_then(|v| v.as_int()).unwrap_or(-1));
        }
        let total: i64 = self.results.iter().sum();
        Ok(Signal::end_with(total))
    }
}

impl Flow<Log> for Parent {
    fn name(&self) -> &'static str {
        Self::ENTRY_POINTS.flow()
    }

    fn enter(&mut self, log: &mut Log, entry: &str, arg: Option<FlowValue>) -> Result<Signal<Log>> {
        Self::ENTRY_POINTS.invoke(self, log, entry, arg)
    }
}

/// Doubles its argument, looping through `Continue` to get there.
struct Doubler {
    scratch: i64,
}

impl Doubler {
    const ENTRIES: EntryTable<Self, Log> = &[("double", EntryPoint::Unary(Self::double))];
    const ENTRY_POINTS: EntryPoints<Self, Log> = EntryPoints::new("doubler", Self::ENTRIES);

    fn double(&mut self, log: &mut Log, n: FlowValue) -> Result<Signal<Log>> {
        let n = n.as_int().unwrap_or_default();
        self.scratch += n;
        if self.scratch < 2 * n {
            log.push(format!("doubler at {}", self.scratch));
            return Ok(Signal::Continue);
        }
        Ok(Signal::end_with(self.scratch))
    }
}

impl Flow<Log> for Doubler {
    fn name(&self) -> &'static str {
        Self::ENTRY_POINTS.flow()
    }

    fn enter(&mut self, log: &mut Log, entry: &str, arg: Option<FlowValue>) -> Result<Signal<Log>> {
        Self::ENTRY_POINTS.invoke(self, log, entry, arg)
    }
}

#[test]
fn sub_flow_value_reaches_the_call_site() {
    let mut log = Log::new();
    let parent = Box::new(Parent {
        rounds: 3,
        results: Vec::new(),
    });
    let total = call(parent, "start", None, &mut log).unwrap();
    assert_eq!(total, Some(FlowValue::Int(2 + 4 + 6)));
}

#[test]
fn caller_resumes_right_after_the_call() {
    let mut log = Log::new();
    let parent = Box::new(Parent {
        rounds: 2,
        results: Vec::new(),
    });
    call(parent, "start", None, &mut log).unwrap();
    assert_eq!(
        log,
        vec![
            "doubler at 1",
            "parent resumed at 1",
            "doubler at 2",
            "parent resumed at 2",
        ]
    );
}

#[test]
fn wrong_arity_is_reported_with_its_frame() {
    let mut log = Log::new();
    let err = call(Box::new(Doubler { scratch: 0 }), "double", None, &mut log).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EntryPointArity {
            expected: 1,
            actual: 0,
            ..
        }
    ));
    let stack = err.context.map(|c| c.stack).unwrap_or_default();
    assert_eq!(stack, vec!["doubler/double"]);
}
