//! Flows and their entry points.

use toi_foundation::{Error, ErrorKind, Result};

use crate::signal::{FlowValue, Signal};

/// A named bundle of entry points sharing state.
///
/// `C` is the context every entry point receives: I/O, game data, and
/// whatever else the flows of an application share.
pub trait Flow<C> {
    /// The flow's name, for logs and errors.
    fn name(&self) -> &'static str;

    /// Runs entry point `entry_point` with `arg`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntryPoint` or `EntryPointArity` if the entry point
    /// does not exist or takes a different number of arguments, plus any
    /// error the entry point itself returns.
    fn enter(
        &mut self,
        ctx: &mut C,
        entry_point: &str,
        arg: Option<FlowValue>,
    ) -> Result<Signal<C>>;
}

/// An entry point function, by arity.
pub enum EntryPoint<F, C> {
    /// Takes no argument.
    Nullary(fn(&mut F, &mut C) -> Result<Signal<C>>),
    /// Takes one argument.
    Unary(fn(&mut F, &mut C, FlowValue) -> Result<Signal<C>>),
}

impl<F, C> EntryPoint<F, C> {
    /// The number of arguments the entry point takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            EntryPoint::Nullary(_) => 0,
            EntryPoint::Unary(_) => 1,
        }
    }
}

// Derives would demand `F: Clone` and `C: Clone`; fn pointers are always Copy.
impl<F, C> Clone for EntryPoint<F, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, C> Copy for EntryPoint<F, C> {}

/// The entry points of one flow type, in declaration order.
pub type EntryTable<F, C> = &'static [(&'static str, EntryPoint<F, C>)];

/// The entry point table of one flow type, with the flow's name.
///
/// Usually declared next to the flow and consulted from [`Flow::enter`]:
///
/// ```
/// use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal};
/// use toi_foundation::Result;
///
/// struct Counter(i64);
///
/// impl Counter {
///     const ENTRIES: EntryTable<Self, ()> = &[
///         ("start", EntryPoint::Nullary(Self::start)),
///         ("resume", EntryPoint::Unary(Self::resume)),
///     ];
///     const ENTRY_POINTS: EntryPoints<Self, ()> = EntryPoints::new("counter", Self::ENTRIES);
///
///     fn start(&mut self, _: &mut ()) -> Result<Signal<()>> {
///         Ok(Signal::end_with(self.0))
///     }
///
///     fn resume(&mut self, _: &mut (), arg: FlowValue) -> Result<Signal<()>> {
///         Ok(Signal::end_with(arg.as_int().unwrap_or_default() + 1))
///     }
/// }
///
/// impl Flow<()> for Counter {
///     fn name(&self) -> &'static str {
///         Self::ENTRY_POINTS.flow()
///     }
///
///     fn enter(&mut self, ctx: &mut (), entry: &str, arg: Option<FlowValue>) -> Result<Signal<()>> {
///         Self::ENTRY_POINTS.invoke(self, ctx, entry, arg)
///     }
/// }
///
/// let value = toi_flow::call(Box::new(Counter(0)), "resume", Some(FlowValue::Int(4)), &mut ()).unwrap();
/// assert_eq!(value, Some(FlowValue::Int(5)));
/// ```
pub struct EntryPoints<F: 'static, C: 'static> {
    flow: &'static str,
    entries: EntryTable<F, C>,
}

impl<F: 'static, C: 'static> EntryPoints<F, C> {
    /// Creates a table for the flow called `flow`.
    #[must_use]
    pub const fn new(flow: &'static str, entries: EntryTable<F, C>) -> Self {
        Self { flow, entries }
    }

    /// The flow's name.
    #[must_use]
    pub const fn flow(&self) -> &'static str {
        self.flow
    }

    /// Iterates over entry point names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Looks up an entry point.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<EntryPoint<F, C>> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, ep)| *ep)
    }

    /// Runs entry point `name` on `flow`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntryPoint` if there is no such entry point and
    /// `EntryPointArity` if `arg` does not fit it; otherwise whatever the
    /// entry point returns.
    pub fn invoke(
        &self,
        flow: &mut F,
        ctx: &mut C,
        name: &str,
        arg: Option<FlowValue>,
    ) -> Result<Signal<C>> {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::unknown_entry_point(self.flow, name))?;
        match (entry, arg) {
            (EntryPoint::Nullary(f), None) => f(flow, ctx),
            (EntryPoint::Unary(f), Some(arg)) => f(flow, ctx, arg),
            (entry, arg) => Err(Error::new(ErrorKind::EntryPointArity {
                flow: self.flow.to_string(),
                entry_point: name.to_string(),
                expected: entry.arity(),
                actual: usize::from(arg.is_some()),
            })),
        }
    }
}
