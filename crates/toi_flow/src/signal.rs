//! Control signals and the values flows pass around.

use std::fmt;

use crate::flow::Flow;

/// A value passed into an entry point or returned from a finished flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowValue {
    /// A number, usually an id.
    Int(i64),
    /// Text, such as a help topic.
    Text(String),
}

impl FlowValue {
    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            FlowValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlowValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowValue::Int(n) => write!(f, "{n}"),
            FlowValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for FlowValue {
    fn from(n: i64) -> Self {
        FlowValue::Int(n)
    }
}

impl From<&str> for FlowValue {
    fn from(s: &str) -> Self {
        FlowValue::Text(s.to_string())
    }
}

impl From<String> for FlowValue {
    fn from(s: String) -> Self {
        FlowValue::Text(s)
    }
}

/// What an entry point asks the controller to do next.
pub enum Signal<C> {
    /// Run the same entry point again, with the same argument.
    Continue,
    /// Replace the running flow. The old flow's state is dropped.
    ChangeFlow {
        /// The flow to run next.
        flow: Box<dyn Flow<C>>,
        /// Which of its entry points to enter.
        entry_point: String,
        /// The entry point's argument, if it takes one.
        arg: Option<FlowValue>,
    },
    /// Finish the running flow, resuming whoever called it.
    EndFlow(Option<FlowValue>),
}

impl<C> Signal<C> {
    /// Builds a [`Signal::ChangeFlow`].
    pub fn change_flow(
        flow: impl Flow<C> + 'static,
        entry_point: impl Into<String>,
        arg: Option<FlowValue>,
    ) -> Self {
        Signal::ChangeFlow {
            flow: Box::new(flow),
            entry_point: entry_point.into(),
            arg,
        }
    }

    /// Builds a [`Signal::EndFlow`] with no value.
    #[must_use]
    pub const fn end() -> Self {
        Signal::EndFlow(None)
    }

    /// Builds a [`Signal::EndFlow`] carrying `value`.
    pub fn end_with(value: impl Into<FlowValue>) -> Self {
        Signal::EndFlow(Some(value.into()))
    }
}

impl<C> fmt::Debug for Signal<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Continue => f.write_str("Continue"),
            Signal::ChangeFlow {
                flow,
                entry_point,
                arg,
            } => f
                .debug_struct("ChangeFlow")
                .field("flow", &flow.name())
                .field("entry_point", entry_point)
                .field("arg", arg)
                .finish(),
            Signal::EndFlow(value) => f.debug_tuple("EndFlow").field(value).finish(),
        }
    }
}
