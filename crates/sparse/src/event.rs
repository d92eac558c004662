//! A recorded form of [`Handler`](crate::Handler) callbacks.
//!
//! `Vec<Event>` implements [`Handler`](crate::Handler), which makes it the
//! simplest way to look at what the parser produces:
//!
//! ```
//! use sparse::{Event, ParserOptions, parse_events};
//!
//! let events = parse_events("a { b c }\n", ParserOptions::default()).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::name("a"),
//!         Event::NodeOpen,
//!         Event::name("b"),
//!         Event::value("c"),
//!         Event::NodeClose,
//!     ]
//! );
//! ```
use alloc::string::String;

/// One parser callback.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// A field or node name; empty for a nameless root node.
    Name(String),
    /// A field value; empty when the field had no value.
    Value(String),
    /// The start of a node's body.
    NodeOpen,
    /// The end of the innermost open node.
    NodeClose,
}

impl Event {
    /// Shorthand for [`Event::Name`].
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Shorthand for [`Event::Value`].
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// Returns the text carried by a `Name` or `Value` event.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Name(s) | Self::Value(s) => Some(s),
            Self::NodeOpen | Self::NodeClose => None,
        }
    }
}
