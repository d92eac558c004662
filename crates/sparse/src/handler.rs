//! The event sink driven by [`Parser`](crate::Parser).
//!
//! A [`Handler`] receives four callbacks, invoked synchronously and in input
//! order:
//!
//! - [`parsed_name`](Handler::parsed_name) when a field name is complete,
//! - [`parsed_value`](Handler::parsed_value) when a field value is complete,
//! - [`node_opened`](Handler::node_opened) after the name of a node, on `{`,
//! - [`node_closed`](Handler::node_closed) on the matching `}`.
//!
//! A leaf statement produces `parsed_name` followed by `parsed_value`. A node
//! produces `parsed_name` followed by `node_opened`, its children, and
//! `node_closed`. A bare name without a value is reported with an empty value;
//! interpreting that (as a flag, say) is up to the handler.
//!
//! None of the methods have default bodies. A handler decides for itself what
//! to do with every event, whether that is building a tree, recording a flat
//! list, or only counting.
//!
//! ```
//! use sparse::{Handler, Parser, ParserOptions};
//!
//! #[derive(Default)]
//! struct Count {
//!     fields: usize,
//!     nodes: usize,
//! }
//!
//! impl Handler for Count {
//!     fn parsed_name(&mut self, _name: String) {}
//!     fn parsed_value(&mut self, _value: String) {
//!         self.fields += 1;
//!     }
//!     fn node_opened(&mut self) {
//!         self.nodes += 1;
//!     }
//!     fn node_closed(&mut self) {}
//! }
//!
//! let mut parser = Parser::new(Count::default(), ParserOptions::default());
//! parser.feed("window { width 640; height 480 }\n").unwrap();
//! parser.finalize().unwrap();
//! let count = parser.into_handler();
//! assert_eq!((count.fields, count.nodes), (2, 1));
//! ```

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::event::Event;

/// Receives the events of a Sparse document as the parser recognises them.
pub trait Handler {
    /// A field or node name was read. Nameless root nodes report an empty
    /// name.
    fn parsed_name(&mut self, name: String);

    /// A field value was read. A name with no value reports an empty value.
    fn parsed_value(&mut self, value: String);

    /// A `{` opened a node named by the preceding `parsed_name`.
    fn node_opened(&mut self);

    /// A `}` closed the innermost open node.
    fn node_closed(&mut self);
}

impl<H: Handler + ?Sized> Handler for &mut H {
    #[inline]
    fn parsed_name(&mut self, name: String) {
        (**self).parsed_name(name);
    }

    #[inline]
    fn parsed_value(&mut self, value: String) {
        (**self).parsed_value(value);
    }

    #[inline]
    fn node_opened(&mut self) {
        (**self).node_opened();
    }

    #[inline]
    fn node_closed(&mut self) {
        (**self).node_closed();
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    #[inline]
    fn parsed_name(&mut self, name: String) {
        (**self).parsed_name(name);
    }

    #[inline]
    fn parsed_value(&mut self, value: String) {
        (**self).parsed_value(value);
    }

    #[inline]
    fn node_opened(&mut self) {
        (**self).node_opened();
    }

    #[inline]
    fn node_closed(&mut self) {
        (**self).node_closed();
    }
}

/// Records every callback as an [`Event`], in order.
impl Handler for Vec<Event> {
    fn parsed_name(&mut self, name: String) {
        self.push(Event::Name(name));
    }

    fn parsed_value(&mut self, value: String) {
        self.push(Event::Value(value));
    }

    fn node_opened(&mut self) {
        self.push(Event::NodeOpen);
    }

    fn node_closed(&mut self) {
        self.push(Event::NodeClose);
    }
}
