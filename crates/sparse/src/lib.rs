//! An incremental, event-driven parser for Sparse documents.
//!
//! Sparse is a small nested name/value format:
//!
//! ```text
//! # window settings
//! window {
//!     title Main window
//!     size { width 640; height 480 }
//!     resizable
//! }
//! ```
//!
//! The [`Parser`] accepts input in chunks and reports names, values and node
//! boundaries to a [`Handler`]. It builds no tree of its own; that is left to
//! the handler. Every value is raw text.
//!
//! ```rust
//! use sparse::{Event, ParserOptions, parse_events};
//!
//! let events = parse_events("size { width 640 }\nresizable\n", ParserOptions::default())?;
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::name("size"),
//!         Event::NodeOpen,
//!         Event::name("width"),
//!         Event::value("640"),
//!         Event::NodeClose,
//!         Event::name("resizable"),
//!         Event::value(""),
//!     ]
//! );
//! # Ok::<(), sparse::ParserError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod escape;
mod trace;

mod error;
mod event;
mod handler;
mod options;
mod parser;
mod position;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use error::{ErrorKind, ParserError};
pub use event::Event;
pub use handler::Handler;
pub use options::ParserOptions;
pub use parser::Parser;
pub use position::Position;

/// Parses a complete document and returns the handler.
///
/// # Errors
///
/// Returns the first syntax error in `input`.
pub fn parse_str<H: Handler>(
    input: &str,
    options: ParserOptions,
    handler: H,
) -> Result<H, ParserError> {
    let mut parser = Parser::new(handler, options);
    parser.feed(input)?;
    parser.finalize()?;
    Ok(parser.into_handler())
}

/// Parses a complete document into the list of events it produces.
///
/// # Errors
///
/// Returns the first syntax error in `input`.
pub fn parse_events(input: &str, options: ParserOptions) -> Result<Vec<Event>, ParserError> {
    parse_str(input, options, Vec::new())
}
