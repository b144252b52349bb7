//! Configuration and artifact I/O for data-processing pipeline stages.
//!
//! Every stage of a pipeline does the same handful of file operations:
//!
//! - read YAML configuration ([`io::read_yaml`]) into a [`Document`]
//! - create its output directories ([`io::create_directories`])
//! - save/load structured JSON artifacts ([`io::save_json`], [`io::load_json`])
//! - save/load opaque binary artifacts ([`io::save_bin`], [`io::load_bin`])
//! - report file sizes ([`io::get_size`])
//!
//! The operations are independent, synchronous, and stateless. They share
//! [`ArtifactError`] and emit `tracing` events; installing a subscriber is
//! left to the caller (see [`logging`]).

pub mod constants;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod paths;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use document::{Document, Node};
pub use error::{ArtifactError, ErrorKind, LookupError, Result};
