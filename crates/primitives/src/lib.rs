//! Core types for translating editor edits: positions, flat offsets and
//! linear text operations.

/// Operation decode and apply errors.
pub mod error;
/// Listener identifiers shared by editor and document contracts.
pub mod ids;
/// Linear retain/insert/delete operations and their wire form.
pub mod operation;
/// Line/column positions and the offset calculator.
pub mod position;
/// Character index and length aliases.
pub mod range;
/// Rope utilities and extensions.
pub mod rope;

pub use error::OperationError;
pub use ids::ListenerId;
pub use operation::{Component, LinearOperation};
pub use position::{LineSource, Position, from_offset, to_offset};
pub use range::{CharIdx, CharLen};
pub use rope::{lines_of, visible_line_count};
pub use ropey::{Rope, RopeSlice};
