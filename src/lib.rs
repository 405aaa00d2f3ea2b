//! Lazy, composable sequences whose elements are never absent.
//!
//! A [`Sequence`] produces independent [`Cursor`]s. Adapters (map, filter,
//! flat-map, concat, distinct) wrap sequences lazily and skip any result a
//! selector reports as absent (`None`) instead of ending the sequence. Terminal
//! operations drive a cursor and materialize or extract values.
//!
//! ```
//! use nonnull_seq::{not_null, SequenceExt};
//!
//! let words = not_null(vec![Some("zip"), None, Some("zap"), Some("zip")]);
//! let loud = words.distinct().map(|w| Some(w.to_uppercase()));
//! assert_eq!(loud.to_list().unwrap(), vec!["ZIP".to_string(), "ZAP".to_string()]);
//! ```

pub mod adapters;
pub mod aggregate;
pub mod cursor;
pub mod error;
pub mod lines;
pub mod list;
pub mod seq;
pub mod seq_ext;
pub mod sequence;
pub mod sequence_configuration;
pub mod terminal;

// Re-export all constructors and operators at the crate root
pub use seq::*;

pub use adapters::{MaybeItem, NotNull, NotNullExt, Results};
pub use aggregate::{when_all, when_all_blocking};
pub use cursor::{Cursor, CursorGuard, CursorState};
pub use error::{Fault, FaultKind, SeqError, SeqResult, SwallowPolicy};
pub use lines::{LineSource, ReadLinesExt};
pub use list::SeqList;
pub use seq_ext::SequenceExt;
pub use sequence::{Empty, Sequence};
pub use sequence_configuration::{LineConfig, MaterializeConfig};
