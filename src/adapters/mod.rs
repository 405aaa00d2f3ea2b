//! Lazy sequence adapters
//!
//! Map, filter and flat-map each run their own cursor state machine and elide
//! absent intermediate results. Concat and distinct reuse the bridges to
//! delegate to `Iterator::chain` and itertools' uniqueness filters.

pub mod bridge;
pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flat_map;
pub mod map;

pub use bridge::{ElideCursor, MaybeItem, NotNull, NotNullExt, Results};
pub use concat::Concat;
pub use distinct::{Distinct, DistinctBy};
pub use filter::{Filter, FilterCursor};
pub use flat_map::{FlatMap, FlatMapCursor};
pub use map::{Map, MapCursor, TryMap, TryMapCursor};
