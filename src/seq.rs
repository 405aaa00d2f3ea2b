//! Sequence constructors and lazy operators
//!
//! This module provides the free-function form of every source and adapter.
//! `SequenceExt` offers the same operators as methods.

use std::hash::Hash;
use std::io::BufRead;

use crate::adapters::{
    Concat, Distinct, DistinctBy, Filter, FlatMap, Map, MaybeItem, NotNull, TryMap,
};
use crate::error::{Fault, SwallowPolicy};
use crate::lines::LineSource;
use crate::list::SeqList;
use crate::sequence::{Empty, Sequence};
use crate::sequence_configuration::LineConfig;

// ================================
// Sources
// ================================

/// The sequence that never yields an element
pub fn empty<T>() -> Empty<T> {
    Empty::INSTANCE
}

/// A materialized sequence over the given values
pub fn from_values<T>(values: Vec<T>) -> SeqList<T> {
    SeqList::from(values)
}

/// A sequence over a conventional collection, eliding absent items
///
/// # Examples
/// ```
/// use nonnull_seq::{not_null, SequenceExt};
///
/// let names = not_null(vec![Some("foo"), None, Some("bar")]);
/// assert_eq!(names.to_list().unwrap(), vec!["foo", "bar"]);
/// ```
pub fn not_null<I>(source: I) -> NotNull<I>
where
    I: IntoIterator + Clone,
    I::Item: MaybeItem,
{
    NotNull::new(source)
}

/// The lines of a buffered reader. Single-pass; see [`LineSource`].
pub fn lines<R: BufRead>(reader: R) -> LineSource<R> {
    LineSource::new(reader)
}

pub fn lines_with<R: BufRead>(reader: R, config: LineConfig) -> LineSource<R> {
    LineSource::with_config(reader, config)
}

// ================================
// Lazy operators
// ================================

/// Transform each element, skipping those the selector maps to `None`
///
/// # Examples
/// ```
/// use nonnull_seq::{from_values, map, SequenceExt};
///
/// let evens_doubled = map(from_values(vec![1, 2, 3, 4, 5]), |x: &i32| {
///     (x % 2 == 0).then(|| x * 2)
/// });
/// assert_eq!(evens_doubled.to_list().unwrap(), vec![4, 8]);
/// ```
pub fn map<S, F, U>(source: S, selector: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Option<U>,
{
    Map::new(source, selector)
}

/// Transform each element with a fallible selector; every fault propagates
pub fn try_map<S, F, U>(source: S, selector: F) -> TryMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Result<Option<U>, Fault>,
{
    TryMap::new(source, selector)
}

/// Transform each element, treating faults the policy names as `None`
pub fn map_swallow<S, F, U>(source: S, policy: SwallowPolicy, selector: F) -> TryMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Result<Option<U>, Fault>,
{
    TryMap::with_policy(source, policy, selector)
}

/// Keep the elements the predicate accepts
pub fn filter<S, F>(source: S, predicate: F) -> Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    Filter::new(source, predicate)
}

/// Flatten the inner sequence of every element, in outer order
pub fn flat_map<S, F, In>(source: S, selector: F) -> FlatMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Option<In>,
    In: Sequence,
{
    FlatMap::new(source, selector)
}

/// All of `first`, then all of `second`; pass `None` for an absent side
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
{
    Concat::new(first, second)
}

/// Each element on its first occurrence only
pub fn distinct<S>(source: S) -> Distinct<S>
where
    S: Sequence,
    S::Item: Clone + Eq + Hash,
{
    Distinct::new(source)
}

/// Each element whose key has not been seen before
pub fn distinct_by<S, F, K>(source: S, key: F) -> DistinctBy<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> K,
    K: Clone + Eq + Hash,
{
    DistinctBy::new(source, key)
}
