//! Terminal operations: eager consumers that drive a cursor
//!
//! Every operation acquires its cursor through a `CursorGuard`, so the cursor
//! is disposed on every exit path, including errors from upstream.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::cursor::{Cursor, CursorGuard};
use crate::error::{SeqError, SeqResult};
use crate::list::SeqList;
use crate::sequence::Sequence;
use crate::sequence_configuration::MaterializeConfig;

fn scoped<S: Sequence + ?Sized>(source: &S) -> CursorGuard<S::Cursor> {
    CursorGuard::new(source.cursor())
}

// ================================
// Positional extraction
// ================================

/// The first element, or `SeqError::Empty`.
pub fn first<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    first_opt(source)?.ok_or(SeqError::Empty)
}

/// The first element, or the type's default.
pub fn first_or_default<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    Ok(first_opt(source)?.unwrap_or_default())
}

fn first_opt<S>(source: &S) -> SeqResult<Option<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut cursor = scoped(source);
    if cursor.advance()? {
        Ok(Some(cursor.current()?.clone()))
    } else {
        Ok(None)
    }
}

/// The last element, or `SeqError::Empty`. Drains the sequence.
pub fn last<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    last_opt(source)?.ok_or(SeqError::Empty)
}

/// The last element, or the type's default. Drains the sequence.
pub fn last_or_default<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    Ok(last_opt(source)?.unwrap_or_default())
}

fn last_opt<S>(source: &S) -> SeqResult<Option<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut cursor = scoped(source);
    let mut last = None;
    while cursor.advance()? {
        last = Some(cursor.current()?.clone());
    }
    Ok(last)
}

/// The only element. Fails with `Empty` when there is none and with
/// `MoreThanOne` as soon as a second element exists.
pub fn single<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    single_opt(source)?.ok_or(SeqError::Empty)
}

/// The only element, or the type's default when there is none. A second
/// element is still an error.
pub fn single_or_default<S>(source: &S) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    Ok(single_opt(source)?.unwrap_or_default())
}

fn single_opt<S>(source: &S) -> SeqResult<Option<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut cursor = scoped(source);
    if !cursor.advance()? {
        return Ok(None);
    }
    let only = cursor.current()?.clone();
    if cursor.advance()? {
        return Err(SeqError::MoreThanOne);
    }
    Ok(Some(only))
}

/// The element at zero-based `index`, or `SeqError::Empty` when the sequence
/// is shorter.
pub fn element_at<S>(source: &S, index: usize) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    element_at_opt(source, index)?.ok_or(SeqError::Empty)
}

pub fn element_at_or_default<S>(source: &S, index: usize) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    Ok(element_at_opt(source, index)?.unwrap_or_default())
}

fn element_at_opt<S>(source: &S, index: usize) -> SeqResult<Option<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut cursor = scoped(source);
    let mut position = 0;
    while cursor.advance()? {
        if position == index {
            return Ok(Some(cursor.current()?.clone()));
        }
        position += 1;
    }
    Ok(None)
}

// ================================
// Counting and existence
// ================================

/// Number of elements; O(1) when the source reports a fast length.
pub fn count<S: Sequence + ?Sized>(source: &S) -> SeqResult<usize> {
    if let Some(len) = source.fast_len() {
        return Ok(len);
    }
    let mut cursor = scoped(source);
    let mut count = 0;
    while cursor.advance()? {
        count += 1;
    }
    Ok(count)
}

/// Whether the sequence has at least one element. Advances at most once.
pub fn any<S: Sequence + ?Sized>(source: &S) -> SeqResult<bool> {
    let mut cursor = scoped(source);
    cursor.advance()
}

// ================================
// Materializers
// ================================

pub fn to_list<S>(source: &S) -> SeqResult<SeqList<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    to_list_with(source, &MaterializeConfig::default())
}

pub fn to_list_with<S>(source: &S, config: &MaterializeConfig) -> SeqResult<SeqList<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut items = Vec::with_capacity(config.capacity_for(source.fast_len()));
    let mut cursor = scoped(source);
    while cursor.advance()? {
        items.push(cursor.current()?.clone());
    }
    Ok(SeqList::from(items))
}

pub fn to_hash_set<S>(source: &S) -> SeqResult<HashSet<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Eq + Hash,
{
    to_hash_set_with(source, &MaterializeConfig::default())
}

pub fn to_hash_set_with<S>(source: &S, config: &MaterializeConfig) -> SeqResult<HashSet<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Eq + Hash,
{
    let mut set = HashSet::with_capacity(config.capacity_for(source.fast_len()));
    let mut cursor = scoped(source);
    while cursor.advance()? {
        let item = cursor.current()?;
        if !set.contains(item) {
            set.insert(item.clone());
        }
    }
    Ok(set)
}

/// Set of selected values; elements whose selector yields `None` are skipped.
pub fn to_hash_set_by<S, F, U>(source: &S, selector: F) -> SeqResult<HashSet<U>>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> Option<U>,
    U: Eq + Hash,
{
    let mut set = HashSet::new();
    let mut cursor = scoped(source);
    while cursor.advance()? {
        if let Some(value) = selector(cursor.current()?) {
            set.insert(value);
        }
    }
    Ok(set)
}

/// Map built from per-element key and value selectors. An element whose key
/// or value selector yields `None` contributes no entry. A repeated key fails
/// with `SeqError::DuplicateKey`.
pub fn to_dictionary<S, FK, FV, K, V>(
    source: &S,
    key_selector: FK,
    value_selector: FV,
) -> SeqResult<HashMap<K, V>>
where
    S: Sequence + ?Sized,
    FK: Fn(&S::Item) -> Option<K>,
    FV: Fn(&S::Item) -> Option<V>,
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    let mut cursor = scoped(source);
    while cursor.advance()? {
        let item = cursor.current()?;
        let (key, value) = match (key_selector(item), value_selector(item)) {
            (Some(key), Some(value)) => (key, value),
            _ => continue,
        };
        if map.contains_key(&key) {
            log::warn!("Duplicate key while building dictionary");
            return Err(SeqError::DuplicateKey);
        }
        map.insert(key, value);
    }
    Ok(map)
}
