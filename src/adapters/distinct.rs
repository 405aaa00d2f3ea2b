//! Distinct adapters, delegating to itertools' `unique` through the bridges.
//! The seen-set grows with every distinct element for the life of the cursor.
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use itertools::{Itertools, Unique};

use crate::adapters::bridge::{ElideCursor, MaybeItem, Results};
use crate::cursor::Cursor;
use crate::error::SeqResult;
use crate::sequence::Sequence;

/// Each element on its first occurrence, by the element's own equality.
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    source: S,
}

impl<S> Distinct<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;
    type Cursor = ElideCursor<Unique<Results<S::Cursor>>>;

    fn cursor(&self) -> Self::Cursor {
        ElideCursor::new(Results::new(self.source.cursor()).unique())
    }
}

/// Upstream element paired with its projected key. Equality and hashing see
/// only the key, so itertools' `unique` deduplicates by key.
#[derive(Debug, Clone)]
pub struct Keyed<K, T> {
    key: SeqResult<K>,
    item: SeqResult<T>,
}

impl<K: PartialEq, T> PartialEq for Keyed<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, T> Eq for Keyed<K, T> {}

impl<K: Hash, T> Hash for Keyed<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K, T> MaybeItem for Keyed<K, T> {
    type Value = T;

    fn into_value(self) -> SeqResult<Option<T>> {
        self.item.map(Some)
    }
}

/// Forward bridge that tags every element with its key.
pub struct KeyedResults<C: Cursor, F> {
    results: Results<C>,
    key: Arc<F>,
}

impl<C, F, K> Iterator for KeyedResults<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> K,
{
    type Item = Keyed<K, C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.results.next()?;
        let key = match &item {
            Ok(value) => Ok((*self.key)(value)),
            Err(err) => Err(err.clone()),
        };
        Some(Keyed { key, item })
    }
}

/// Each element whose projected key has not been seen yet.
pub struct DistinctBy<S, F> {
    source: S,
    key: Arc<F>,
}

impl<S, F> DistinctBy<S, F> {
    pub fn new(source: S, key: F) -> Self {
        Self {
            source,
            key: Arc::new(key),
        }
    }
}

impl<S: Clone, F> Clone for DistinctBy<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            key: Arc::clone(&self.key),
        }
    }
}

impl<S, F, K> Sequence for DistinctBy<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> K,
    K: Clone + Eq + Hash,
{
    type Item = S::Item;
    type Cursor = ElideCursor<Unique<KeyedResults<S::Cursor, F>>>;

    fn cursor(&self) -> Self::Cursor {
        let keyed = KeyedResults {
            results: Results::new(self.source.cursor()),
            key: Arc::clone(&self.key),
        };
        ElideCursor::new(keyed.unique())
    }
}
