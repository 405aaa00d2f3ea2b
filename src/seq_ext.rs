use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::adapters::{Concat, Distinct, DistinctBy, Filter, FlatMap, Map, Results, TryMap};
use crate::error::{Fault, SeqResult, SwallowPolicy};
use crate::list::SeqList;
use crate::seq::{concat, distinct, distinct_by, filter, flat_map, map, map_swallow, try_map};
use crate::sequence::Sequence;
use crate::sequence_configuration::MaterializeConfig;
use crate::terminal;

/// Extension trait providing operators and terminal operations on sequences
///
/// `Option<S>` is itself a sequence, but its inherent `map`/`filter` shadow
/// these methods; use the free functions in [`crate::seq`] for an absent
/// upstream.
pub trait SequenceExt: Sequence + Sized {
    // ================================
    // Lazy operators
    // ================================

    /// Transform each element, skipping those the selector maps to `None`
    fn map<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(&Self::Item) -> Option<U>,
    {
        map(self, selector)
    }

    /// Transform each element with a fallible selector; every fault propagates
    fn try_map<U, F>(self, selector: F) -> TryMap<Self, F>
    where
        F: Fn(&Self::Item) -> Result<Option<U>, Fault>,
    {
        try_map(self, selector)
    }

    /// Transform each element, treating faults the policy names as `None`
    fn map_swallow<U, F>(self, policy: SwallowPolicy, selector: F) -> TryMap<Self, F>
    where
        F: Fn(&Self::Item) -> Result<Option<U>, Fault>,
    {
        map_swallow(self, policy, selector)
    }

    /// Transform each element, treating every fault as `None`
    fn map_swallow_all<U, F>(self, selector: F) -> TryMap<Self, F>
    where
        F: Fn(&Self::Item) -> Result<Option<U>, Fault>,
    {
        map_swallow(self, SwallowPolicy::All, selector)
    }

    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    fn flat_map<In, F>(self, selector: F) -> FlatMap<Self, F>
    where
        F: Fn(&Self::Item) -> Option<In>,
        In: Sequence,
    {
        flat_map(self, selector)
    }

    fn concat<B>(self, second: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone,
    {
        concat(self, second)
    }

    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        distinct(self)
    }

    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item) -> K,
        K: Clone + Eq + Hash,
    {
        distinct_by(self, key)
    }

    /// Bridge to a conventional `Iterator` over `SeqResult<Item>`
    fn results(&self) -> Results<Self::Cursor>
    where
        Self::Item: Clone,
    {
        Results::new(self.cursor())
    }

    // ================================
    // Positional extraction
    // ================================

    fn first(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::first(self)
    }

    fn first_or_default(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        terminal::first_or_default(self)
    }

    fn first_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        terminal::first(&filter(self, predicate))
    }

    fn first_or_default_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone + Default,
    {
        terminal::first_or_default(&filter(self, predicate))
    }

    fn last(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::last(self)
    }

    fn last_or_default(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        terminal::last_or_default(self)
    }

    fn last_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        terminal::last(&filter(self, predicate))
    }

    fn last_or_default_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone + Default,
    {
        terminal::last_or_default(&filter(self, predicate))
    }

    fn single(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::single(self)
    }

    fn single_or_default(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        terminal::single_or_default(self)
    }

    fn single_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        terminal::single(&filter(self, predicate))
    }

    fn single_or_default_where<F>(&self, predicate: F) -> SeqResult<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
        Self::Item: Clone + Default,
    {
        terminal::single_or_default(&filter(self, predicate))
    }

    fn element_at(&self, index: usize) -> SeqResult<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::element_at(self, index)
    }

    fn element_at_or_default(&self, index: usize) -> SeqResult<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        terminal::element_at_or_default(self, index)
    }

    // ================================
    // Counting and existence
    // ================================

    fn count(&self) -> SeqResult<usize> {
        terminal::count(self)
    }

    fn count_where<F>(&self, predicate: F) -> SeqResult<usize>
    where
        F: Fn(&Self::Item) -> bool,
    {
        terminal::count(&filter(self, predicate))
    }

    fn any(&self) -> SeqResult<bool> {
        terminal::any(self)
    }

    fn any_where<F>(&self, predicate: F) -> SeqResult<bool>
    where
        F: Fn(&Self::Item) -> bool,
    {
        terminal::any(&filter(self, predicate))
    }

    // ================================
    // Materializers
    // ================================

    fn to_list(&self) -> SeqResult<SeqList<Self::Item>>
    where
        Self::Item: Clone,
    {
        terminal::to_list(self)
    }

    fn to_list_with(&self, config: &MaterializeConfig) -> SeqResult<SeqList<Self::Item>>
    where
        Self::Item: Clone,
    {
        terminal::to_list_with(self, config)
    }

    fn to_hash_set(&self) -> SeqResult<HashSet<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        terminal::to_hash_set(self)
    }

    fn to_hash_set_with(&self, config: &MaterializeConfig) -> SeqResult<HashSet<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        terminal::to_hash_set_with(self, config)
    }

    fn to_hash_set_by<U, F>(&self, selector: F) -> SeqResult<HashSet<U>>
    where
        F: Fn(&Self::Item) -> Option<U>,
        U: Eq + Hash,
    {
        terminal::to_hash_set_by(self, selector)
    }

    fn to_dictionary<K, V, FK, FV>(
        &self,
        key_selector: FK,
        value_selector: FV,
    ) -> SeqResult<HashMap<K, V>>
    where
        FK: Fn(&Self::Item) -> Option<K>,
        FV: Fn(&Self::Item) -> Option<V>,
        K: Eq + Hash,
    {
        terminal::to_dictionary(self, key_selector, value_selector)
    }
}

impl<S: Sequence + Sized> SequenceExt for S {}
