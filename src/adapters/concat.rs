//! Concat adapter, delegating to `Iterator::chain` through the bridges
use std::iter::Chain;

use crate::adapters::bridge::{ElideCursor, Results};
use crate::sequence::Sequence;

/// Every element of `first`, then every element of `second`.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
{
    type Item = A::Item;
    type Cursor = ElideCursor<Chain<Results<A::Cursor>, Results<B::Cursor>>>;

    fn cursor(&self) -> Self::Cursor {
        let first = Results::new(self.first.cursor());
        let second = Results::new(self.second.cursor());
        ElideCursor::new(first.chain(second))
    }

    fn fast_len(&self) -> Option<usize> {
        Some(self.first.fast_len()? + self.second.fast_len()?)
    }
}
