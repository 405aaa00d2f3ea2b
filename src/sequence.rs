//! The sequence half of the contract and the empty sequence

use std::marker::PhantomData;

use crate::cursor::{Cursor, EmptyCursor, MaybeCursor};

/// A capability to produce independent cursors over non-absent elements.
///
/// Producing a cursor is side-effect-free and may be repeated; each cursor
/// starts before the first element. A sequence may report a fast length when
/// it already knows its size, which `count()` uses instead of draining.
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;

    /// O(1) length when known without advancing a cursor.
    fn fast_len(&self) -> Option<usize> {
        None
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }

    fn fast_len(&self) -> Option<usize> {
        (**self).fast_len()
    }
}

/// An absent upstream sequence behaves exactly like the empty sequence.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;
    type Cursor = MaybeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        match self {
            Some(source) => MaybeCursor::Present(source.cursor()),
            None => MaybeCursor::Absent(EmptyCursor::new()),
        }
    }

    fn fast_len(&self) -> Option<usize> {
        match self {
            Some(source) => source.fast_len(),
            None => Some(0),
        }
    }
}

/// The stateless sequence that never yields an element.
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub const INSTANCE: Self = Empty {
        _phantom: PhantomData,
    };
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor::new()
    }

    fn fast_len(&self) -> Option<usize> {
        Some(0)
    }
}
