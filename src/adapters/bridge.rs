//! Bridges between sequences and conventional `Iterator`s
//!
//! The forward bridge turns a cursor into an `Iterator` of `SeqResult<T>`, a
//! pure pass-through. The reverse bridge turns any iterator whose items may be
//! absent (`Option<T>`) or failed (`SeqResult<T>`) back into a cursor, eliding
//! the absent ones.

use crate::cursor::{Cursor, CursorState};
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

// ================================
// Forward bridge
// ================================

/// Conventional iterator over a cursor. Fused after exhaustion or the first
/// error; the cursor is disposed when the iterator drops.
pub struct Results<C: Cursor> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> Results<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }
}

impl<C> Iterator for Results<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = SeqResult<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.advance() {
            Ok(true) => Some(self.cursor.current().cloned()),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<C: Cursor> Drop for Results<C> {
    fn drop(&mut self) {
        self.cursor.dispose();
    }
}

// ================================
// Reverse bridge
// ================================

/// An item of a conventional iterator that may be absent or failed.
pub trait MaybeItem {
    type Value;

    fn into_value(self) -> SeqResult<Option<Self::Value>>;
}

impl<T> MaybeItem for Option<T> {
    type Value = T;

    fn into_value(self) -> SeqResult<Option<T>> {
        Ok(self)
    }
}

impl<T> MaybeItem for SeqResult<T> {
    type Value = T;

    fn into_value(self) -> SeqResult<Option<T>> {
        self.map(Some)
    }
}

/// Cursor over a conventional iterator that skips absent items.
pub struct ElideCursor<I: Iterator>
where
    I::Item: MaybeItem,
{
    iter: Option<I>,
    current: Option<<I::Item as MaybeItem>::Value>,
    state: CursorState,
}

impl<I> ElideCursor<I>
where
    I: Iterator,
    I::Item: MaybeItem,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter: Some(iter),
            current: None,
            state: CursorState::BeforeFirst,
        }
    }
}

impl<I> Cursor for ElideCursor<I>
where
    I: Iterator,
    I::Item: MaybeItem,
{
    type Item = <I::Item as MaybeItem>::Value;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let iter = match self.iter.as_mut() {
            Some(iter) => iter,
            None => return Ok(false),
        };

        for item in iter {
            if let Some(value) = item.into_value()? {
                self.current = Some(value);
                self.state = CursorState::Positioned;
                return Ok(true);
            }
        }

        self.current = None;
        self.state = CursorState::Exhausted;
        Ok(false)
    }

    fn current(&self) -> SeqResult<&Self::Item> {
        self.state.ensure_positioned()?;
        self.current
            .as_ref()
            .ok_or(SeqError::InvalidState(self.state))
    }

    fn dispose(&mut self) {
        self.iter = None;
        self.current = None;
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

/// Sequence over a cloneable conventional collection whose items may be
/// absent. Every cursor iterates a fresh clone of the collection.
#[derive(Debug, Clone)]
pub struct NotNull<I> {
    source: I,
}

impl<I> NotNull<I> {
    pub fn new(source: I) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I> Sequence for NotNull<I>
where
    I: IntoIterator + Clone,
    I::Item: MaybeItem,
{
    type Item = <I::Item as MaybeItem>::Value;
    type Cursor = ElideCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        ElideCursor::new(self.source.clone().into_iter())
    }
}

/// Extension trait adding `.not_null()` to conventional collections.
pub trait NotNullExt: IntoIterator + Clone + Sized
where
    Self::Item: MaybeItem,
{
    fn not_null(self) -> NotNull<Self> {
        NotNull::new(self)
    }
}

impl<I> NotNullExt for I
where
    I: IntoIterator + Clone,
    I::Item: MaybeItem,
{
}
