//! The cursor half of the sequence contract and its lifecycle state machine

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::error::{SeqError, SeqResult};

/// Lifecycle of a cursor.
///
/// `current()` is only valid in `Positioned`. `Exhausted` and `Disposed` are
/// terminal: every later `advance()` reports "no more elements".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    BeforeFirst,
    Positioned,
    Exhausted,
    Disposed,
}

impl CursorState {
    /// True once no further element can be produced.
    pub fn is_finished(self) -> bool {
        matches!(self, CursorState::Exhausted | CursorState::Disposed)
    }

    /// Fails with `InvalidState` unless positioned on an element.
    pub fn ensure_positioned(self) -> SeqResult<()> {
        match self {
            CursorState::Positioned => Ok(()),
            other => Err(SeqError::InvalidState(other)),
        }
    }
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorState::BeforeFirst => write!(f, "before the first advance"),
            CursorState::Positioned => write!(f, "while positioned"),
            CursorState::Exhausted => write!(f, "after the last element"),
            CursorState::Disposed => write!(f, "after disposal"),
        }
    }
}

/// A stateful position in a sequence.
pub trait Cursor {
    type Item;

    /// Move to the next element. `Ok(false)` means the sequence is exhausted.
    fn advance(&mut self) -> SeqResult<bool>;

    /// The element the cursor is positioned on.
    fn current(&self) -> SeqResult<&Self::Item>;

    /// Release held resources. Idempotent.
    fn dispose(&mut self);

    fn state(&self) -> CursorState;
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> SeqResult<bool> {
        (**self).advance()
    }

    fn current(&self) -> SeqResult<&Self::Item> {
        (**self).current()
    }

    fn dispose(&mut self) {
        (**self).dispose()
    }

    fn state(&self) -> CursorState {
        (**self).state()
    }
}

/// Cursor of the empty sequence: the first advance reports exhaustion.
pub struct EmptyCursor<T> {
    state: CursorState,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> EmptyCursor<T> {
    pub fn new() -> Self {
        Self {
            state: CursorState::BeforeFirst,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state != CursorState::Disposed {
            self.state = CursorState::Exhausted;
        }
        Ok(false)
    }

    fn current(&self) -> SeqResult<&T> {
        Err(SeqError::InvalidState(self.state))
    }

    fn dispose(&mut self) {
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

/// Cursor over a sequence that may itself be absent.
pub enum MaybeCursor<C: Cursor> {
    Present(C),
    Absent(EmptyCursor<C::Item>),
}

impl<C: Cursor> Cursor for MaybeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> SeqResult<bool> {
        match self {
            MaybeCursor::Present(cursor) => cursor.advance(),
            MaybeCursor::Absent(cursor) => cursor.advance(),
        }
    }

    fn current(&self) -> SeqResult<&Self::Item> {
        match self {
            MaybeCursor::Present(cursor) => cursor.current(),
            MaybeCursor::Absent(cursor) => cursor.current(),
        }
    }

    fn dispose(&mut self) {
        match self {
            MaybeCursor::Present(cursor) => cursor.dispose(),
            MaybeCursor::Absent(cursor) => cursor.dispose(),
        }
    }

    fn state(&self) -> CursorState {
        match self {
            MaybeCursor::Present(cursor) => cursor.state(),
            MaybeCursor::Absent(cursor) => cursor.state(),
        }
    }
}

/// Scoped cursor acquisition: the cursor is disposed when the guard drops,
/// on every exit path including early returns and `?`.
pub struct CursorGuard<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> CursorGuard<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        self.cursor.dispose();
    }
}
