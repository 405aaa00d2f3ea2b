//! Materialized, growable list that is itself a sequence

use std::ops::Deref;
use std::sync::Arc;

use crate::cursor::{Cursor, CursorState};
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Ordered list of non-absent elements.
///
/// Cloning is cheap: clones share storage until one of them is pushed to.
/// As a sequence it reports its length without draining.
#[derive(Debug)]
pub struct SeqList<T> {
    items: Arc<Vec<T>>,
}

impl<T> SeqList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Arc::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> SeqList<T> {
    pub fn push(&mut self, item: T) {
        Arc::make_mut(&mut self.items).push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.items).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Clone for SeqList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SeqList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> PartialEq for SeqList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SeqList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.items == *other
    }
}

impl<T> From<Vec<T>> for SeqList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

impl<T> FromIterator<T> for SeqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Sequence for SeqList<T> {
    type Item = T;
    type Cursor = ListCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ListCursor {
            items: Some(Arc::clone(&self.items)),
            next: 0,
            state: CursorState::BeforeFirst,
        }
    }

    fn fast_len(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// Cursor over a `SeqList` snapshot.
pub struct ListCursor<T> {
    items: Option<Arc<Vec<T>>>,
    next: usize,
    state: CursorState,
}

impl<T> Cursor for ListCursor<T> {
    type Item = T;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let len = self.items.as_ref().map_or(0, |items| items.len());
        if self.next < len {
            self.next += 1;
            self.state = CursorState::Positioned;
            Ok(true)
        } else {
            self.state = CursorState::Exhausted;
            Ok(false)
        }
    }

    fn current(&self) -> SeqResult<&T> {
        self.state.ensure_positioned()?;
        self.items
            .as_ref()
            .and_then(|items| items.get(self.next - 1))
            .ok_or(SeqError::InvalidState(self.state))
    }

    fn dispose(&mut self) {
        self.items = None;
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}
