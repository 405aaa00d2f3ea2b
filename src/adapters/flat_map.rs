//! FlatMap adapter
use std::marker::PhantomData;
use std::sync::Arc;

use crate::cursor::{Cursor, CursorState};
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Maps every upstream element to an inner sequence and yields the inner
/// elements in order, outer by outer. A `None` inner sequence counts as empty.
pub struct FlatMap<S, F> {
    source: S,
    selector: Arc<F>,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector: Arc::new(selector),
        }
    }
}

impl<S: Clone, F> Clone for FlatMap<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            selector: Arc::clone(&self.selector),
        }
    }
}

impl<S, F, In> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Option<In>,
    In: Sequence,
{
    type Item = In::Item;
    type Cursor = FlatMapCursor<S::Cursor, F, In>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapCursor {
            source: Some(self.source.cursor()),
            selector: Arc::clone(&self.selector),
            inner: None,
            state: CursorState::BeforeFirst,
            _phantom: PhantomData,
        }
    }
}

/// Holds at most one live inner cursor. The current element is owned by it.
pub struct FlatMapCursor<C, F, In: Sequence> {
    source: Option<C>,
    selector: Arc<F>,
    inner: Option<In::Cursor>,
    state: CursorState,
    _phantom: PhantomData<fn() -> In>,
}

impl<C, F, In> Cursor for FlatMapCursor<C, F, In>
where
    C: Cursor,
    F: Fn(&C::Item) -> Option<In>,
    In: Sequence,
{
    type Item = In::Item;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(false),
        };

        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance()? {
                    self.state = CursorState::Positioned;
                    return Ok(true);
                }
                inner.dispose();
                self.inner = None;
            }

            if !source.advance()? {
                self.state = CursorState::Exhausted;
                return Ok(false);
            }
            if let Some(inner) = (*self.selector)(source.current()?) {
                self.inner = Some(inner.cursor());
            }
        }
    }

    fn current(&self) -> SeqResult<&In::Item> {
        self.state.ensure_positioned()?;
        match self.inner.as_ref() {
            Some(inner) => inner.current(),
            None => Err(SeqError::InvalidState(self.state)),
        }
    }

    fn dispose(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.dispose();
        }
        if let Some(mut source) = self.source.take() {
            source.dispose();
        }
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}
