//! Filter adapter
use std::sync::Arc;

use crate::cursor::{Cursor, CursorState};
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Yields the upstream elements the predicate accepts, unchanged.
pub struct Filter<S, F> {
    source: S,
    predicate: Arc<F>,
}

impl<S, F> Filter<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        Self {
            source,
            predicate: Arc::new(predicate),
        }
    }
}

impl<S: Clone, F> Clone for Filter<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            source: Some(self.source.cursor()),
            predicate: Arc::clone(&self.predicate),
            state: CursorState::BeforeFirst,
        }
    }
}

/// The accepted element stays owned by the upstream cursor; `current()`
/// borrows it from there.
pub struct FilterCursor<C, F> {
    source: Option<C>,
    predicate: Arc<F>,
    state: CursorState,
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(false),
        };

        while source.advance()? {
            if (*self.predicate)(source.current()?) {
                self.state = CursorState::Positioned;
                return Ok(true);
            }
        }

        self.state = CursorState::Exhausted;
        Ok(false)
    }

    fn current(&self) -> SeqResult<&C::Item> {
        self.state.ensure_positioned()?;
        match self.source.as_ref() {
            Some(source) => source.current(),
            None => Err(SeqError::InvalidState(self.state)),
        }
    }

    fn dispose(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.dispose();
        }
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}
