//! Map adapters: infallible selectors and fallible, fault-swallowing ones
use std::sync::Arc;

use crate::cursor::{Cursor, CursorState};
use crate::error::{Fault, SeqError, SeqResult, SwallowPolicy};
use crate::sequence::Sequence;

// ================================
// Map
// ================================

/// Applies a selector to every upstream element, eliding `None` results.
pub struct Map<S, F> {
    source: S,
    selector: Arc<F>,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector: Arc::new(selector),
        }
    }
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            selector: Arc::clone(&self.selector),
        }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Option<U>,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            source: Some(self.source.cursor()),
            selector: Arc::clone(&self.selector),
            current: None,
            state: CursorState::BeforeFirst,
        }
    }
}

pub struct MapCursor<C, F, U> {
    source: Option<C>,
    selector: Arc<F>,
    current: Option<U>,
    state: CursorState,
}

impl<C, F, U> Cursor for MapCursor<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(false),
        };

        while source.advance()? {
            if let Some(mapped) = (*self.selector)(source.current()?) {
                self.current = Some(mapped);
                self.state = CursorState::Positioned;
                return Ok(true);
            }
        }

        self.current = None;
        self.state = CursorState::Exhausted;
        Ok(false)
    }

    fn current(&self) -> SeqResult<&U> {
        self.state.ensure_positioned()?;
        self.current
            .as_ref()
            .ok_or(SeqError::InvalidState(self.state))
    }

    fn dispose(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.dispose();
        }
        self.current = None;
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

// ================================
// TryMap
// ================================

/// Applies a fallible selector. Faults the policy swallows are treated like a
/// `None` result; every other fault is returned from `advance()`.
pub struct TryMap<S, F> {
    source: S,
    selector: Arc<F>,
    policy: Arc<SwallowPolicy>,
}

impl<S, F> TryMap<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self::with_policy(source, SwallowPolicy::Nothing, selector)
    }

    pub fn with_policy(source: S, policy: SwallowPolicy, selector: F) -> Self {
        Self {
            source,
            selector: Arc::new(selector),
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &SwallowPolicy {
        &self.policy
    }
}

impl<S: Clone, F> Clone for TryMap<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            selector: Arc::clone(&self.selector),
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<S, F, U> Sequence for TryMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Result<Option<U>, Fault>,
{
    type Item = U;
    type Cursor = TryMapCursor<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        TryMapCursor {
            source: Some(self.source.cursor()),
            selector: Arc::clone(&self.selector),
            policy: Arc::clone(&self.policy),
            current: None,
            state: CursorState::BeforeFirst,
        }
    }
}

pub struct TryMapCursor<C, F, U> {
    source: Option<C>,
    selector: Arc<F>,
    policy: Arc<SwallowPolicy>,
    current: Option<U>,
    state: CursorState,
}

impl<C, F, U> Cursor for TryMapCursor<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> Result<Option<U>, Fault>,
{
    type Item = U;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(false),
        };

        while source.advance()? {
            match (*self.selector)(source.current()?) {
                Ok(Some(mapped)) => {
                    self.current = Some(mapped);
                    self.state = CursorState::Positioned;
                    return Ok(true);
                }
                Ok(None) => continue,
                Err(fault) if self.policy.swallows(&fault) => {
                    log::debug!("Swallowed selector fault: {}", fault);
                    continue;
                }
                Err(fault) => return Err(fault.into()),
            }
        }

        self.current = None;
        self.state = CursorState::Exhausted;
        Ok(false)
    }

    fn current(&self) -> SeqResult<&U> {
        self.state.ensure_positioned()?;
        self.current
            .as_ref()
            .ok_or(SeqError::InvalidState(self.state))
    }

    fn dispose(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.dispose();
        }
        self.current = None;
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}
