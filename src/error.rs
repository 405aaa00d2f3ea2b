//! Error types and handling for non-null sequences
//!
//! This module provides the error taxonomy shared by cursors, adapters and
//! terminal operations, plus the policy that decides which selector faults a
//! fault-swallowing map may treat as "no element".

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use crate::cursor::CursorState;

/// Main error type for sequence operations
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SeqError {
    /// `current()` was called while the cursor was not positioned on an element
    #[error("Attempted to access current {0}")]
    InvalidState(CursorState),
    /// A non-defaulting extraction found no element
    #[error("The source sequence is empty")]
    Empty,
    /// A single-element extraction found a second element
    #[error("The input sequence contains more than one element")]
    MoreThanOne,
    /// Two elements produced the same dictionary key
    #[error("An element with the same key has already been added")]
    DuplicateKey,
    /// A selector or predicate fault that was not swallowed
    #[error(transparent)]
    Fault(#[from] Fault),
    /// I/O related errors from an external source
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SeqError {
    fn from(err: std::io::Error) -> Self {
        SeqError::Io(err.to_string())
    }
}

/// Result type for sequence operations
pub type SeqResult<T> = Result<T, SeqError>;

/// Kind of failure a fallible selector can raise
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The element is not acceptable input for the selector
    InvalidInput,
    /// Text could not be parsed into the target type
    Parse,
    /// Arithmetic overflowed or divided by zero
    Overflow,
    /// A lookup keyed by the element found nothing
    NotFound,
    /// The selector touched I/O and it failed
    Io,
    /// Application-defined kind, matched by name
    Custom(String),
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::InvalidInput => write!(f, "invalid input"),
            FaultKind::Parse => write!(f, "parse"),
            FaultKind::Overflow => write!(f, "overflow"),
            FaultKind::NotFound => write!(f, "not found"),
            FaultKind::Io => write!(f, "io"),
            FaultKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A failure raised by a selector while transforming one element
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} fault: {message}")]
pub struct Fault {
    /// What went wrong; swallow policies match on this
    pub kind: FaultKind,
    /// Human-readable detail
    pub message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn custom(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::Custom(name.into()), message)
    }
}

impl From<ParseIntError> for Fault {
    fn from(err: ParseIntError) -> Self {
        Fault::new(FaultKind::Parse, err.to_string())
    }
}

impl From<ParseFloatError> for Fault {
    fn from(err: ParseFloatError) -> Self {
        Fault::new(FaultKind::Parse, err.to_string())
    }
}

impl From<std::io::Error> for Fault {
    fn from(err: std::io::Error) -> Self {
        Fault::new(FaultKind::Io, err.to_string())
    }
}

/// Which selector faults a fault-swallowing map treats as an absent result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwallowPolicy {
    /// Every fault propagates
    Nothing,
    /// Every fault is swallowed
    All,
    /// Only faults of the listed kinds are swallowed
    Kinds(Vec<FaultKind>),
}

impl SwallowPolicy {
    pub fn kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = FaultKind>,
    {
        SwallowPolicy::Kinds(kinds.into_iter().collect())
    }

    pub fn swallows(&self, fault: &Fault) -> bool {
        match self {
            SwallowPolicy::Nothing => false,
            SwallowPolicy::All => true,
            SwallowPolicy::Kinds(kinds) => kinds.contains(&fault.kind),
        }
    }
}

impl Default for SwallowPolicy {
    fn default() -> Self {
        SwallowPolicy::Nothing
    }
}
