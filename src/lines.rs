//! Line-oriented text stream as a sequence of lines
//!
//! The reader is consumed as lines are read, so the source is single-pass:
//! a cursor obtained after an earlier cursor drained the reader yields
//! nothing. Lines are not buffered to make later cursors replay them.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::cursor::{Cursor, CursorState};
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;
use crate::sequence_configuration::LineConfig;

/// Sequence of the lines of a `BufRead`, without their terminators.
///
/// The reader is not touched until a cursor advances. Lines end at `\n`, `\r`
/// or `\r\n` (only `\n` when `LineConfig::split_on_carriage_return` is off). An
/// empty line is an element; a trailing terminator does not produce an extra
/// empty line.
pub struct LineSource<R> {
    reader: Arc<Mutex<R>>,
    drained: Arc<AtomicBool>,
    config: LineConfig,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, LineConfig::default())
    }

    pub fn with_config(reader: R, config: LineConfig) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
            drained: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    /// True once some cursor has read to end-of-stream.
    pub fn is_drained(&self) -> bool {
        self.drained.load(Ordering::Acquire)
    }
}

impl<R> Clone for LineSource<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            drained: Arc::clone(&self.drained),
            config: self.config.clone(),
        }
    }
}

impl<R: BufRead> Sequence for LineSource<R> {
    type Item = String;
    type Cursor = LineCursor<R>;

    fn cursor(&self) -> Self::Cursor {
        if self.is_drained() {
            log::debug!("Line source already drained; new cursor will yield no lines");
        }
        LineCursor {
            reader: Some(Arc::clone(&self.reader)),
            drained: Arc::clone(&self.drained),
            split_on_carriage_return: self.config.split_on_carriage_return,
            bytes: Vec::with_capacity(self.config.buffer_capacity),
            line: String::with_capacity(self.config.buffer_capacity),
            state: CursorState::BeforeFirst,
        }
    }
}

pub struct LineCursor<R> {
    reader: Option<Arc<Mutex<R>>>,
    drained: Arc<AtomicBool>,
    split_on_carriage_return: bool,
    bytes: Vec<u8>,
    line: String,
    state: CursorState,
}

impl<R: BufRead> Cursor for LineCursor<R> {
    type Item = String;

    fn advance(&mut self) -> SeqResult<bool> {
        if self.state.is_finished() {
            return Ok(false);
        }
        let reader = match self.reader.as_ref() {
            Some(reader) => reader,
            None => return Ok(false),
        };
        let mut reader = reader
            .lock()
            .map_err(|_| SeqError::Io("line reader lock poisoned".to_string()))?;

        self.bytes.clear();
        let split = self.split_on_carriage_return;
        let found = read_until_terminator(&mut *reader, &mut self.bytes, split).map_err(|err| {
            log::error!("Error reading line: {}", err);
            SeqError::from(err)
        })?;

        if !found {
            self.drained.store(true, Ordering::Release);
            self.state = CursorState::Exhausted;
            return Ok(false);
        }

        let text = std::str::from_utf8(&self.bytes).map_err(|err| {
            log::error!("Line is not valid UTF-8: {}", err);
            SeqError::Io(format!("stream did not contain valid UTF-8: {}", err))
        })?;
        self.line.clear();
        self.line.push_str(text);
        self.state = CursorState::Positioned;
        Ok(true)
    }

    fn current(&self) -> SeqResult<&String> {
        self.state.ensure_positioned()?;
        Ok(&self.line)
    }

    fn dispose(&mut self) {
        self.reader = None;
        self.bytes = Vec::new();
        self.line = String::new();
        self.state = CursorState::Disposed;
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

/// Appends the bytes of the next line to `line`, without its terminator.
///
/// A line ends at `\n`; with `split_on_carriage_return` it also ends at a
/// lone `\r` or at `\r\n`. Returns `false` only when the reader was already
/// at end-of-stream.
fn read_until_terminator<R: BufRead + ?Sized>(
    reader: &mut R,
    line: &mut Vec<u8>,
    split_on_carriage_return: bool,
) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        let terminator = available
            .iter()
            .position(|b| *b == b'\n' || (split_on_carriage_return && *b == b'\r'));
        match terminator {
            Some(at) => {
                let carriage_return = available[at] == b'\r';
                line.extend_from_slice(&available[..at]);
                reader.consume(at + 1);
                if carriage_return {
                    skip_line_feed(reader)?;
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

// `\r\n` is one terminator even when the buffer boundary falls between them
fn skip_line_feed<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(available) => {
                if available.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Extension trait adding `.to_lines()` to buffered readers.
pub trait ReadLinesExt: BufRead + Sized {
    fn to_lines(self) -> LineSource<Self> {
        LineSource::new(self)
    }

    fn to_lines_with(self, config: LineConfig) -> LineSource<Self> {
        LineSource::with_config(self, config)
    }
}

impl<R: BufRead> ReadLinesExt for R {}
