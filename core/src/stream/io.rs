// ## Sink / source abstraction for record streams

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;
use tracing::debug;

/// Write-only byte destination for records.
///
/// One writer per sink; the record stream calls `open` once, `append` per
/// record, and `close` on every exit path.
pub trait RecordSink {
    /// Acquire the underlying destination.
    fn open(&mut self) -> io::Result<()>;

    /// Append bytes. Fails if the sink is not open.
    fn append(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Flush and release. Safe to call more than once, and safe to call
    /// after a failed `open`.
    fn close(&mut self) -> io::Result<()>;

    /// Short label for logs.
    fn describe(&self) -> String {
        "sink".into()
    }
}

/// Read-only byte origin for records.
pub trait RecordSource {
    /// Acquire the origin as a buffered reader. The reader is released when dropped.
    fn open(&mut self) -> io::Result<Box<dyn BufRead + Send>>;

    /// Short label for logs.
    fn describe(&self) -> String {
        "source".into()
    }
}

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Bytes),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory(SharedBuffer),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Reader(_) => f.write_str("reader"),
            InputSource::File(p) => write!(f, "file:{}", p.display()),
            InputSource::Memory(b) => write!(f, "memory({} bytes)", b.len()),
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Writer(_) => f.write_str("writer"),
            OutputSink::File(p) => write!(f, "file:{}", p.display()),
            OutputSink::Memory(_) => f.write_str("memory"),
        }
    }
}

/// Normalize input source into a buffered reader
pub fn open_input(src: InputSource) -> io::Result<Box<dyn BufRead + Send>> {
    let reader: Box<dyn BufRead + Send> = match src {
        InputSource::Reader(r) => Box::new(BufReader::new(r)),
        InputSource::File(p) => Box::new(BufReader::new(File::open(p)?)),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer
pub fn open_output(sink: OutputSink) -> io::Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => Box::new(File::create(p)?),
        OutputSink::Memory(buf) => Box::new(SharedBufferWriter { buf }),
    };
    Ok(writer)
}

/// In-memory byte buffer shared between a memory sink and its owner.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // A writer that panicked mid-append leaves a valid Vec behind.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.contents())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

pub struct SharedBufferWriter {
    buf: SharedBuffer,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ================= Stream sink / source =================

/// Open writer. Files stay concrete so close can sync them.
enum SinkWriter {
    File(BufWriter<File>),
    Stream(BufWriter<Box<dyn Write + Send>>),
}

impl SinkWriter {
    fn open(target: OutputSink) -> io::Result<Self> {
        Ok(match target {
            OutputSink::File(p) => SinkWriter::File(BufWriter::new(File::create(p)?)),
            other => SinkWriter::Stream(BufWriter::new(open_output(other)?)),
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            SinkWriter::File(w) => w.write_all(bytes),
            SinkWriter::Stream(w) => w.write_all(bytes),
        }
    }

    /// Flush the buffer; for files also `sync_all`, so errors the storage
    /// only reports at sync time (network mounts) reach the caller.
    fn finish(self) -> io::Result<()> {
        match self {
            SinkWriter::File(w) => {
                let file = w.into_inner().map_err(|e| e.into_error())?;
                file.sync_all()
            }
            SinkWriter::Stream(mut w) => w.flush(),
        }
    }
}

enum SinkState {
    Pending(OutputSink),
    Open(SinkWriter),
    Closed,
}

/// `RecordSink` over an [`OutputSink`], buffered.
///
/// `close` flushes, and for file targets syncs to storage; either failure
/// is returned.
pub struct StreamSink {
    label: String,
    state: SinkState,
}

impl StreamSink {
    pub fn new(target: OutputSink) -> Self {
        Self { label: target.to_string(), state: SinkState::Pending(target) }
    }

    /// Memory sink plus a handle to read back what was written.
    pub fn memory() -> (Self, SharedBuffer) {
        let buf = SharedBuffer::new();
        (Self::new(OutputSink::Memory(buf.clone())), buf)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SinkState::Open(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, SinkState::Closed)
    }
}

impl RecordSink for StreamSink {
    fn open(&mut self) -> io::Result<()> {
        match std::mem::replace(&mut self.state, SinkState::Closed) {
            SinkState::Pending(target) => {
                self.state = SinkState::Open(SinkWriter::open(target)?);
                debug!(sink = %self.label, "sink opened");
                Ok(())
            }
            open @ SinkState::Open(_) => {
                self.state = open;
                Ok(())
            }
            SinkState::Closed => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("sink {} already closed", self.label),
            )),
        }
    }

    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        match &mut self.state {
            SinkState::Open(w) => w.write_all(bytes),
            _ => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                format!("sink {} is not open", self.label),
            )),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        match std::mem::replace(&mut self.state, SinkState::Closed) {
            SinkState::Open(w) => {
                let finished = w.finish();
                debug!(sink = %self.label, ok = finished.is_ok(), "sink closed");
                finished
            }
            SinkState::Pending(_) | SinkState::Closed => Ok(()),
        }
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// `RecordSource` over an [`InputSource`]. Can be opened once.
pub struct StreamSource {
    label: String,
    pending: Option<InputSource>,
}

impl StreamSource {
    pub fn new(src: InputSource) -> Self {
        Self { label: src.to_string(), pending: Some(src) }
    }

    pub fn memory(bytes: impl Into<Bytes>) -> Self {
        Self::new(InputSource::Memory(bytes.into()))
    }
}

impl RecordSource for StreamSource {
    fn open(&mut self) -> io::Result<Box<dyn BufRead + Send>> {
        let src = self.pending.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Other, format!("source {} already consumed", self.label))
        })?;
        let reader = open_input(src)?;
        debug!(source = %self.label, "source opened");
        Ok(reader)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
