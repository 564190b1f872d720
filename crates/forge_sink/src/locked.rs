//! Shared, mutex-guarded sink handle.
//!
//! Adapted sinks add no synchronization of their own. Wrap one in
//! [`Locked`] to share it between threads or to plug it into a
//! `tracing_subscriber` formatter.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

use crate::{Adapted, Durable, Sink, adapt};

/// Cloneable handle serializing writes and commits to one sink.
///
/// A poisoned lock is recovered: the sink is still handed out to the next
/// caller.
#[derive(Debug)]
pub struct Locked<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for Locked<S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S: Durable> Locked<S> {
    pub fn new(sink: S) -> Self {
        Self { inner: Arc::new(Mutex::new(sink)) }
    }
}

impl<S> Locked<S> {
    /// Acquires exclusive access to the wrapped sink.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Adapts `sink` and wraps the result for shared use.
pub fn lock<S: Sink>(sink: S) -> Locked<Adapted<S>> {
    Locked::new(adapt(sink))
}

impl<S: Durable> Sink for Locked<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        Some(self)
    }
}

impl<S: Durable> Durable for Locked<S> {
    fn commit(&mut self) -> io::Result<()> {
        self.lock().commit()
    }
}

/// Writer handed out per formatted event; holds the lock until dropped so
/// concurrent events never interleave.
pub struct LockedWriter<'a, S> {
    guard: MutexGuard<'a, S>,
}

impl<S: Durable> io::Write for LockedWriter<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.guard.commit()
    }
}

impl<'a, S: Durable + 'a> MakeWriter<'a> for Locked<S> {
    type Writer = LockedWriter<'a, S>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter { guard: self.lock() }
    }
}
