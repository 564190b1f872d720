use std::io;

use crate::{Durable, Sink};

/// How an [`Adapted`] sink implements [`Durable::commit`].
///
/// Chosen once by [`adapt`], in priority order: a native commit wins over a
/// flush, and a flush wins over doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The sink commits natively; commit is forwarded unchanged.
    Native,
    /// Commit calls the sink's flush and returns its result verbatim.
    Flush,
    /// The sink has no durability primitive; commit always succeeds.
    Noop,
}

impl Strategy {
    fn classify<S: Sink + ?Sized>(sink: &mut S) -> Self {
        if sink.as_durable().is_some() {
            Self::Native
        } else if sink.as_flushable().is_some() {
            Self::Flush
        } else {
            Self::Noop
        }
    }
}

/// Wraps `sink` so that it always supports [`Durable::commit`].
///
/// No I/O happens here. The result writes exactly like `sink` does and only
/// differs in how commit is served, see [`Strategy`].
pub fn adapt<S: Sink>(sink: S) -> Adapted<S> {
    Adapted::new(sink)
}

/// A sink paired with the commit strategy it was classified into.
///
/// The wrapper neither owns more than the value it was given nor adds any
/// synchronization. Pass `&mut sink` to keep ownership with the caller.
#[derive(Debug, Clone, Copy)]
pub struct Adapted<S> {
    sink: S,
    strategy: Strategy,
}

impl<S: Sink> Adapted<S> {
    pub fn new(mut sink: S) -> Self {
        let strategy = Strategy::classify(&mut sink);
        Self { sink, strategy }
    }
}

impl<S> Adapted<S> {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: Sink> Sink for Adapted<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        Some(self)
    }
}

impl<S: Sink> Durable for Adapted<S> {
    fn commit(&mut self) -> io::Result<()> {
        match self.strategy {
            Strategy::Native => match self.sink.as_durable() {
                Some(sink) => sink.commit(),
                None => Err(capability_lost("commit")),
            },
            Strategy::Flush => match self.sink.as_flushable() {
                Some(sink) => sink.flush(),
                None => Err(capability_lost("flush")),
            },
            Strategy::Noop => Ok(()),
        }
    }
}

/// The sink dropped the capability it was classified by.
fn capability_lost(capability: &str) -> io::Error {
    io::Error::other(format!("sink stopped advertising its {capability} capability"))
}

/// `flush` commits, so an adapted sink can back any `io::Write` consumer.
impl<S: Sink> io::Write for Adapted<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Sink::write(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit()
    }
}
