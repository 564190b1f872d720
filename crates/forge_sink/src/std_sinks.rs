//! [`Sink`] implementations for the standard library's writers.
//!
//! Files expose a native commit (`sync_all`). Buffered writers and the
//! standard streams expose `flush`. In-memory buffers and `io::Sink` expose
//! neither.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, LineWriter, Stderr, StderrLock, Stdout, StdoutLock};

use crate::{Durable, Flushable, Sink};

macro_rules! write_only {
    ($($ty:ty),* $(,)?) => {$(
        impl Sink for $ty {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                io::Write::write(self, buf)
            }
        }
    )*};
}

macro_rules! flushable {
    ($($ty:ty),* $(,)?) => {$(
        impl Sink for $ty {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                io::Write::write(self, buf)
            }

            fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
                Some(self)
            }
        }

        impl Flushable for $ty {
            fn flush(&mut self) -> io::Result<()> {
                io::Write::flush(self)
            }
        }
    )*};
}

macro_rules! durable_file {
    ($($ty:ty),* $(,)?) => {$(
        impl Sink for $ty {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                io::Write::write(self, buf)
            }

            fn as_durable(&mut self) -> Option<&mut dyn Durable> {
                Some(self)
            }

            fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
                Some(self)
            }
        }

        impl Durable for $ty {
            fn commit(&mut self) -> io::Result<()> {
                self.sync_all()
            }
        }

        impl Flushable for $ty {
            fn flush(&mut self) -> io::Result<()> {
                io::Write::flush(self)
            }
        }
    )*};
}

write_only!(Vec<u8>, Cursor<Vec<u8>>, io::Sink, &io::Sink);
flushable!(Stdout, Stderr, StdoutLock<'_>, StderrLock<'_>);
durable_file!(File, &File);

impl<W: io::Write> Sink for BufWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(self, buf)
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        Some(self)
    }
}

impl<W: io::Write> Flushable for BufWriter<W> {
    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self)
    }
}

impl<W: io::Write> Sink for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(self, buf)
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        Some(self)
    }
}

impl<W: io::Write> Flushable for LineWriter<W> {
    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self)
    }
}

/// Treats any [`io::Write`] as a sink without a durability primitive.
///
/// `io::Write::flush` is never called through this wrapper.
#[derive(Debug, Default, Clone)]
pub struct WriteOnly<W>(pub W);

impl<W: io::Write> Sink for WriteOnly<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.0, buf)
    }
}

/// Treats any [`io::Write`] as a sink whose `flush` commits its data.
#[derive(Debug, Default, Clone)]
pub struct Flushing<W>(pub W);

impl<W: io::Write> Sink for Flushing<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.0, buf)
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        Some(self)
    }
}

impl<W: io::Write> Flushable for Flushing<W> {
    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut self.0)
    }
}
