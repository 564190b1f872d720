use std::io;

/// A byte-output destination.
///
/// Besides accepting bytes, a sink advertises which durability primitive it
/// natively supports through [`Sink::as_durable`] and [`Sink::as_flushable`].
/// Both default to `None`. The answers must not change over the lifetime of
/// the sink, since [`crate::adapt()`] inspects them only once.
pub trait Sink {
    /// Writes bytes and reports how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Returns the sink as a [`Durable`] if it exposes a native commit.
    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        None
    }

    /// Returns the sink as a [`Flushable`] if it exposes a native flush.
    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        None
    }

    /// Writes the whole buffer, retrying on [`io::ErrorKind::Interrupted`].
    ///
    /// Fails with [`io::ErrorKind::WriteZero`] if the sink stops accepting
    /// bytes before the buffer is exhausted.
    fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ));
                }
                Ok(n) => buf = &buf[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// A sink that can commit everything accepted so far to its ultimate
/// destination.
pub trait Durable: Sink {
    /// Persists or forwards all previously accepted bytes before returning.
    fn commit(&mut self) -> io::Result<()>;
}

/// A sink that offers the same guarantee as [`Durable`] under the name
/// `flush`.
pub trait Flushable: Sink {
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        (**self).as_durable()
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        (**self).as_flushable()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        (**self).as_durable()
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        (**self).as_flushable()
    }
}

impl<S: Durable + ?Sized> Durable for Box<S> {
    fn commit(&mut self) -> io::Result<()> {
        (**self).commit()
    }
}

/// An absent sink fails every write and exposes no durability primitive.
impl<S: Sink> Sink for Option<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Some(sink) => sink.write(buf),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "write to an absent sink",
            )),
        }
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        self.as_mut().and_then(Sink::as_durable)
    }

    fn as_flushable(&mut self) -> Option<&mut dyn Flushable> {
        self.as_mut().and_then(Sink::as_flushable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Accepts at most `chunk` bytes per call.
    struct Trickle {
        chunk: usize,
        out: Vec<u8>,
        interrupted_once: bool,
    }

    impl Sink for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.interrupted_once {
                self.interrupted_once = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.chunk);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }
    }

    struct Stalled;

    impl Sink for Stalled {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }
    }

    #[test]
    fn test_write_all_loops_over_short_writes() {
        let mut fixture = Trickle { chunk: 3, out: Vec::new(), interrupted_once: false };
        fixture.write_all(b"hello world").unwrap();
        let actual = fixture.out;
        let expected = b"hello world".to_vec();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_write_all_reports_write_zero() {
        let actual = Stalled.write_all(b"x").unwrap_err().kind();
        let expected = io::ErrorKind::WriteZero;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_write_all_empty_buffer_never_calls_write() {
        Stalled.write_all(b"").unwrap();
    }

    #[test]
    fn test_absent_sink_fails_fast() {
        let mut fixture: Option<Vec<u8>> = None;
        let actual = fixture.write(b"data").unwrap_err().kind();
        let expected = io::ErrorKind::NotConnected;
        assert_eq!(actual, expected);
        assert!(fixture.as_durable().is_none());
        assert!(fixture.as_flushable().is_none());
    }

    #[test]
    fn test_present_option_forwards_writes() {
        let mut fixture = Some(Vec::<u8>::new());
        let actual = fixture.write(b"abc").unwrap();
        assert_eq!(actual, 3);
        assert_eq!(fixture, Some(b"abc".to_vec()));
    }

    #[test]
    fn test_mutable_reference_forwards_capabilities() {
        let mut buffer = std::io::BufWriter::new(Vec::new());
        let mut fixture: &mut std::io::BufWriter<Vec<u8>> = &mut buffer;
        assert!(Sink::as_flushable(&mut fixture).is_some());
        assert!(Sink::as_durable(&mut fixture).is_none());
    }
}
