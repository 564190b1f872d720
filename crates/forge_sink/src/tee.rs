use std::fmt;
use std::io;

use crate::{Durable, Sink, TeeError, adapt};

/// Fans every write and commit out to a list of sinks.
///
/// Each member is adapted on insertion, so any [`Sink`] can be added. A
/// failing member does not stop the others from receiving the data.
#[derive(Default)]
pub struct Tee {
    sinks: Vec<Box<dyn Durable + Send>>,
}

impl Tee {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink to the fan-out.
    pub fn with<S: Sink + Send + 'static>(mut self, sink: S) -> Self {
        self.push(sink);
        self
    }

    pub fn push<S: Sink + Send + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(adapt(sink)));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn fan_out(
        &mut self,
        op: &str,
        mut f: impl FnMut(&mut dyn Durable) -> io::Result<()>,
    ) -> io::Result<()> {
        let total = self.sinks.len();
        let mut errors = Vec::new();
        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(error) = f(&mut **sink) {
                tracing::warn!(index, total, op, %error, "tee output failed");
                errors.push(error);
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(io::Error::other(TeeError { errors, total })),
        }
    }
}

impl fmt::Debug for Tee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tee").field("sinks", &self.sinks.len()).finish()
    }
}

impl Sink for Tee {
    /// Writes the whole buffer to every member; reports the full length only
    /// if all of them accepted it.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.fan_out("write", |sink| sink.write_all(buf))?;
        Ok(buf.len())
    }

    fn as_durable(&mut self) -> Option<&mut dyn Durable> {
        Some(self)
    }
}

impl Durable for Tee {
    fn commit(&mut self) -> io::Result<()> {
        self.fan_out("commit", |sink| sink.commit())
    }
}
