use std::io;
use std::sync::LazyLock;

use crate::{Adapted, adapt};

static DISCARD_SINK: io::Sink = io::sink();

/// Process-wide sink that accepts and drops every byte.
///
/// Classified through [`adapt()`] like any other sink; it has no durability
/// primitive, so commit is a no-op.
pub static DISCARD: LazyLock<Adapted<&'static io::Sink>> =
    LazyLock::new(|| adapt(&DISCARD_SINK));

/// Returns a handle to [`DISCARD`], usable as a default output target.
pub fn discard() -> Adapted<&'static io::Sink> {
    *DISCARD
}
