//! Uniform commit support for byte-output sinks.
//!
//! [`adapt()`] turns any [`Sink`] into one that can always be committed. How
//! commit is served is decided once per sink, see [`Strategy`]. Output
//! pipelines can then call [`Durable::commit`] after writing without caring
//! what they write to.

mod adapt;
mod config;
mod discard;
mod error;
mod locked;
mod open;
mod sink;
mod std_sinks;
mod tee;

pub use adapt::*;
pub use config::*;
pub use discard::*;
pub use error::*;
pub use locked::*;
pub use open::*;
pub use sink::*;
pub use std_sinks::*;
pub use tee::*;
