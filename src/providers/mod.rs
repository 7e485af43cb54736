//! Production implementations of the engine's trait abstractions.
//!
//! This module provides the "real" implementations of the traits defined in
//! [`crate::traits`] that talk to the aggregator service over HTTP and to
//! the system clock.
//!
//! Applications will typically use these providers, while test code
//! substitutes the fakes in [`crate::testing`]. The signing capability has
//! no production implementation here: it is supplied by the wallet layer.

mod http;
mod tokio_clock;

pub use self::http::HttpAggregator;
pub use self::tokio_clock::TokioClock;
