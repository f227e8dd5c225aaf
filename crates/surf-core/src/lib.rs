#![deny(missing_docs)]
#![doc = "Shared error and randomness primitives for the surf surface-code simulator."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, SimError};
pub use rng::{derive_substream_seed, RngHandle};
