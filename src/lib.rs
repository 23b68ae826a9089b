//! # neurodna - Feed-forward parameter containers with a DNA codec
//!
//! A minimal in-memory representation of a feed-forward parameter hierarchy
//! (scalar neurons grouped into layers grouped into a network) plus a
//! lossless textual codec over the nucleotide alphabet `{A, C, G, T}`.
//!
//! ## Features
//!
//! - **core**: the data model (neurons, layers, networks), activation pairs
//!   and initialization strategies
//! - **codec**: the self-delimiting DNA stream format and its decoder, which
//!   recovers topology purely from marker scanning
//! - **error**: the decode error taxonomy
//!
//! No training, no gradients, no concurrency: a network is an immutable
//! value once built, and equality is structural throughout.
//!
//! ## Example
//!
//! ```
//! use neurodna::prelude::*;
//!
//! let net = Network::new(&[4, 2], &InitStrategy::Constant(0.12), Activation::TanH);
//! let stream = DnaCodec::encode_to_string(&net);
//! let decoded = DnaCodec::decode_str(&stream, Activation::TanH).unwrap();
//! assert_eq!(decoded, net);
//! ```

pub mod error;
pub use error::{NeurodnaError, Result};

pub mod core;
pub use core::{Activation, InitStrategy, Layer, Network, Neuron, NeuronKind};

pub mod codec;
pub use codec::DnaCodec;

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::codec::DnaCodec;
    pub use crate::core::prelude::*;
    pub use crate::error::{NeurodnaError, Result};
}
