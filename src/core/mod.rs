//! # Core Data Model
//!
//! The parameter hierarchy and its collaborators:
//! - Activation functions (pinned function/derivative pairs)
//! - Initialization strategies
//! - Neurons, layers, networks
//!
//! Everything here is a plain value: nothing is shared, aliased or mutated
//! after construction, so equality is structural throughout.

pub mod activations;
pub mod init;
pub mod layer;
pub mod network;
pub mod neuron;

pub use activations::Activation;
pub use init::InitStrategy;
pub use layer::Layer;
pub use network::Network;
pub use neuron::{Neuron, NeuronKind, VALUE_EPSILON};

/// Prelude module for core exports
pub mod prelude {
    pub use crate::core::activations::Activation;
    pub use crate::core::init::InitStrategy;
    pub use crate::core::layer::Layer;
    pub use crate::core::network::Network;
    pub use crate::core::neuron::{Neuron, NeuronKind};
}
