//! # Networks
//!
//! An ordered, exclusively-owning collection of layers; the unit of
//! serialization. Layer order is the topology order, input to output.

use std::ops::Index;

use serde::Serialize;

use crate::error::Result;

use super::activations::Activation;
use super::init::InitStrategy;
use super::layer::Layer;

/// An ordered sequence of layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Create an empty network.
    pub fn empty() -> Self {
        Network { layers: Vec::new() }
    }

    /// Build one layer per topology entry, in order, sharing the same init
    /// strategy and activation pair across all layers.
    pub fn new(topology: &[u32], init: &InitStrategy, function: Activation) -> Self {
        let mut network = Network {
            layers: Vec::with_capacity(topology.len()),
        };
        for &size in topology {
            network.push(Layer::with_size(size, init, function));
        }
        network
    }

    /// Append a layer. This is the only growth operation; the decoder uses
    /// it to rebuild topology layer by layer.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the network holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Bounds-checked access.
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Iterate over layers in topology order.
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    /// Structural dump: `{"layers":[{"neurons":[..]},..]}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Index<usize> for Network {
    type Output = Layer;

    /// Panics on out-of-range access; use [`Network::get`] to probe.
    fn index(&self, index: usize) -> &Layer {
        &self.layers[index]
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
