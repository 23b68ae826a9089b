//! # Layers
//!
//! An ordered, exclusively-owning collection of neurons. Insertion order is
//! structurally significant: it defines which neuron occupies which slot.

use std::ops::Index;

use serde::Serialize;

use crate::error::Result;

use super::activations::Activation;
use super::init::InitStrategy;
use super::neuron::Neuron;

/// An ordered sequence of neurons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Layer {
            neurons: Vec::new(),
        }
    }

    /// Create a layer of `size` neurons, seeding slot `i` with
    /// `init.generate(i)` in increasing index order.
    pub fn with_size(size: u32, init: &InitStrategy, function: Activation) -> Self {
        let mut layer = Layer {
            neurons: Vec::with_capacity(size as usize),
        };
        for i in 0..size {
            layer.push(Neuron::new(init.generate(i), function));
        }
        layer
    }

    /// Append a neuron. This is the only growth operation.
    pub fn push(&mut self, neuron: Neuron) {
        self.neurons.push(neuron);
    }

    /// Number of neurons.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// True if the layer holds no neurons.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Bounds-checked access.
    pub fn get(&self, index: usize) -> Option<&Neuron> {
        self.neurons.get(index)
    }

    /// Iterate over neurons in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Neuron> {
        self.neurons.iter()
    }

    /// Structural dump: `{"neurons":[{"value":..,"activation":..,"derived":..},..]}`.
    ///
    /// Read-only inspection output; nothing in the core parses it back.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Index<usize> for Layer {
    type Output = Neuron;

    /// Panics on out-of-range access; use [`Layer::get`] to probe.
    fn index(&self, index: usize) -> &Neuron {
        &self.neurons[index]
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Neuron;
    type IntoIter = std::slice::Iter<'a, Neuron>;

    fn into_iter(self) -> Self::IntoIter {
        self.neurons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_preserves_order() {
        let layer = Layer::with_size(4, &InitStrategy::Constant(0.25), Activation::ReLU);
        assert_eq!(layer.len(), 4);
        for neuron in &layer {
            assert_eq!(neuron.raw(), 0.25);
        }
    }

    #[test]
    fn test_empty_layer() {
        let layer = Layer::new();
        assert!(layer.is_empty());
        assert!(layer.get(0).is_none());
    }

    #[test]
    fn test_equality() {
        let init = InitStrategy::Constant(0.5);
        let a = Layer::with_size(3, &init, Activation::TanH);
        let b = Layer::with_size(3, &init, Activation::TanH);
        let shorter = Layer::with_size(2, &init, Activation::TanH);
        assert_eq!(a, b);
        assert_ne!(a, shorter);
    }

    #[test]
    fn test_json_dump_shape() {
        let layer = Layer::with_size(1, &InitStrategy::Zero, Activation::Sigmoid);
        let json = layer.to_json().unwrap();
        assert!(json.starts_with("{\"neurons\":["));
        assert!(json.contains("\"value\""));
        assert!(json.contains("\"activation\""));
        assert!(json.contains("\"derived\""));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let layer = Layer::new();
        let _ = layer[0];
    }
}
