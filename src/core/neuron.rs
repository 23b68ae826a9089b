//! # Scalar Neurons
//!
//! The smallest owned entity of the hierarchy: one raw value plus the
//! activation and derivative computed from it at construction time.

use serde::Serialize;

use super::activations::Activation;

/// Tolerance for structural equality on raw values.
pub const VALUE_EPSILON: f32 = 1e-4;

/// Closed set of neuron variants.
///
/// Only `Scalar` exists today; recurrent/convolutional/gated variants would
/// be added here so that equality and serialization stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NeuronKind {
    Scalar,
}

impl NeuronKind {
    /// Stable name for this variant.
    pub fn name(self) -> &'static str {
        match self {
            NeuronKind::Scalar => "scalar",
        }
    }
}

/// A fully-initialized scalar neuron.
///
/// `activation = function.apply(raw)` and
/// `derived = function.derivative(activation)` hold for the lifetime of the
/// value; both are computed once by [`Neuron::new`] and never mutated. Note
/// the derivative is evaluated on the activation output, uniformly for every
/// activation pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Neuron {
    #[serde(rename = "value")]
    raw: f32,
    activation: f32,
    derived: f32,
    #[serde(skip)]
    function: Activation,
    #[serde(skip)]
    kind: NeuronKind,
}

impl Neuron {
    /// Build a neuron from a raw value and a pinned activation pair.
    ///
    /// Never fails; every finite or non-finite f32 is accepted.
    pub fn new(raw: f32, function: Activation) -> Self {
        let activation = function.apply(raw);
        let derived = function.derivative(activation);
        Neuron {
            raw,
            activation,
            derived,
            function,
            kind: NeuronKind::Scalar,
        }
    }

    /// The raw value this neuron was constructed from.
    #[inline]
    pub fn raw(&self) -> f32 {
        self.raw
    }

    /// The activation output, `function.apply(raw)`.
    #[inline]
    pub fn activation(&self) -> f32 {
        self.activation
    }

    /// The derivative evaluated on the activation output.
    #[inline]
    pub fn derived(&self) -> f32 {
        self.derived
    }

    /// The pinned activation pair.
    #[inline]
    pub fn function(&self) -> Activation {
        self.function
    }

    /// The neuron variant.
    #[inline]
    pub fn kind(&self) -> NeuronKind {
        self.kind
    }
}

/// Structural equality: raw values within [`VALUE_EPSILON`] of each other.
///
/// Symmetric by construction. The activation pair is deliberately not part
/// of the comparison; it determines the derived fields, which follow the raw
/// value anyway when the pair matches.
impl PartialEq for Neuron {
    fn eq(&self, other: &Self) -> bool {
        (self.raw - other.raw).abs() < VALUE_EPSILON
    }
}
