//! # Activation Functions
//!
//! Non-linear activation functions for scalar neurons.
//!
//! ## Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | `fast_sigmoid` | x / (1 + \|x\|), cheap sigmoid approximation |
//! | `relu` | Rectified Linear Unit |
//! | `sigmoid` | Logistic sigmoid |
//! | `tanh` | Hyperbolic tangent |
//! | `leaky_relu` | Leaky ReLU with fixed 0.01 slope |
//!
//! ## Implementation Notes
//!
//! Each function is pinned to a matching derivative, and the pair is
//! addressed through the [`Activation`] enum so the identity is a plain
//! comparable value rather than a function pointer.
//!
//! Derivatives follow the neuron calling convention: they are evaluated on
//! the *activation output*, not on the raw input. For `fast_sigmoid` this is
//! intentional and gives a sigmoid-derivative-like curve; do not special-case
//! it.

use serde::{Deserialize, Serialize};

/// Fast sigmoid: x / (1 + |x|)
///
/// Maps to (-1, 1) without transcendental calls.
#[inline]
pub fn fast_sigmoid(x: f32) -> f32 {
    x / (1.0 + x.abs())
}

/// Derivative of the fast sigmoid, evaluated on the activation output u.
#[inline]
pub fn fast_sigmoid_derivative(u: f32) -> f32 {
    1.0 - u * u
}

/// ReLU: max(0, x)
#[inline]
pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// ReLU derivative: 1 for positive input, 0 otherwise.
#[inline]
pub fn relu_derivative(u: f32) -> f32 {
    if u > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Sigmoid: 1 / (1 + e^(-x))
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative: σ(u) · (1 − σ(u))
#[inline]
pub fn sigmoid_derivative(u: f32) -> f32 {
    let sig = sigmoid(u);
    sig * (1.0 - sig)
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh(x: f32) -> f32 {
    x.tanh()
}

/// Tanh derivative: 1 − tanh(u)²
#[inline]
pub fn tanh_derivative(u: f32) -> f32 {
    let t = u.tanh();
    1.0 - t * t
}

/// Leaky ReLU: x for positive input, 0.01x otherwise.
#[inline]
pub fn leaky_relu(x: f32) -> f32 {
    if x > 0.0 {
        x
    } else {
        0.01 * x
    }
}

/// Leaky ReLU derivative: 1 for positive input, 0.01 otherwise.
#[inline]
pub fn leaky_relu_derivative(u: f32) -> f32 {
    if u > 0.0 {
        1.0
    } else {
        0.01
    }
}

/// A pinned activation/derivative pair.
///
/// Closed set: equality, serialization and codec reconstruction all stay
/// exhaustive over these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    FastSigmoid,
    ReLU,
    Sigmoid,
    TanH,
    LeakyReLU,
}

impl Activation {
    /// Apply the activation function to a raw value.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::FastSigmoid => fast_sigmoid(x),
            Activation::ReLU => relu(x),
            Activation::Sigmoid => sigmoid(x),
            Activation::TanH => tanh(x),
            Activation::LeakyReLU => leaky_relu(x),
        }
    }

    /// Evaluate the pinned derivative on an activation output.
    #[inline]
    pub fn derivative(self, u: f32) -> f32 {
        match self {
            Activation::FastSigmoid => fast_sigmoid_derivative(u),
            Activation::ReLU => relu_derivative(u),
            Activation::Sigmoid => sigmoid_derivative(u),
            Activation::TanH => tanh_derivative(u),
            Activation::LeakyReLU => leaky_relu_derivative(u),
        }
    }

    /// Stable lowercase name for this pair.
    pub fn name(self) -> &'static str {
        match self {
            Activation::FastSigmoid => "fast_sigmoid",
            Activation::ReLU => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::TanH => "tanh",
            Activation::LeakyReLU => "leaky_relu",
        }
    }

    /// Look up an activation pair by name.
    ///
    /// Supported: "fast_sigmoid", "relu", "sigmoid", "tanh", "leaky_relu"
    pub fn by_name(name: &str) -> Option<Activation> {
        match name.to_lowercase().as_str() {
            "fast_sigmoid" => Some(Activation::FastSigmoid),
            "relu" => Some(Activation::ReLU),
            "sigmoid" => Some(Activation::Sigmoid),
            "tanh" => Some(Activation::TanH),
            "leaky_relu" => Some(Activation::LeakyReLU),
            _ => None,
        }
    }
}
