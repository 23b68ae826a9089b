//! # Initialization Strategies
//!
//! Seed values for neuron construction. A strategy is a cheap, caller-owned
//! value passed by reference into the layer and network factories; there is
//! no global registry or cached instance.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw-value source for neuron construction.
///
/// `generate` is called once per neuron slot with the slot index, in
/// increasing index order. None of the current variants fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InitStrategy {
    /// Every slot gets 0.0.
    Zero,
    /// Every slot gets the same fixed value.
    Constant(f32),
    /// Every slot gets an independent uniform sample from `[min, max)`.
    /// A degenerate range (`min >= max`) yields `min`.
    Uniform { min: f32, max: f32 },
}

impl InitStrategy {
    /// Produce the raw value for the neuron at `index`.
    ///
    /// The index is part of the capability contract so strategies may be
    /// index-dependent; the built-in variants ignore it.
    pub fn generate(&self, _index: u32) -> f32 {
        match *self {
            InitStrategy::Zero => 0.0,
            InitStrategy::Constant(value) => value,
            InitStrategy::Uniform { min, max } => {
                // An empty or collapsed range has only one representable
                // outcome; sampling it would panic.
                if min < max {
                    rand::thread_rng().gen_range(min..max)
                } else {
                    min
                }
            }
        }
    }
}

impl Default for InitStrategy {
    fn default() -> Self {
        InitStrategy::Zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        for i in 0..8 {
            assert_eq!(InitStrategy::Zero.generate(i), 0.0);
        }
    }

    #[test]
    fn test_constant() {
        let init = InitStrategy::Constant(0.12);
        assert_eq!(init.generate(0), 0.12);
        assert_eq!(init.generate(99), 0.12);
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let init = InitStrategy::Uniform { min: 0.5, max: 0.5 };
        assert_eq!(init.generate(0), 0.5);

        let inverted = InitStrategy::Uniform { min: 1.0, max: -1.0 };
        assert_eq!(inverted.generate(0), 1.0);
    }

    #[test]
    fn test_uniform_in_range() {
        let init = InitStrategy::Uniform {
            min: -1.0,
            max: 1.0,
        };
        for i in 0..100 {
            let v = init.generate(i);
            assert!((-1.0..1.0).contains(&v), "sample {} out of range", v);
        }
    }
}
