//! # DNA Codec
//!
//! Lossless mapping between a [`Network`] and a self-delimiting stream over
//! the nucleotide alphabet.
//!
//! ## Wire format
//!
//! ```text
//! stream := "ATG" layer* "UAA"
//! layer  := "ATG" group* "UAA"
//! group  := symbol{16}          symbol ∈ {A, C, G, T}
//! ```
//!
//! Each group is one f32: the raw 32-bit pattern sliced into 2-bit digits,
//! most-significant first, mapped `00→A, 01→C, 10→G, 11→T`. A straight bit
//! reinterpretation, so NaN, infinities, −0.0 and subnormals all round-trip
//! exactly. There are no length prefixes, checksums or version tags; the
//! decoder recovers the topology purely by marker scanning.
//!
//! `U` never appears inside a group, which is what makes one-symbol
//! lookahead sufficient: seeing `U` always means a STOP marker starts at the
//! cursor.
//!
//! The stream carries no activation metadata. The caller supplies the
//! activation pair at decode time, and nothing can detect a mismatch with
//! the pair used at encode time; raw values still round-trip bit-exactly.

use std::io::{self, Read, Write};

use crate::core::{Activation, Layer, Network, Neuron};
use crate::error::{NeurodnaError, Result};

/// Marker opening the network and each layer.
pub const START: &[u8; 3] = b"ATG";
/// Marker closing each layer and the network.
pub const STOP: &[u8; 3] = b"UAA";
/// Symbols per encoded f32: 32 bits, 2 bits per symbol.
pub const SYMBOLS_PER_VALUE: usize = 16;

const NUCLEOTIDES: [u8; 4] = *b"ACGT";

#[inline]
fn nucleotide_digit(symbol: u8) -> Option<u32> {
    match symbol {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Encode one f32 as its fixed-width symbol group.
fn value_group(value: f32) -> [u8; SYMBOLS_PER_VALUE] {
    let bits = value.to_bits();
    let mut group = [0u8; SYMBOLS_PER_VALUE];
    for (i, slot) in group.iter_mut().enumerate() {
        let shift = 2 * (SYMBOLS_PER_VALUE - 1 - i);
        *slot = NUCLEOTIDES[((bits >> shift) & 0b11) as usize];
    }
    group
}

/// Sequential symbol source with one-symbol lookahead.
///
/// Tracks the number of consumed symbols so errors can point at an offset.
struct SymbolReader<R: Read> {
    inner: R,
    peeked: Option<u8>,
    consumed: usize,
}

impl<R: Read> SymbolReader<R> {
    fn new(inner: R) -> Self {
        SymbolReader {
            inner,
            peeked: None,
            consumed: 0,
        }
    }

    /// Offset of the next unread symbol.
    fn position(&self) -> usize {
        self.consumed
    }

    fn fill(&mut self) -> Result<()> {
        if self.peeked.is_some() {
            return Ok(());
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(()),
                Ok(_) => {
                    self.peeked = Some(buf[0]);
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Look at the next symbol without consuming it. `None` at end of input.
    fn peek(&mut self) -> Result<Option<u8>> {
        self.fill()?;
        Ok(self.peeked)
    }

    /// Consume the next symbol. `None` at end of input.
    fn next(&mut self) -> Result<Option<u8>> {
        self.fill()?;
        match self.peeked.take() {
            Some(symbol) => {
                self.consumed += 1;
                Ok(Some(symbol))
            }
            None => Ok(None),
        }
    }

    /// Consume the next symbol or fail with `Truncated`.
    fn require(&mut self, expected: &'static str) -> Result<u8> {
        match self.next()? {
            Some(symbol) => Ok(symbol),
            None => Err(NeurodnaError::Truncated {
                position: self.position(),
                expected,
            }),
        }
    }

    /// Consume three symbols forming a marker.
    fn read_marker(&mut self, expected: &'static str) -> Result<[u8; 3]> {
        Ok([
            self.require(expected)?,
            self.require(expected)?,
            self.require(expected)?,
        ])
    }
}

/// Stateless network ↔ DNA stream transformation.
pub struct DnaCodec;

impl DnaCodec {
    /// Serialize a network to the caller's writer.
    ///
    /// Fails only on writer I/O errors; every f32 bit pattern has a defined
    /// encoding.
    pub fn encode<W: Write>(network: &Network, writer: &mut W) -> Result<()> {
        writer.write_all(START)?;
        for layer in network {
            writer.write_all(START)?;
            for neuron in layer {
                writer.write_all(&value_group(neuron.raw()))?;
            }
            writer.write_all(STOP)?;
        }
        writer.write_all(STOP)?;
        Ok(())
    }

    /// Serialize a network to an owned string.
    pub fn encode_to_string(network: &Network) -> String {
        let per_layer: usize = network
            .iter()
            .map(|layer| 6 + layer.len() * SYMBOLS_PER_VALUE)
            .sum();
        let mut buf = Vec::with_capacity(6 + per_layer);
        Self::encode(network, &mut buf).expect("writing into a Vec cannot fail");
        String::from_utf8(buf).expect("the DNA alphabet is pure ASCII")
    }

    /// Reconstruct a network from a symbol stream.
    ///
    /// Topology is recovered from markers alone; every decoded neuron is
    /// built with the supplied activation pair. On any format error or
    /// truncation the whole decode fails — a partial network is never
    /// returned.
    pub fn decode<R: Read>(reader: R, function: Activation) -> Result<Network> {
        let mut symbols = SymbolReader::new(reader);

        let opening = symbols.read_marker("START marker")?;
        if &opening != START {
            return Err(NeurodnaError::ExpectedStart {
                position: symbols.position() - 3,
            });
        }

        let mut network = Network::empty();
        loop {
            let at = symbols.position();
            let marker = symbols.read_marker("layer marker")?;
            if &marker == STOP {
                break;
            }
            if &marker != START {
                // A leading U can only be a malformed STOP.
                return Err(if marker[0] == b'U' {
                    NeurodnaError::ExpectedStop { position: at }
                } else {
                    NeurodnaError::ExpectedStart { position: at }
                });
            }

            let mut layer = Layer::new();
            loop {
                // One-symbol lookahead decides between another value group
                // and the layer's STOP marker before committing to either.
                match symbols.peek()? {
                    Some(b'U') => {
                        let at = symbols.position();
                        let marker = symbols.read_marker("STOP marker")?;
                        if &marker != STOP {
                            return Err(NeurodnaError::ExpectedStop { position: at });
                        }
                        break;
                    }
                    Some(_) => {
                        let value = Self::read_value(&mut symbols)?;
                        layer.push(Neuron::new(value, function));
                    }
                    None => {
                        return Err(NeurodnaError::Truncated {
                            position: symbols.position(),
                            expected: "value group or STOP marker",
                        });
                    }
                }
            }
            network.push(layer);
        }

        Ok(network)
    }

    /// Reconstruct a network from an in-memory stream.
    pub fn decode_str(stream: &str, function: Activation) -> Result<Network> {
        Self::decode(stream.as_bytes(), function)
    }

    /// Read one fixed-width value group and rebuild the f32 bit pattern,
    /// most-significant digit first.
    fn read_value<R: Read>(symbols: &mut SymbolReader<R>) -> Result<f32> {
        let mut bits: u32 = 0;
        for _ in 0..SYMBOLS_PER_VALUE {
            let at = symbols.position();
            let symbol = symbols.require("value group")?;
            let digit = nucleotide_digit(symbol).ok_or(NeurodnaError::ExpectedDna {
                symbol: symbol as char,
                position: at,
            })?;
            bits = (bits << 2) | digit;
        }
        Ok(f32::from_bits(bits))
    }
}
