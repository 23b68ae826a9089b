//! Integration tests for the network ↔ DNA stream round trip.
//!
//! The fixed stream below reproduces the reference regression: four layers
//! of sizes 12/6/6/8, every neuron seeded with 0.12 (one value group is
//! "ATTCTTCCTAAGGATT").

use neurodna::prelude::*;

fn reference_stream() -> String {
    let group = "ATTCTTCCTAAGGATT";
    let mut stream = String::from("ATG");
    for size in [12, 6, 6, 8] {
        stream.push_str("ATG");
        for _ in 0..size {
            stream.push_str(group);
        }
        stream.push_str("UAA");
    }
    stream.push_str("UAA");
    stream
}

#[test]
fn test_reference_network_round_trip() {
    let net = Network::new(
        &[12, 6, 6, 8],
        &InitStrategy::Constant(0.12),
        Activation::TanH,
    );

    assert_eq!(DnaCodec::encode_to_string(&net), reference_stream());

    let decoded = DnaCodec::decode_str(&reference_stream(), Activation::TanH).unwrap();
    assert_eq!(decoded, net);
}

#[test]
fn test_uniform_random_round_trip() {
    let init = InitStrategy::Uniform {
        min: -1.0,
        max: 1.0,
    };
    let net = Network::new(&[12, 6, 6, 8], &init, Activation::TanH);

    let stream = DnaCodec::encode_to_string(&net);
    let decoded = DnaCodec::decode_str(&stream, Activation::TanH).unwrap();

    assert_eq!(decoded, net);

    // Raw values survive bit-for-bit, not just within epsilon.
    for (layer, decoded_layer) in net.iter().zip(decoded.iter()) {
        for (neuron, decoded_neuron) in layer.iter().zip(decoded_layer.iter()) {
            assert_eq!(neuron.raw().to_bits(), decoded_neuron.raw().to_bits());
        }
    }
}

#[test]
fn test_every_activation_round_trips() {
    for function in [
        Activation::FastSigmoid,
        Activation::ReLU,
        Activation::Sigmoid,
        Activation::TanH,
        Activation::LeakyReLU,
    ] {
        let init = InitStrategy::Uniform {
            min: -2.0,
            max: 2.0,
        };
        let net = Network::new(&[3, 5, 1], &init, function);
        let decoded =
            DnaCodec::decode_str(&DnaCodec::encode_to_string(&net), function).unwrap();
        assert_eq!(decoded, net, "round trip failed for {}", function.name());
    }
}

#[test]
fn test_truncation_always_fails() {
    // Removing the final symbol of any valid stream must fail decode, never
    // silently succeed with a different network.
    let stream = reference_stream();
    for cut in 1..=3 {
        let truncated = &stream[..stream.len() - cut];
        assert!(
            DnaCodec::decode_str(truncated, Activation::TanH).is_err(),
            "decode succeeded with {} symbols removed",
            cut
        );
    }
}

#[test]
fn test_alphabet_violation_always_fails() {
    let net = Network::new(&[2], &InitStrategy::Constant(0.12), Activation::TanH);
    let stream = DnaCodec::encode_to_string(&net);

    // Substitute every value-group symbol in turn (offsets 6..38).
    for position in 6..6 + 2 * 16 {
        let mut corrupted = stream.clone();
        corrupted.replace_range(position..position + 1, "Z");
        let err = DnaCodec::decode_str(&corrupted, Activation::TanH).unwrap_err();
        assert!(
            err.is_format_error(),
            "expected a format error at symbol {}",
            position
        );
    }
}

#[test]
fn test_json_dump() {
    let net = Network::new(&[2, 1], &InitStrategy::Zero, Activation::Sigmoid);
    let json = net.to_json().unwrap();
    assert!(json.starts_with("{\"layers\":["));
    assert_eq!(json.matches("\"neurons\"").count(), 2);
    assert_eq!(json.matches("\"value\"").count(), 3);
}
