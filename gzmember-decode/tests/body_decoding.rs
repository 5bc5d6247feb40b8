//! Response-body decoding across strategies and threads.

use flate2::Compression;
use flate2::write::GzEncoder;
use gzmember_decode::{
    BodyDecoder, BodyEncoding, DecodeConfig, DecodeError, InflateStrategy, MemberDecoder,
};
use std::io::Write;
use std::sync::Arc;

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn json_body(i: usize) -> Vec<u8> {
    format!("{{\"status\":true,\"data\":{{\"client_id\":{i},\"notes\":\"{}\"}}}}", "x".repeat(i * 7))
        .into_bytes()
}

#[test]
fn test_strategies_agree() {
    let native = BodyDecoder::new(DecodeConfig::DEFAULT);
    let fallback = BodyDecoder::new(DecodeConfig::FALLBACK);

    for i in 0..20 {
        let body = gzip(&json_body(i));
        let a = native.decode_body(body.clone()).unwrap();
        let b = fallback.decode_body(body).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.bytes, json_body(i));
    }
}

#[test]
fn test_plain_body_untouched() {
    let decoder = BodyDecoder::default();
    let body = json_body(3);
    let decoded = decoder.decode_body(body.clone()).unwrap();
    assert_eq!(decoded.encoding, BodyEncoding::Identity);
    assert_eq!(decoded.into_bytes(), body);
}

#[test]
fn test_compression_stats() {
    let payload = b"repetitive content ".repeat(200);
    let body = gzip(&payload);
    let compressed_size = body.len();

    let decoded = BodyDecoder::new(DecodeConfig::FALLBACK)
        .decode_body(body)
        .unwrap();
    assert_eq!(decoded.content_size(), payload.len());
    assert_eq!(decoded.encoding, BodyEncoding::Gzip { compressed_size });

    let saved = decoded.space_savings().unwrap();
    let expected = (payload.len() - compressed_size) as f64 / payload.len() as f64 * 100.0;
    assert!((saved - expected).abs() < 1e-9);
    assert!(saved > 90.0);
}

#[test]
fn test_custom_decompressor_injection() {
    let decoder = BodyDecoder::with_decompressor(MemberDecoder::new().max_output_size(Some(8)));
    assert_eq!(decoder.decompressor_name(), "member");
    assert_eq!(
        decoder.decode_body(gzip(b"more than eight bytes")),
        Err(DecodeError::output_limit(8))
    );
}

#[test]
fn test_corrupt_body_fails_for_both_strategies() {
    let mut body = gzip(b"corrupted on the wire");
    let last = body.len() - 5;
    body[last] ^= 0xFF;

    for strategy in [InflateStrategy::Native, InflateStrategy::Fallback] {
        let decoder = BodyDecoder::new(DecodeConfig::new().with_strategy(strategy));
        assert!(decoder.decode_body(body.clone()).is_err(), "{strategy}");
    }
}

#[test]
fn test_concurrent_decoding() {
    let decoder = Arc::new(BodyDecoder::new(DecodeConfig::FALLBACK));
    let bodies: Vec<(Vec<u8>, Vec<u8>)> = (0..16).map(|i| (gzip(&json_body(i)), json_body(i))).collect();

    std::thread::scope(|scope| {
        for (body, expected) in &bodies {
            let decoder = Arc::clone(&decoder);
            scope.spawn(move || {
                for _ in 0..10 {
                    let decoded = decoder.decode_body(body.clone()).unwrap();
                    assert_eq!(&decoded.bytes, expected);
                }
            });
        }
    });
}
