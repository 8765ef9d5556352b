//! Dispatch Tests
//!
//! Tests for routing response buffers per the configured server kind.

use pronostico::protocol::{decode_response, Decoded, WEATHER_SIZE};
use pronostico::{PronosticoError, ServerKind, WireFormat};

#[test]
fn test_primary_kind_is_opaque() {
    // No decode at all: arbitrary bytes come back untouched
    let buf = [0xDE, 0xAD, 0x00, 0xBE, 0xEF];
    match decode_response(ServerKind::Primary, WireFormat::Binary, &buf).unwrap() {
        Decoded::Raw(bytes) => assert_eq!(bytes, buf),
        other => panic!("Expected raw passthrough, got {other:?}"),
    }
}

#[test]
fn test_primary_kind_accepts_empty_response() {
    match decode_response(ServerKind::Primary, WireFormat::Binary, &[]).unwrap() {
        Decoded::Raw(bytes) => assert!(bytes.is_empty()),
        other => panic!("Expected raw passthrough, got {other:?}"),
    }
}

#[test]
fn test_weather_kind_routes_to_weather_decoder() {
    let mut buf = vec![0u8; WEATHER_SIZE];
    buf[..10].copy_from_slice(b"2024-03-07");
    buf[11] = 0x01;
    buf[12..16].copy_from_slice(&18.5f32.to_le_bytes());

    match decode_response(ServerKind::Weather, WireFormat::Binary, &buf).unwrap() {
        Decoded::Weather(record) => {
            assert_eq!(record.date, "2024-03-07");
            assert_eq!(record.condition, 1);
            assert_eq!(record.temperature, 18.5);
        }
        other => panic!("Expected weather record, got {other:?}"),
    }
}

#[test]
fn test_weather_kind_propagates_underflow() {
    let buf = vec![0u8; WEATHER_SIZE - 1];
    assert!(matches!(
        decode_response(ServerKind::Weather, WireFormat::Binary, &buf),
        Err(PronosticoError::InsufficientData { .. })
    ));
}

#[test]
fn test_horoscope_kind_routes_to_astro_decoder() {
    let mut buf = vec![1u8, 5, 20, 4, 20, 5];
    buf.extend_from_slice(&4u32.to_le_bytes());
    buf.extend_from_slice(b"bien");

    match decode_response(ServerKind::Horoscope, WireFormat::Binary, &buf).unwrap() {
        Decoded::Astro(record) => {
            assert_eq!(record.sign, 1); // tauro
            assert_eq!(record.mood, "bien");
        }
        other => panic!("Expected astro record, got {other:?}"),
    }
}

#[test]
fn test_horoscope_kind_legacy_json_format() {
    let body = br#"{"sign":2,"sign_compat":6,"date_range":["05-21","06-21"],"mood":"variable"}"#;

    match decode_response(ServerKind::Horoscope, WireFormat::Json, body).unwrap() {
        Decoded::Astro(record) => {
            assert_eq!(record.sign, 2); // geminis
            assert_eq!(record.sign_compat, 6);
            assert_eq!(record.mood, "variable");
        }
        other => panic!("Expected astro record, got {other:?}"),
    }
}

#[test]
fn test_horoscope_kind_legacy_json_parse_error_is_nonfatal() {
    let err = decode_response(ServerKind::Horoscope, WireFormat::Json, b"garbage").unwrap_err();
    assert!(matches!(err, PronosticoError::Json(_)));
    assert!(!err.is_fatal());
}

#[test]
fn test_unrecognized_kind_is_fatal_config_error() {
    let err = "oracle".parse::<ServerKind>().unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("server kind"));
}
