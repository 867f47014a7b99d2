use mem_units::{Bandwidth, BitSize, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Limits {
    memory: Size,
    chunk: BitSize,
    rate: Bandwidth,
}

#[test]
fn test_serialize_bits() {
    let limits = Limits {
        memory: Size::MIB * 64,
        chunk: BitSize::KBIT,
        rate: Bandwidth::MBIT_PER_SECOND * 10,
    };
    let json = serde_json::to_string(&limits).unwrap();
    assert_eq!(json, r#"{"memory":536870912,"chunk":1000,"rate":10000000}"#);
    assert_eq!(serde_json::from_str::<Limits>(&json).unwrap(), limits);
}

#[test]
fn test_deserialize_strings() {
    let limits: Limits = toml::from_str(
        r#"
        memory = "64MiB"
        chunk = "1Kbit"
        rate = "10Mbit/s"
        "#,
    )
    .unwrap();
    assert_eq!(limits.memory, Size::MIB * 64);
    assert_eq!(limits.chunk, BitSize::KBIT);
    assert_eq!(limits.rate, Bandwidth::MBIT_PER_SECOND * 10);
}

#[test]
fn test_deserialize_integers() {
    assert_eq!(serde_json::from_str::<Size>("-8").unwrap(), -Size::BYTE);
    assert_eq!(
        serde_json::from_str::<Size>("-9223372036854775808").unwrap(),
        Size::MAX
    );
    assert!(serde_json::from_str::<Size>("9223372036854775808").is_err());
    let limits: Limits = toml::from_str("memory = 8\nchunk = 1\nrate = 0").unwrap();
    assert_eq!(limits.memory, Size::BYTE);
    assert_eq!(limits.chunk, BitSize::BIT);
    assert_eq!(limits.rate, Bandwidth::ZERO);
}

#[test]
fn test_deserialize_invalid() {
    let error = serde_json::from_str::<Size>(r#""64 MiB""#).unwrap_err();
    assert!(error.to_string().contains("64 MiB"), "{error}");
    assert!(serde_json::from_str::<Bandwidth>(r#""10Mbit""#).is_err());
    assert!(serde_json::from_str::<Size>("1.5").is_err());
    assert!(serde_json::from_str::<Size>("true").is_err());
}
