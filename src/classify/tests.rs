//! Classifier tests

use super::*;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Kind Tests
// ============================================================================

#[test]
fn test_classify_primitive_kinds() {
    let classifier = FormatClassifier::new();

    assert_eq!(classifier.classify(&json!(null)).kind(), ValueKind::Null);
    assert_eq!(classifier.classify(&json!(true)).kind(), ValueKind::Bool);
    assert_eq!(classifier.classify(&json!(42)).kind(), ValueKind::Int);
    assert_eq!(classifier.classify(&json!(4.2)).kind(), ValueKind::Float);
    assert_eq!(classifier.classify(&json!("hi")).kind(), ValueKind::String);
    assert_eq!(classifier.classify(&json!([1])).kind(), ValueKind::Array);
    assert_eq!(classifier.classify(&json!({})).kind(), ValueKind::Object);
}

#[test]
fn test_classify_integral_float_as_int() {
    let classifier = FormatClassifier::new();
    assert_eq!(classifier.classify(&json!(3.0)), Classified::Int(3.0));
    assert_eq!(classifier.classify(&json!(-7)), Classified::Int(-7.0));
    assert_eq!(classifier.classify(&json!(2.5)), Classified::Float(2.5));
}

#[test]
fn test_classify_large_unsigned() {
    let classifier = FormatClassifier::new();
    let value = json!(u64::MAX);
    assert_eq!(classifier.classify(&value).kind(), ValueKind::Int);
}

#[test]
fn test_classify_borrows_payload() {
    let classifier = FormatClassifier::new();
    let value = json!([1, 2, 3]);
    match classifier.classify(&value) {
        Classified::Array(items) => assert_eq!(items.len(), 3),
        other => panic!("expected array, got {other:?}"),
    }
}

// ============================================================================
// Format Tests
// ============================================================================

#[test_case("https://google.com/#", Some(StringFormat::Uri) ; "uri")]
#[test_case("http://api.example.com", Some(StringFormat::Uri) ; "plain http uri")]
#[test_case("eric@stackhero.dev", Some(StringFormat::Email) ; "email")]
#[test_case("AEA9CF21-965A-46C0-A4DD-3652B0BDC56D", Some(StringFormat::Uuid) ; "uuid")]
#[test_case("google.com", Some(StringFormat::Hostname) ; "hostname")]
#[test_case("192.168.1.0", Some(StringFormat::Ipv4) ; "ipv4")]
#[test_case("2001:db8:1234::1", Some(StringFormat::Ipv6) ; "ipv6")]
#[test_case("2019-01-01 00:00:00.000Z", Some(StringFormat::DateTime) ; "space datetime")]
#[test_case("2024-01-15T10:30:00+02:00", Some(StringFormat::DateTime) ; "offset datetime")]
#[test_case("2016-05-25", Some(StringFormat::Date) ; "date")]
#[test_case("09:24:15", Some(StringFormat::Time) ; "time")]
#[test_case("+447456001234", Some(StringFormat::Phone) ; "phone")]
#[test_case("US", Some(StringFormat::Country) ; "country")]
#[test_case("ES", Some(StringFormat::Country) ; "another country")]
#[test_case("EUR", Some(StringFormat::Currency) ; "currency")]
#[test_case("hello world", None ; "free text")]
#[test_case("not a date", None ; "sentence")]
#[test_case("2020-13-45", None ; "impossible date")]
#[test_case("25:61:00", None ; "impossible time")]
#[test_case("us", None ; "lowercase country")]
#[test_case("", None ; "empty string")]
fn test_detect_format(input: &str, expected: Option<StringFormat>) {
    let classifier = FormatClassifier::new();
    assert_eq!(classifier.detect_format(input), expected);
}

#[test]
fn test_classify_string_carries_format() {
    let classifier = FormatClassifier::new();
    let value = json!("2020-12-01");
    assert_eq!(
        classifier.classify(&value),
        Classified::String {
            value: "2020-12-01",
            format: Some(StringFormat::Date)
        }
    );
}

#[test]
fn test_disabled_detection() {
    let classifier = FormatClassifier::new()
        .with_datetime_detection(false)
        .with_uri_detection(false);

    assert_eq!(classifier.detect_format("2020-12-01"), None);
    assert_eq!(classifier.detect_format("https://example.com"), None);
    assert_eq!(
        classifier.detect_format("john@example.com"),
        Some(StringFormat::Email)
    );

    let plain = FormatClassifier::with_detection(FormatDetection::none());
    assert_eq!(plain.detect_format("550e8400-e29b-41d4-a716-446655440000"), None);
}

#[test]
fn test_json_schema_format_names() {
    assert_eq!(StringFormat::DateTime.json_schema_format(), Some("date-time"));
    assert_eq!(StringFormat::Ipv6.json_schema_format(), Some("ipv6"));
    assert_eq!(StringFormat::Country.json_schema_format(), None);
    assert_eq!(StringFormat::Phone.to_string(), "phone");
}

#[test]
fn test_format_serde_names() {
    let json = serde_json::to_value(StringFormat::DateTime).unwrap();
    assert_eq!(json, json!("date-time"));

    let format: StringFormat = serde_json::from_value(json!("ipv4")).unwrap();
    assert_eq!(format, StringFormat::Ipv4);
}
