use causeway::{wrap, ErrorCode, Failure, NamedErrorRegistry, SourceLocation, Trace};
use std::io;

#[test]
fn trace_survives_json() {
    let err = wrap!(Failure::from(io::Error::new(io::ErrorKind::Other, "foo")), "reading", "id", 5);
    let trace = err.trace();

    let json = serde_json::to_string(&trace).unwrap();
    let decoded: Trace = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, trace);
    let rebuilt = decoded.rematerialize(&NamedErrorRegistry::new()).unwrap();
    assert_eq!(rebuilt.to_string(), err.to_string());
}

#[test]
fn error_code_serializes_as_number() {
    let json = serde_json::to_string(&ErrorCode::new(17)).unwrap();
    assert_eq!(json, "17");
}

#[test]
fn source_location_fields() {
    let location = SourceLocation { host: Some("api-3".into()), file: "src/db.rs".into(), line: 9 };
    let value = serde_json::to_value(&location).unwrap();

    assert_eq!(value["host"], "api-3");
    assert_eq!(value["file"], "src/db.rs");
    assert_eq!(value["line"], 9);
}
