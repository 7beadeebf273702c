//! End-to-end decode tests through files and writers

use avj_io::{
    decode_file, execute_decode, AvjError, DecodeOptions, DecodeRequest, InputSource, Limits,
    OutputSink,
};
use serde_json::{json, Value};
use std::fs;
use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

const SAMPLE: &str = r#"{
    "name_string_1": {"S": "Alice Smith"},
    "age_number_1": {"N": "42"},
    "ratio_number_2": {"N": "0.25"},
    "joined_string_1": {"S": "2023-01-01T00:00:00Z"},
    "active_bool_1": {"BOOL": "true"},
    "deleted_null_1": {"NULL": "true"},
    "missing_string_1": {"S": ""},
    "broken_number_1": {"N": "forty-two"},
    "untyped": {"S": "dropped"},
    "tags_list_1": {"L": [{"S": "a"}, {"N": "1"}, {"NULL": "true"}]},
    "address_map_1": {"M": {
        "city_string_1": {"S": "New York"},
        "geo_map_1": {"M": {"M": {"lat_number_1": {"N": "40.7"}}}}
    }}
}"#;

fn expected_sample() -> Value {
    json!([{
        "name_string_1": "AliceSmith",
        "age_number_1": 42,
        "ratio_number_2": 0.25,
        "joined_string_1": 1_672_531_200,
        "active_bool_1": true,
        "deleted_null_1": null,
        "tags_list_1": ["a", 1],
        "address_map_1": {
            "city_string_1": "NewYork",
            "geo_map_1": { "lat_number_1": 40.7 }
        }
    }])
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn decode_file_matches_expected_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, SAMPLE).unwrap();

    let value = decode_file(&path, &DecodeOptions::default()).unwrap();
    assert_eq!(value, expected_sample());
}

#[test]
fn decode_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = decode_file(dir.path().join("absent.json"), &DecodeOptions::default());
    assert!(matches!(result, Err(AvjError::Io(_))));
}

#[test]
fn decode_file_invalid_json_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{\"name_string_1\": ").unwrap();

    let result = decode_file(&path, &DecodeOptions::default());
    assert!(matches!(result, Err(AvjError::Json(_))));
}

#[test]
fn execute_decode_writes_file_and_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    fs::write(&input, SAMPLE).unwrap();

    let summary = execute_decode(DecodeRequest {
        input: InputSource::Path(input),
        output: OutputSink::Path(output.clone()),
        options: DecodeOptions::default(),
    })
    .unwrap();

    assert_eq!(summary.input_bytes, SAMPLE.len());
    assert_eq!(summary.fields_in, 11);
    assert_eq!(summary.fields_out, 8);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("[\n  {\n"));
    assert!(written.ends_with("]\n"));
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value, expected_sample());
}

#[test]
fn execute_decode_compact_to_writer() {
    let buffer = SharedBuffer::default();
    let summary = execute_decode(DecodeRequest {
        input: InputSource::Reader(Box::new(Cursor::new(r#"{"b_bool_1":{"BOOL":"0"}}"#))),
        output: OutputSink::Writer(Box::new(buffer.clone())),
        options: DecodeOptions {
            pretty: false,
            ..DecodeOptions::default()
        },
    })
    .unwrap();

    assert_eq!(summary.fields_out, 1);
    let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(written, "[{\"b_bool_1\":false}]\n");
}

#[test]
fn execute_decode_enforces_input_limit() {
    let result = execute_decode(DecodeRequest {
        input: InputSource::Reader(Box::new(Cursor::new(SAMPLE))),
        output: OutputSink::Writer(Box::new(Vec::new())),
        options: DecodeOptions {
            limits: Limits {
                max_input_bytes: 16,
                ..Limits::default()
            },
            pretty: true,
        },
    });
    assert!(matches!(result, Err(AvjError::LimitExceeded(_))));
}

#[test]
fn execute_decode_rejects_array_root() {
    let result = execute_decode(DecodeRequest {
        input: InputSource::Reader(Box::new(Cursor::new("[]"))),
        output: OutputSink::Writer(Box::new(Vec::new())),
        options: DecodeOptions::default(),
    });
    assert!(matches!(
        result,
        Err(AvjError::NotAnObject { found: "array" })
    ));
}

#[test]
fn execute_decode_null_root_writes_empty_document() {
    let buffer = SharedBuffer::default();
    let summary = execute_decode(DecodeRequest {
        input: InputSource::Reader(Box::new(Cursor::new("null\n"))),
        output: OutputSink::Writer(Box::new(buffer.clone())),
        options: DecodeOptions {
            pretty: false,
            ..DecodeOptions::default()
        },
    })
    .unwrap();

    assert_eq!(summary.fields_in, 0);
    assert_eq!(summary.fields_out, 0);
    let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(written, "[{}]\n");
}
