use codein_sdk::error::CodeInError;
use codein_sdk::types::{ArgData, ChunkData, ChunkPointer};
use codein_sdk::utils::{decode_code_points, extract_commit_message};

#[test]
fn decodes_basic_escape_sequence() {
    assert_eq!(decode_code_points("/u0041/u0042"), "AB");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(decode_code_points("hello world"), "hello world");
    assert_eq!(decode_code_points(""), "");
}

#[test]
fn decodes_escapes_embedded_in_text() {
    assert_eq!(decode_code_points(r#"{"emoji":"/u0041"}"#), r#"{"emoji":"A"}"#);
}

#[test]
fn decodes_six_digit_code_points() {
    assert_eq!(decode_code_points("/u01F600"), "\u{1F600}");
}

#[test]
fn longest_hex_run_wins() {
    // Six digits are consumed even when four would also form a valid escape
    assert_eq!(decode_code_points("/u004111"), "\u{4111}");
}

#[test]
fn short_hex_runs_are_left_untouched() {
    assert_eq!(decode_code_points("/u41"), "/u41");
    assert_eq!(decode_code_points("/u"), "/u");
}

#[test]
fn non_hex_sequences_are_left_untouched() {
    assert_eq!(decode_code_points("/uzzzz"), "/uzzzz");
    assert_eq!(decode_code_points("a/b"), "a/b");
}

#[test]
fn invalid_code_points_are_left_untouched() {
    // Surrogate range
    assert_eq!(decode_code_points("/ud800"), "/ud800");
    // Beyond the Unicode range
    assert_eq!(decode_code_points("/uFFFFFF"), "/uFFFFFF");
}

#[test]
fn commit_message_extracted_from_head_payload() {
    let info = ArgData {
        type_field: Some("json".to_string()),
        offset: Some("commit: hello".to_string()),
        ..Default::default()
    };
    assert_eq!(extract_commit_message(&info).as_deref(), Some("hello"));
}

#[test]
fn commit_message_requires_json_type_field() {
    let info = ArgData {
        type_field: Some("raw".to_string()),
        offset: Some("commit: hello".to_string()),
        ..Default::default()
    };
    assert_eq!(extract_commit_message(&info), None);
}

#[test]
fn commit_message_requires_marker() {
    let info = ArgData {
        type_field: Some("json".to_string()),
        offset: Some("no marker here".to_string()),
        ..Default::default()
    };
    assert_eq!(extract_commit_message(&info), None);

    let empty = ArgData {
        type_field: Some("json".to_string()),
        offset: Some("commit: ".to_string()),
        ..Default::default()
    };
    assert_eq!(extract_commit_message(&empty), None);
}

#[test]
fn chunk_pointer_distinguishes_sentinel_from_ids() {
    assert_eq!(ChunkPointer::parse("Genesis").unwrap(), ChunkPointer::Genesis);
    assert_eq!(
        ChunkPointer::parse("5Nf8...sig").unwrap(),
        ChunkPointer::Tx("5Nf8...sig".to_string())
    );
    assert!(matches!(
        ChunkPointer::parse(""),
        Err(CodeInError::BrokenChain(_))
    ));
}

#[test]
fn chunk_data_requires_code_and_pointer() {
    let valid = ArgData {
        code: Some("fragment".to_string()),
        before_tx: Some("Genesis".to_string()),
        ..Default::default()
    };
    let chunk = ChunkData::try_from(valid).unwrap();
    assert_eq!(chunk.code, "fragment");
    assert_eq!(chunk.before, ChunkPointer::Genesis);

    let no_code = ArgData {
        before_tx: Some("Genesis".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ChunkData::try_from(no_code),
        Err(CodeInError::MalformedChunk(_))
    ));

    let no_pointer = ArgData {
        code: Some("fragment".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ChunkData::try_from(no_pointer),
        Err(CodeInError::MalformedChunk(_))
    ));
}
