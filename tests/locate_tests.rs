use json_lens::locate::{build_pointer_index, find_path_position, path_to_pointer, PathSegment};

#[test]
fn root_offset_skips_leading_whitespace() {
    let text = "  \n {\"a\": 1}";
    let index = build_pointer_index(text).unwrap();
    assert_eq!(index.get(""), Some(4));
}

#[test]
fn object_member_offset_points_at_key_quote() {
    let text = r#"{"alpha": 1, "beta": {"gamma": true}}"#;
    let index = build_pointer_index(text).unwrap();

    assert_eq!(index.get(""), Some(0));
    assert_eq!(index.get("/alpha"), Some(1));
    assert_eq!(index.get("/beta"), Some(13));
    assert_eq!(index.get("/beta/gamma"), Some(22));
}

#[test]
fn array_element_offset_points_at_first_value_character() {
    let text = r#"[10, [true, null]]"#;
    let index = build_pointer_index(text).unwrap();

    assert_eq!(index.get(""), Some(0));
    assert_eq!(index.get("/0"), Some(1));
    assert_eq!(index.get("/1"), Some(5));
    assert_eq!(index.get("/1/0"), Some(6));
    assert_eq!(index.get("/1/1"), Some(12));
}

#[test]
fn keys_with_pointer_special_characters_are_escaped() {
    let text = r#"{"a/b": 1, "c~d": 2}"#;
    let index = build_pointer_index(text).unwrap();

    assert_eq!(index.get("/a~1b"), Some(1));
    assert_eq!(index.get("/c~0d"), Some(11));
}

#[test]
fn unicode_escapes_decode_into_pointer_keys() {
    let text = "{\"\\u0041\": 1}";
    let index = build_pointer_index(text).unwrap();
    assert_eq!(index.get("/A"), Some(1));
}

#[test]
fn surrogate_pairs_combine_and_lone_surrogates_fail() {
    let text = r#"{"😀": 1}"#;
    let index = build_pointer_index(text).unwrap();
    assert_eq!(index.get("/😀"), Some(1));

    assert!(build_pointer_index(r#"{"\ud83d": 1}"#).is_err());
}

#[test]
fn offsets_are_character_offsets_not_bytes() {
    let text = r#"{"é": 1, "b": 2}"#;
    let index = build_pointer_index(text).unwrap();
    // "é" is two bytes but one character; /b sits at character 9.
    assert_eq!(index.get("/b"), Some(9));
}

#[test]
fn duplicate_keys_keep_the_first_offset() {
    let text = r#"{"k": 1, "k": 2}"#;
    let index = build_pointer_index(text).unwrap();
    assert_eq!(index.get("/k"), Some(1));
}

#[test]
fn empty_containers_contribute_only_their_own_path() {
    let index = build_pointer_index("{}").unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(""), Some(0));

    let index = build_pointer_index("  []").unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(""), Some(2));
}

#[test]
fn number_grammar_is_consumed_by_position() {
    let text = "[1.5e3, -0.2, 0]";
    let index = build_pointer_index(text).unwrap();

    assert_eq!(index.get("/0"), Some(1));
    assert_eq!(index.get("/1"), Some(8));
    assert_eq!(index.get("/2"), Some(14));
}

#[test]
fn trailing_content_after_root_is_ignored() {
    let index = build_pointer_index("true  garbage").unwrap();
    assert_eq!(index.get(""), Some(0));
}

#[test]
fn scan_errors_surface_from_build() {
    assert!(build_pointer_index("[1, ]").is_err());
    assert!(build_pointer_index("{\"a\" 1}").is_err());
    assert!(build_pointer_index("{\"a\": 1").is_err());
    assert!(build_pointer_index("\"unterminated").is_err());
    assert!(build_pointer_index("01").is_err());
    assert!(build_pointer_index("tru").is_err());
    assert!(build_pointer_index("\"bad\\escape\"").is_err());
    assert!(build_pointer_index("").is_err());
}

#[test]
fn find_path_position_returns_none_on_malformed_text() {
    let path = [PathSegment::Key("a".to_string())];
    assert_eq!(find_path_position("{\"a\": }", &path), None);
    assert_eq!(find_path_position("", &path), None);
}

#[test]
fn find_path_position_resolves_nested_paths() {
    let text = r#"{"beta": {"gamma": true}}"#;
    let path = [
        PathSegment::Key("beta".to_string()),
        PathSegment::Key("gamma".to_string()),
    ];
    assert_eq!(find_path_position(text, &path), Some(10));

    assert_eq!(find_path_position(text, &[]), Some(0));
    assert_eq!(find_path_position(text, &[PathSegment::Key("missing".to_string())]), None);
}

#[test]
fn pointer_encoding_round_trips_segment_kinds() {
    assert_eq!(path_to_pointer(&[]), "");
    assert_eq!(
        path_to_pointer(&[PathSegment::Key("a/b".to_string()), PathSegment::Index(3)]),
        "/a~1b/3"
    );
    assert_eq!(
        path_to_pointer(&[PathSegment::from("x"), PathSegment::from(0usize)]),
        "/x/0"
    );
}
