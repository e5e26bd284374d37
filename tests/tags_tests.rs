use json_lens::tags::{
    classify, number_tags, pick_primary, string_tags, HexAlphaFormat, RecognitionConfig, TagKind,
    ValueTag,
};
use serde_json::json;

fn kinds(tags: &[ValueTag]) -> Vec<TagKind> {
    tags.iter().map(|t| t.kind()).collect()
}

#[test]
fn mobile_numeral_string_is_a_phone() {
    let tags = classify(&json!("13800138000"), &RecognitionConfig::default());
    assert_eq!(kinds(&tags), vec![TagKind::Phone]);
    assert_eq!(pick_primary(&tags).unwrap().kind(), TagKind::Phone);
}

#[test]
fn formatted_phone_numbers_match_after_stripping_separators() {
    let config = RecognitionConfig::default();
    assert_eq!(kinds(&string_tags("+1 (415) 555-0133", &config)), vec![TagKind::Phone]);
    assert_eq!(string_tags("+1 (415) 555-013", &config).len(), 1); // still 10 digits
    assert!(string_tags("12-34", &config).is_empty()); // too few digits
}

#[test]
fn millisecond_epoch_number_is_primarily_a_time() {
    let tags = classify(&json!(1_759_251_661_333i64), &RecognitionConfig::default());
    // A 13-digit integer also passes the generic phone digit test; the
    // priority order resolves the badge.
    assert_eq!(kinds(&tags), vec![TagKind::Phone, TagKind::Time]);

    match pick_primary(&tags).unwrap() {
        ValueTag::Time { display, .. } => assert_eq!(display, "2025/10/01 01:01:01.333"),
        other => panic!("expected time tag, got {:?}", other),
    }
}

#[test]
fn second_epoch_string_prefers_time_over_phone() {
    let tags = classify(&json!("1380013800"), &RecognitionConfig::default());
    assert_eq!(kinds(&tags), vec![TagKind::Phone, TagKind::Time]);
    assert_eq!(pick_primary(&tags).unwrap().kind(), TagKind::Time);
}

#[test]
fn email_addresses_are_recognized() {
    let tags = classify(&json!("user.name+tag@example.co"), &RecognitionConfig::default());
    assert_eq!(kinds(&tags), vec![TagKind::Email]);
    match pick_primary(&tags).unwrap() {
        ValueTag::Email { address } => assert_eq!(address, "user.name+tag@example.co"),
        other => panic!("expected email tag, got {:?}", other),
    }
}

#[test]
fn links_normalize_and_www_is_rewritten() {
    let config = RecognitionConfig::default();

    match &string_tags("https://example.com/path", &config)[..] {
        [ValueTag::Link { href }] => assert_eq!(href, "https://example.com/path"),
        other => panic!("expected link tag, got {:?}", other),
    }

    match &string_tags("www.example.com", &config)[..] {
        [ValueTag::Link { href }] => assert_eq!(href, "https://www.example.com/"),
        other => panic!("expected link tag, got {:?}", other),
    }

    assert!(string_tags("ftp://example.com", &config).is_empty());
}

#[test]
fn color_strings_carry_render_ready_payloads() {
    let tags = classify(&json!("#7c3aed"), &RecognitionConfig::default());
    match &tags[..] {
        [ValueTag::Color { raw, css_text, text_color, rgba }] => {
            assert_eq!(raw, "#7c3aed");
            assert_eq!(css_text, "rgba(124, 58, 237, 1)");
            assert_eq!(text_color, "#ffffff");
            assert_eq!((rgba.r, rgba.g, rgba.b), (124, 58, 237));
        }
        other => panic!("expected color tag, got {:?}", other),
    }
}

#[test]
fn eight_digit_hex_follows_the_configured_interpretation() {
    let rgba_config = RecognitionConfig::default();
    match &string_tags("#A67C3AED", &rgba_config)[..] {
        [ValueTag::Color { css_text, .. }] => assert_eq!(css_text, "rgba(166, 124, 58, 0.929)"),
        other => panic!("expected color tag, got {:?}", other),
    }

    let argb_config = RecognitionConfig { hex_alpha: HexAlphaFormat::Argb, ..rgba_config };
    match &string_tags("#A67C3AED", &argb_config)[..] {
        [ValueTag::Color { css_text, .. }] => assert_eq!(css_text, "rgba(124, 58, 237, 0.651)"),
        other => panic!("expected color tag, got {:?}", other),
    }
}

#[test]
fn base64_png_payload_is_primarily_an_image() {
    let payload = format!("iVBORw0KGgo{}", "A".repeat(53));
    assert_eq!(payload.len(), 64);

    let tags = classify(&json!(payload), &RecognitionConfig::default());
    match pick_primary(&tags).unwrap() {
        ValueTag::Image { mime, data_url } => {
            assert_eq!(mime, "image/png");
            assert!(data_url.starts_with("data:image/png;base64,iVBORw0KGgo"));
        }
        other => panic!("expected image tag, got {:?}", other),
    }
}

#[test]
fn disabled_recognizers_contribute_nothing() {
    let config = RecognitionConfig { time: false, ..RecognitionConfig::default() };
    let tags = classify(&json!("1380013800"), &config);
    assert_eq!(kinds(&tags), vec![TagKind::Phone]);

    let muted = RecognitionConfig {
        phone: false,
        time: false,
        email: false,
        link: false,
        color: false,
        image: false,
        ..RecognitionConfig::default()
    };
    assert!(classify(&json!("13800138000"), &muted).is_empty());
}

#[test]
fn numbers_only_run_phone_and_time() {
    let config = RecognitionConfig::default();

    let phone = number_tags(&serde_json::Number::from(13_800_138_000u64), &config);
    assert_eq!(kinds(&phone), vec![TagKind::Phone]);

    assert!(number_tags(&serde_json::Number::from(-5i64), &config).is_empty());

    let fractional = serde_json::Number::from_f64(1.5).unwrap();
    assert!(number_tags(&fractional, &config).is_empty());
}

#[test]
fn containers_and_null_carry_no_tags() {
    let config = RecognitionConfig::default();
    assert!(classify(&json!(null), &config).is_empty());
    assert!(classify(&json!(true), &config).is_empty());
    assert!(classify(&json!([1, 2]), &config).is_empty());
    assert!(classify(&json!({"a": 1}), &config).is_empty());
}

#[test]
fn classification_is_deterministic() {
    let value = json!("1380013800");
    let config = RecognitionConfig::default();

    let first = classify(&value, &config);
    let second = classify(&value, &config);
    assert_eq!(first, second);
    assert_eq!(pick_primary(&first), pick_primary(&second));
}

#[test]
fn primary_of_empty_tag_list_is_none() {
    assert_eq!(pick_primary(&[]), None);
}
