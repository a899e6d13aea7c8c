// Variant key unit tests

use memegen::caption::{StyleFields, VariantKey};
use std::path::PathBuf;

fn sized(width: u32, height: u32) -> StyleFields {
    StyleFields {
        width: Some(width),
        height: Some(height),
        ..Default::default()
    }
}

#[test]
fn test_plain_request_maps_to_base() {
    let key = VariantKey::derive("fry", "not_sure/if_trolling", &StyleFields::default());
    assert_eq!(key.base(), "fry/not_sure/if_trolling");
    assert_eq!(key.to_string(), key.base());
    assert_eq!(key.template_key(), "fry");
    assert_eq!(key.text_path(), "not_sure/if_trolling");
}

#[test]
fn test_size_changes_key() {
    let a = VariantKey::derive("fry", "a/b", &sized(500, 400));
    let b = VariantKey::derive("fry", "a/b", &sized(400, 500));
    assert_ne!(a, b);
    assert_eq!(a.base(), b.base());
}

#[test]
fn test_same_fields_same_key_across_calls() {
    let fields = StyleFields {
        style: Some("default".into()),
        font: Some("impact".into()),
        ..sized(320, 240)
    };
    let first = VariantKey::derive("fry", "a/b", &fields).to_string();
    let second = VariantKey::derive("fry", "a/b", &fields.clone()).to_string();
    assert_eq!(first, second);
}

#[test]
fn test_text_path_not_part_of_digest() {
    let a = VariantKey::derive("fry", "a/b", &sized(10, 10));
    let b = VariantKey::derive("fry", "c/d", &sized(10, 10));
    assert_eq!(a.digest(), b.digest());
    assert_ne!(a.relative_path(), b.relative_path());
}

#[test]
fn test_relative_path_under_template_dir() {
    let key = VariantKey::derive("fry", "a/b", &sized(10, 10));
    assert!(key.relative_path().starts_with(PathBuf::from("fry")));
    assert!(key.relative_path().to_string_lossy().ends_with(".img"));
}
