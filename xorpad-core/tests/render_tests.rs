#![allow(missing_docs)]
use rand::Rng;
use xorpad_core::render::{BASE64_ALPHABET, RENDERED_LEN, render_base64};
use xorpad_core::{compare, crypto};

fn sampled_values(count: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random()).collect()
}

#[test]
fn test_rendering_is_always_ten_alphabet_characters() {
    for value in sampled_values(1000) {
        let rendered = render_base64(value);
        assert_eq!(rendered.len(), RENDERED_LEN);
        assert!(
            rendered.bytes().all(|b| BASE64_ALPHABET.contains(&b)),
            "unexpected character in {rendered:?}"
        );
    }
}

#[test]
fn test_rendering_is_deterministic() {
    for value in sampled_values(100) {
        assert_eq!(render_base64(value), render_base64(value));
    }
}

#[test]
fn test_known_renderings() {
    assert_eq!(render_base64(0), "AAAAAAAAAA");
    assert_eq!(render_base64(63), "/AAAAAAAAA");
    assert_eq!(render_base64(u64::MAX), "//////////");
}

#[test]
fn test_top_four_bits_are_discarded() {
    for value in sampled_values(1000) {
        assert_eq!(render_base64(value), render_base64(value | (0xF << 60)));
        assert_eq!(render_base64(value), render_base64(value & !(0xF << 60)));
    }
}

#[test]
fn test_demo_literals_render_to_pinned_string() {
    // End-to-end regression baseline for the original program's output.
    let result = crypto::encrypt(crypto::DEMO_MESSAGE, crypto::DEMO_KEY);
    assert_eq!(render_base64(result), "6dnMim10pm");

    let report = compare::compare(crypto::DEMO_MESSAGE, crypto::DEMO_KEY);
    assert!(report.all_agree());
    assert_eq!(render_base64(report.descending), "6dnMim10pm");
}
