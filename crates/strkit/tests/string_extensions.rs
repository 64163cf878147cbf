#![allow(missing_docs)]

use strkit::{
    BandMask,
    CaseStyle,
    Pipeline,
    TextTransform,
    casing::{Culture, to_title_case_in},
    collapse_adjacent,
    contains_no_case,
    count_exact,
    cut,
    mask_band,
    mask_window,
    multiplex,
    null_exists,
    strip_digits,
    strip_symbols,
    to_body_case,
    to_lower_snake_case,
    to_title_case,
    trim_inside,
    words::for_each_contains,
};

const SOURCE: &str = "++a little Bunny raBBit waNdering in a huge Forest";

const SAMPLES: &[&str] = &[
    SOURCE,
    "",
    " ",
    "a",
    "123 ankara ++ merkez",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "$$$!!!...---",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "İSTANBUL ışık",
];

#[test]
fn test_source_text_walkthrough() {
    let missing: Option<&str> = None;

    assert_eq!(cut(missing, 22), "");
    assert_eq!(cut(SOURCE, 5), "++a l");

    assert_eq!(
        trim_inside(SOURCE),
        "++alittleBunnyraBBitwaNderinginahugeForest"
    );

    assert!(null_exists(Some(&[Some("t1"), None, Some("t2")][..])));
    assert!(!null_exists(Some(&[Some("t1"), Some("t2"), Some("t3")][..])));

    assert!(contains_no_case(SOURCE, "rabbit"));
    assert!(!contains_no_case(SOURCE, "horse"));

    assert_eq!(count_exact(SOURCE, "rabbit"), 1);
    assert_eq!(count_exact(SOURCE, "horse"), 0);

    assert_eq!(
        mask_window(SOURCE, 8, 12),
        "++a littl***********Bit waNdering in a huge Forest"
    );

    let mut seen = Vec::new();
    for_each_contains(SOURCE, "i", |word| seen.push(word.to_string()));
    assert_eq!(seen, vec!["little", "raBBit", "waNdering", "in"]);

    assert_eq!(
        to_title_case(SOURCE),
        "++A Little Bunny Rabbit Wandering In A Huge Forest"
    );
    assert_eq!(
        to_lower_snake_case(SOURCE),
        "++a_little_bunny_ra_b_bit_wa_ndering_in_a_huge_forest"
    );
    assert_eq!(
        collapse_adjacent(SOURCE),
        "+a litle Buny raBit waNdering in a huge Forest"
    );
    assert_eq!(multiplex("#", 21), "######################");
}

#[test]
fn test_body_case_capitalizes_only_once() {
    // Capitalization does not re-trigger after spaces.
    assert_eq!(
        to_body_case(SOURCE),
        "++A little Bunny raBBit waNdering in a huge Forest"
    );
    assert_eq!(to_body_case("hello world"), "Hello world");
}

#[test]
fn test_band_mask() {
    assert_eq!(mask_band("Turkiye", 2, 3, 2), "Tu***ye");
    assert_eq!(
        BandMask::new(2, 3, 2).with_mask_char('#').apply("Turkiye"),
        "Tu###ye"
    );
}

#[test]
fn test_cleaning_chain() {
    assert_eq!(strip_digits("123 ankara ++"), " ankara ++");
    assert_eq!(
        trim_inside(strip_symbols(&strip_digits("123 ankara ++ merkez")).as_str()),
        "ankaramerkez"
    );

    let pipeline: Pipeline = "strip-digits | strip-symbols | trim-inside".parse().unwrap();
    assert_eq!(pipeline.apply("123 ankara ++ merkez"), "ankaramerkez");
}

#[test]
fn test_turkish_title_case() {
    let tr: Culture = "tr-TR".parse().unwrap();
    assert_eq!(to_title_case_in("istanbul IRMAK", &tr), "İstanbul Irmak");
    assert_eq!(to_title_case("istanbul IRMAK"), "Istanbul Irmak");
}

#[test]
fn test_transforms_are_total() {
    for text in SAMPLES {
        for style in [CaseStyle::Title, CaseStyle::Body, CaseStyle::LowerSnake] {
            let _ = style.apply(text);
        }

        let collapsed = collapse_adjacent(text);
        assert!(collapsed.chars().count() <= text.chars().count());
        assert_eq!(collapse_adjacent(&collapsed), collapsed, "{text:?}");

        assert_eq!(
            mask_window(text, 2, 40).chars().count(),
            text.chars().count()
        );
        assert!(!strip_digits(text).chars().any(|c| c.is_ascii_digit()));
        assert!(!trim_inside(*text).contains(' '));
        assert!(cut(*text, 3).chars().count() <= 3);
    }
}

#[cfg(feature = "digest")]
#[test]
fn test_digest() {
    assert_eq!(
        strkit::digest::sha256_hex(SOURCE),
        "9bbdadb281d35bfd90270a06abe0f12ec061957f38a36d8aceefb95630cac6d1"
    );
}

#[cfg(feature = "random")]
#[test]
fn test_random_string() {
    let text = strkit::random::random_string(12);
    assert_eq!(text.chars().count(), 12);
    assert!(
        text.chars()
            .all(|c| strkit::random::DEFAULT_ALPHABET.contains(c))
    );
}

#[cfg(feature = "codec")]
#[test]
fn test_codec_round_trip() {
    for text in SAMPLES {
        let encoded = strkit::codec::compress(text).unwrap();
        assert_eq!(&strkit::codec::decompress(&encoded).unwrap(), text);
    }
}

#[cfg(feature = "rayon")]
#[test]
fn test_parallel_matches_sequential() {
    let pipeline: Pipeline = "singularize | lower-snake | mask-band:1,2,1".parse().unwrap();
    let batch: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();

    let parallel = strkit::rayon::ParallelPipeline::new(pipeline.clone());
    assert_eq!(parallel.apply_batch(&batch), pipeline.apply_batch(&batch));
}
