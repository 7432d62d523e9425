//! Property tests for title cleanup.

use proptest::prelude::*;

use practice_log::clean_title;

fn snake_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z]{1,8}", 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any file name yields a title without panicking.
    #[test]
    fn property_clean_title_never_panics(name in "\\PC{0,32}") {
        let _ = clean_title(&name);
    }

    /// PROPERTY: titles never contain underscores.
    #[test]
    fn property_clean_title_has_no_underscores(name in "[0-9A-Za-z_. ]{0,24}\\.py") {
        prop_assert!(!clean_title(&name).contains('_'));
    }

    /// PROPERTY: cleaning an already clean title changes nothing.
    #[test]
    fn property_clean_title_is_idempotent(
        ordinal in proptest::option::of(0u32..1000),
        words in snake_words(),
    ) {
        let prefix = ordinal.map(|n| format!("{:02}_", n)).unwrap_or_default();
        let file_name = format!("{}{}.py", prefix, words.join("_"));

        let once = clean_title(&file_name);
        let twice = clean_title(&format!("{}.py", once));
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.split(' ').count(), words.len());
    }
}
