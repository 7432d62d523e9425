//! Property tests for date folder parsing.

use proptest::prelude::*;

use practice_log::DateKey;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: month and day are always zero-padded to two digits.
    #[test]
    fn property_folder_date_is_padded(
        year in 1000u32..=9999,
        month in 0u32..100,
        day in 0u32..100,
        suffix in "[a-z _-]{0,8}",
    ) {
        let folder = format!("{}年{}月{}日{}", year, month, day, suffix);
        let key = DateKey::parse_folder_name(&folder);
        let expected = format!("{:04}-{:02}-{:02}", year, month, day);
        prop_assert_eq!(key.as_ref().map(DateKey::as_str), Some(expected.as_str()));
    }

    /// PROPERTY: a name that does not start with four digits never parses.
    #[test]
    fn property_non_date_names_are_rejected(name in "[A-Za-z_ .-][A-Za-z0-9_ .-]{0,16}") {
        prop_assert!(DateKey::parse_folder_name(&name).is_none());
    }

    /// PROPERTY: ISO keys order the same way as the dates they encode.
    #[test]
    fn property_keys_sort_chronologically(
        a in (1000u32..=9999, 1u32..=12, 1u32..=28),
        b in (1000u32..=9999, 1u32..=12, 1u32..=28),
    ) {
        let key = |(y, m, d): (u32, u32, u32)| {
            DateKey::parse_folder_name(&format!("{}年{}月{}日", y, m, d))
        };
        let (ka, kb) = (key(a), key(b));
        prop_assert!(ka.is_some() && kb.is_some());
        prop_assert_eq!(ka.cmp(&kb), a.cmp(&b));
    }
}
