//! Display titles derived from solution file names
//!
//! `03_merge_lists.py` becomes `Merge Lists`: the extension and ordinal
//! prefix are dropped, underscores become spaces and words are title-cased.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[._\s]*").expect("ordinal prefix pattern is valid"));

/// Turn a solution file name into a display title
pub fn clean_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    title_case(&strip_ordinal_prefix(stem).replace('_', " "))
}

/// Remove a leading `03.` / `12_` / `7 ` style ordinal
pub fn strip_ordinal_prefix(name: &str) -> &str {
    match ORDINAL_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Upper-case the first cased letter of each word, lower-case the rest
///
/// A word begins after any character that has no case, so `3sum` becomes
/// `3Sum` and `o'neil` becomes `O'Neil`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if !cased {
            out.push(c);
        } else if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }

    out
}
