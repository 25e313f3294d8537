use std::collections::{BTreeSet, HashSet};

/// Translation completeness lint.
///
/// Every non-fallback locale must define at least the message ids found
/// in the fallback (en-US) `csprime-ui.ftl`. The parser is deliberately
/// shallow: comment lines (`#`) and attribute/continuation lines are
/// skipped, anything of the form `key =` counts as a definition.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/csprime-ui.ftl`
/// 2. Copy all keys from `en-US/csprime-ui.ftl` and translate the values
/// 3. Register the locale in the `locales` slice below
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/csprime-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/csprime-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/csprime-ui.ftl");

    let fallback_keys = message_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_duplicate_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        ("fr-FR", FR_FR),
        // Register new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_duplicate_keys(src, locale);

        let keys = message_keys(src);
        let missing: BTreeSet<&String> =
            fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .into_iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message ids from a Fluent file (shallow heuristic).
fn message_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(parse_key).collect()
}

fn parse_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_at(line.find('=')?);
    let key = left.trim();
    let plausible = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@');
    plausible.then(|| key.to_string())
}

/// A key defined twice in one file is almost always a merge accident.
fn assert_no_duplicate_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();

    for line in src.lines() {
        if let Some(key) = parse_key(line) {
            if !seen.insert(key.clone()) {
                duplicates.insert(key);
            }
        }
    }

    if !duplicates.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            duplicates.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
