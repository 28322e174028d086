use std::collections::BTreeSet;

/// Every shipped locale must define exactly the message ids of the fallback
/// (`en-US`), each once. Extra ids usually mean a key was renamed in en-US only.
///
/// New locale: add `ui/i18n/<locale>/brewbloom_ui.ftl` and register it in `LOCALES`.
const FALLBACK: &str = include_str!("../i18n/en-US/brewbloom_ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/brewbloom_ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/brewbloom_ui.ftl")),
];

/// Message ids in definition order. Comments, attributes, terms and indented
/// continuation lines (select arms) are skipped.
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-', '}']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn duplicates(ids: &[String]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .filter(|id| !seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[test]
fn fallback_is_well_formed() {
    let ids = message_ids(FALLBACK);
    assert!(ids.len() > 50, "fallback unexpectedly small ({} ids)", ids.len());
    assert_eq!(duplicates(&ids), BTreeSet::new(), "duplicate ids in en-US");
}

#[test]
fn locales_match_fallback_ids() {
    let expected: BTreeSet<String> = message_ids(FALLBACK).into_iter().collect();
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let ids = message_ids(src);
        let dups = duplicates(&ids);
        let actual: BTreeSet<String> = ids.into_iter().collect();

        let missing: Vec<_> = expected.difference(&actual).cloned().collect();
        let extra: Vec<_> = actual.difference(&expected).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} unknown: {}", extra.join(", ")));
        }
        if !dups.is_empty() {
            failures.push(format!("{locale} duplicated: {dups:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "translation sets diverge from en-US:\n  {}\n\nHint: copy the keys from en-US, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn translations_are_not_left_in_english() {
    // Spot-check a few strings that must differ from the fallback.
    for (locale, src) in LOCALES {
        for id in ["menu-title", "contact-send", "menu-empty"] {
            let english = value_of(FALLBACK, id);
            let translated = value_of(src, id);
            assert_ne!(english, translated, "{locale} {id} still reads `{english}`");
        }
    }
}

fn value_of<'a>(src: &'a str, id: &str) -> &'a str {
    src.lines()
        .find_map(|line| {
            let (key, value) = line.split_once('=')?;
            (key.trim() == id).then(|| value.trim())
        })
        .unwrap_or_else(|| panic!("{id} not defined"))
}
