//! English pluralization for generated table names.
//!
//! Rules, first match wins:
//! - words already ending in a sibilant plural (`classes`, `dishes`) or a
//!   consonant + `ies` (`queries`) are left alone
//! - `is` becomes `es` (`axis` -> `axes`)
//! - consonant + `y` becomes `ies` (`query` -> `queries`)
//! - a sibilant ending (`s`, `x`, `ch`, `sh`) takes `es`
//! - anything else takes `s`
//!
//! Irregular and uncountable words are not special-cased, and `f`/`fe`
//! endings keep their letters (`safe` -> `safes`, `cliff` -> `cliffs`).

const SIBILANT_SUFFIXES: [&str; 4] = ["s", "x", "ch", "sh"];

/// Pluralize the last underscore-delimited segment of a snake_case name.
#[must_use]
pub fn pluralize(name: &str) -> String {
    match name.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize_word(last)),
        None => pluralize_word(name),
    }
}

/// Pluralize a single lowercase word.
#[must_use]
pub fn pluralize_word(word: &str) -> String {
    if word.is_empty() || is_plural(word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("is")
        && !stem.is_empty()
    {
        return format!("{stem}es");
    }

    if let Some(stem) = word.strip_suffix('y')
        && ends_with_consonant(stem)
    {
        return format!("{stem}ies");
    }

    if has_sibilant_ending(word) {
        return format!("{word}es");
    }

    format!("{word}s")
}

fn is_plural(word: &str) -> bool {
    if let Some(stem) = word.strip_suffix("ies") {
        return ends_with_consonant(stem);
    }

    word.strip_suffix("es").is_some_and(has_sibilant_ending)
}

fn has_sibilant_ending(word: &str) -> bool {
    SIBILANT_SUFFIXES
        .iter()
        .any(|suffix| word.ends_with(suffix))
}

fn ends_with_consonant(stem: &str) -> bool {
    stem.chars()
        .last()
        .is_some_and(|c| c.is_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}
