//! Length capping for generated identifiers.
//!
//! A name is assembled from an optional configured prefix and a list of
//! parts joined with `_`. When the result is longer than the cap, parts are
//! abbreviated in order, one underscore-delimited segment at a time, by
//! dropping the lowercase vowels that follow the segment's first letter.
//! The configured prefix and parts marked as fixed are never abbreviated.

use tracing::warn;

///
/// NamePart
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamePart {
    text: String,
    abbreviate: bool,
}

impl NamePart {
    /// A part that may be abbreviated to meet the cap.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            abbreviate: true,
        }
    }

    /// A part that is always kept as written.
    #[must_use]
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            abbreviate: false,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

///
/// NameParts
///
/// Builder for a single identifier: `prefix + part ("_" part)*`.
/// Empty parts are skipped together with their separator.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameParts {
    prefix: String,
    parts: Vec<NamePart>,
}

impl NameParts {
    #[must_use]
    pub fn new(prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.unwrap_or_default().to_string(),
            parts: Vec::new(),
        }
    }

    #[must_use]
    pub fn push(mut self, part: NamePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Length in characters of the joined name.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut parts: usize = 0;
        let mut len = self.prefix.chars().count();

        for part in self.parts.iter().filter(|p| !p.text.is_empty()) {
            len += part.text.chars().count();
            parts += 1;
        }

        len + parts.saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn join(&self) -> String {
        let mut out = self.prefix.clone();
        let mut first = true;

        for part in self.parts.iter().filter(|p| !p.text.is_empty()) {
            if !first {
                out.push('_');
            }
            out.push_str(&part.text);
            first = false;
        }

        out
    }

    ///
    /// Join the parts, abbreviating them until the name fits `max_length`.
    ///
    /// `max_length == 0` disables the cap. If the name is still too long once
    /// every abbreviable segment has lost its vowels, abbreviable parts are
    /// shortened from the last one back, each keeping at least one character.
    /// Only when the prefix and fixed parts alone exceed the cap is the whole
    /// name cut.
    ///
    #[must_use]
    pub fn fit(mut self, max_length: usize) -> String {
        if max_length == 0 || self.len() <= max_length {
            return self.join();
        }

        for index in 0..self.parts.len() {
            if !self.parts[index].abbreviate {
                continue;
            }

            let mut segments: Vec<String> = self.parts[index]
                .text
                .split('_')
                .map(str::to_string)
                .collect();

            for segment in 0..segments.len() {
                segments[segment] = abbreviate_segment(&segments[segment]);
                self.parts[index].text = segments.join("_");

                if self.len() <= max_length {
                    return self.join();
                }
            }
        }

        let joined = self.join();
        for index in (0..self.parts.len()).rev() {
            if !self.parts[index].abbreviate {
                continue;
            }

            let excess = self.len() - max_length;
            let part = &mut self.parts[index];
            let keep = part.text.chars().count().saturating_sub(excess).max(1);
            part.text = cut_to_length(&part.text, keep);

            if self.len() <= max_length {
                break;
            }
        }

        let cut = cut_to_length(&self.join(), max_length);
        warn!(
            name = %joined,
            result = %cut,
            max_length,
            "identifier still exceeds the max length after abbreviation; cutting"
        );

        cut
    }

    ///
    /// Like `fit`, but reserves room for `suffix` and appends it after the
    /// fitted name, so the suffix is never abbreviated or cut.
    ///
    #[must_use]
    pub fn fit_with_suffix(self, max_length: usize, suffix: &str) -> String {
        if max_length == 0 {
            return self.join() + suffix;
        }

        let budget = max_length.saturating_sub(suffix.chars().count());
        if budget == 0 {
            return cut_to_length(suffix.trim_start_matches('_'), max_length);
        }

        self.fit(budget) + suffix
    }
}

/// Drop lowercase vowels from a segment, keeping its first character.
#[must_use]
pub fn abbreviate_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    let mut out = String::with_capacity(segment.len());

    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.extend(chars.filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')));

    out
}

/// Cap an identifier at `max_length` characters, abbreviating before cutting.
#[must_use]
pub fn truncate(identifier: &str, max_length: usize) -> String {
    NameParts::new(None)
        .push(NamePart::new(identifier))
        .fit(max_length)
}

fn cut_to_length(name: &str, max_length: usize) -> String {
    let cut: String = name.chars().take(max_length).collect();

    cut.trim_end_matches('_').to_string()
}
