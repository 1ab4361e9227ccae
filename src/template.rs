//! Placeholder handling for prompt templates.
//!
//! A placeholder is written `[Name]`: everything between a `[` and the next `]`
//! on the same line. Line feed, carriage return and the Unicode line and
//! paragraph separators all end a line. There is no escaping and no nesting,
//! so `[[a]` yields the name `[a`, and `[]` is a placeholder with an empty
//! name. Existing templates rely on this, so it stays as is.

use crate::error::{CofounderError, Result};

/// A `[name]` occurrence inside a template, as byte offsets.
struct PlaceholderSpan<'a> {
    start: usize,
    end: usize,
    name: &'a str,
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn placeholder_spans(text: &str) -> Vec<PlaceholderSpan<'_>> {
    let mut spans = Vec::new();
    let mut i = 0;

    while let Some(offset) = text[i..].find('[') {
        let open = i + offset;
        let rest = &text[open + 1..];

        match rest.find(|c: char| c == ']' || is_line_break(c)) {
            Some(len) if rest[len..].starts_with(']') => {
                let close = open + 1 + len;
                spans.push(PlaceholderSpan {
                    start: open,
                    end: close + 1,
                    name: &text[open + 1..close],
                });
                i = close + 1;
            }
            _ => i = open + 1,
        }
    }

    spans
}

/// Distinct placeholder names in first-occurrence order.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for span in placeholder_spans(text) {
        if !names.iter().any(|n| n == span.name) {
            names.push(span.name.to_string());
        }
    }
    names
}

/// Replace every `[name]` whose binding is non-empty. Unbound or empty
/// placeholders are left untouched so they stay visible in the output.
///
/// The template is walked once; substituted values are never re-scanned.
pub fn substitute<'a, F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in placeholder_spans(text) {
        match lookup(span.name) {
            Some(value) if !value.is_empty() => {
                out.push_str(&text[cursor..span.start]);
                out.push_str(value);
                cursor = span.end;
            }
            _ => {}
        }
    }

    out.push_str(&text[cursor..]);
    out
}

/// User-entered values for one in-progress invocation of one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBindings {
    entries: Vec<(String, String)>,
}

impl VariableBindings {
    pub fn for_template(text: &str) -> Self {
        Self {
            entries: placeholders(text)
                .into_iter()
                .map(|name| (name, String::new()))
                .collect(),
        }
    }

    /// Discard all values and start over for a (possibly different) template.
    pub fn reset(&mut self, text: &str) {
        *self = Self::for_template(text);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| CofounderError::UnknownPlaceholder(name.to_string()))?;
        slot.1 = value.into();
        Ok(())
    }

    /// Names that still have no value.
    pub fn unresolved(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, v)| !v.is_empty())
    }

    pub fn apply(&self, text: &str) -> String {
        substitute(text, |name| self.get(name))
    }
}
