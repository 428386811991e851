// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline CSS declarations (`style="..."`).

/// An ordered list of CSS declarations. Property names are lower-cased,
/// values are trimmed and stripped of `!important`. Setting a property that
/// already exists replaces its value in place, so a later duplicate
/// declaration wins as in a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn parse(css: &str) -> Self {
        let mut style = Style::default();
        for declaration in split_declarations(css) {
            let Some((name, value)) = declaration.split_once(':') else {
                if !declaration.trim().is_empty() {
                    log::trace!("Skipping malformed declaration {declaration:?}");
                }
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            let value = strip_important(value.trim());
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(&name, value);
        }
        style
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.declarations.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self
                .declarations
                .push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(n, _)| n == name)?;
        Some(self.declarations.remove(index).1)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.declarations.retain(|(n, v)| keep(n, v));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize as `name: value; name: value;`.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Style {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut style = Style::default();
        for (name, value) in iter {
            style.set(name, value);
        }
        style
    }
}

fn strip_important(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    match lower.rfind("!important") {
        Some(index) if lower[index..].trim() == "!important" => {
            value[..index].trim_end()
        }
        _ => value,
    }
}

/// Split on `;` outside quotes and parentheses, so `url(a;b)` and
/// `"Segoe UI; x"` stay intact.
fn split_declarations(css: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in css.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&css[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&css[start..]);
    parts
}
