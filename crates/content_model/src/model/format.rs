// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single format value. Serialized without a tag so a format map reads
/// as `{"fontWeight": "bold", "italic": true}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormatValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl FormatValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormatValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormatValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            FormatValue::Num(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Str(s) => f.write_str(s),
            FormatValue::Num(n) => write!(f, "{n}"),
            FormatValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        FormatValue::Str(value.to_owned())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        FormatValue::Str(value)
    }
}

impl From<bool> for FormatValue {
    fn from(value: bool) -> Self {
        FormatValue::Bool(value)
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        FormatValue::Num(value)
    }
}

/// Semantic format: a flat map from camelCase property name to value.
///
/// A missing key means "unset". An explicit empty string or `0px` is a
/// value like any other and is kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentModelFormat(BTreeMap<String, FormatValue>);

impl ContentModelFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FormatValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FormatValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<FormatValue>) {
        self.0.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FormatValue> {
        self.0.remove(key)
    }

    /// Copy every key of `other` into this format, overwriting.
    pub fn extend_from(&mut self, other: &ContentModelFormat) {
        for (k, v) in other.iter() {
            self.0.insert(k.to_owned(), v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ContentModelFormat
where
    K: Into<String>,
    V: Into<FormatValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
