//! Ordered header multimap.

use std::collections::hash_map::{self, HashMap};
use std::collections::BTreeMap;

use http::header::{HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building a header from text.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid header name {name:?}")]
    InvalidName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },

    #[error("invalid value for header {name:?}")]
    InvalidValue {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("expected `Name: value`, got {0:?}")]
    MalformedLine(String),
}

/// Map from a canonical header name to an ordered sequence of values.
///
/// Names are compared case-insensitively through [`HeaderName`]. Values keep
/// the order they were supplied in, duplicates included. A name may map to an
/// empty sequence; the merge treats such entries as no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawHeaderSet", into = "RawHeaderSet")]
pub struct HeaderSet {
    entries: HashMap<HeaderName, Vec<HeaderValue>>,
}

impl HeaderSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `name` with `value`.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.entries.insert(name, vec![value]);
    }

    /// Append `value` after the existing values of `name`.
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.entries.entry(name).or_default().push(value);
    }

    /// Replace the values of `name` with exactly `values`, which may be empty.
    pub fn set_values<I>(&mut self, name: HeaderName, values: I)
    where
        I: IntoIterator<Item = HeaderValue>,
    {
        self.entries.insert(name, values.into_iter().collect());
    }

    /// Parse `name` and `value` and append them.
    pub fn try_append(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let name = parse_name(name)?;
        let value = parse_value(&name, value)?;
        self.append(name, value);
        Ok(())
    }

    /// Values for `name`, empty when absent.
    pub fn get_all(&self, name: &HeaderName) -> &[HeaderValue] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, name: &HeaderName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &HeaderName) -> Option<Vec<HeaderValue>> {
        self.entries.remove(name)
    }

    /// Number of distinct names, counting names with no values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no name is present at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, HeaderName, Vec<HeaderValue>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, HeaderName, Vec<HeaderValue>> {
        self.entries.keys()
    }

    /// Append every value of `other` after this set's values, key by key.
    pub fn extend_from(&mut self, other: &HeaderSet) {
        for (name, values) in other {
            self.entries
                .entry(name.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = (&'a HeaderName, &'a Vec<HeaderValue>);
    type IntoIter = hash_map::Iter<'a, HeaderName, Vec<HeaderValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(HeaderName, HeaderValue)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (HeaderName, HeaderValue)>>(iter: I) -> Self {
        let mut set = HeaderSet::new();
        for (name, value) in iter {
            set.append(name, value);
        }
        set
    }
}

/// Parse a curl-style `Name: value` line.
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), HeaderError> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| HeaderError::MalformedLine(line.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(HeaderError::MalformedLine(line.to_string()));
    }
    let name = parse_name(name)?;
    let value = parse_value(&name, value.trim())?;
    Ok((name, value))
}

fn parse_name(name: &str) -> Result<HeaderName, HeaderError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|source| HeaderError::InvalidName {
        name: name.to_string(),
        source,
    })
}

fn parse_value(name: &HeaderName, value: &str) -> Result<HeaderValue, HeaderError> {
    HeaderValue::from_str(value).map_err(|source| HeaderError::InvalidValue {
        name: name.to_string(),
        source,
    })
}

/// Serialized shape: a table of name → string or list of strings.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
struct RawHeaderSet(BTreeMap<String, RawValues>);

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum RawValues {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<RawHeaderSet> for HeaderSet {
    type Error = HeaderError;

    fn try_from(raw: RawHeaderSet) -> Result<Self, Self::Error> {
        let mut set = HeaderSet::new();
        for (name, values) in raw.0 {
            let name = parse_name(&name)?;
            let values = match values {
                RawValues::One(value) => vec![value],
                RawValues::Many(values) => values,
            };
            let mut parsed = Vec::with_capacity(values.len());
            for value in &values {
                parsed.push(parse_value(&name, value)?);
            }
            // Case variants of one name in the file land on the same key.
            set.entries.entry(name).or_default().extend(parsed);
        }
        Ok(set)
    }
}

impl From<HeaderSet> for RawHeaderSet {
    fn from(set: HeaderSet) -> Self {
        let entries = set
            .entries
            .into_iter()
            .map(|(name, values)| {
                let values = values
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect();
                (name.to_string(), RawValues::Many(values))
            })
            .collect();
        RawHeaderSet(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> HeaderName {
        HeaderName::from_bytes(s.as_bytes()).unwrap()
    }

    #[test]
    fn test_insert_replaces_values() {
        let mut set = HeaderSet::new();
        set.try_append("X-Custom", "one").unwrap();
        set.try_append("X-Custom", "two").unwrap();
        set.insert(name("x-custom"), HeaderValue::from_static("three"));

        assert_eq!(set.get_all(&name("x-custom")), &[HeaderValue::from_static("three")]);
    }

    #[test]
    fn test_append_keeps_duplicates_in_order() {
        let mut set = HeaderSet::new();
        set.try_append("x-custom", "v").unwrap();
        set.try_append("X-CUSTOM", "v").unwrap();
        set.try_append("X-Custom", "w").unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get_all(&name("x-custom")),
            &[
                HeaderValue::from_static("v"),
                HeaderValue::from_static("v"),
                HeaderValue::from_static("w"),
            ]
        );
    }

    #[test]
    fn test_empty_sequence_counts_as_key() {
        let mut set = HeaderSet::new();
        assert!(set.is_empty());

        set.set_values(name("x-empty"), Vec::new());
        assert!(!set.is_empty());
        assert!(set.contains_key(&name("X-Empty")));
        assert!(set.get_all(&name("x-empty")).is_empty());
    }

    #[test]
    fn test_missing_key_has_no_values() {
        let set = HeaderSet::new();
        assert!(set.get_all(&name("x-missing")).is_empty());
    }

    #[test]
    fn test_extend_from_appends() {
        let mut base = HeaderSet::new();
        base.try_append("user-agent", "from-file").unwrap();
        let mut extra = HeaderSet::new();
        extra.try_append("User-Agent", "from-cli").unwrap();
        extra.try_append("X-Trace", "abc").unwrap();

        base.extend_from(&extra);

        assert_eq!(base.len(), 2);
        assert_eq!(base.get_all(&name("user-agent")).len(), 2);
        assert_eq!(base.get_all(&name("user-agent"))[1], "from-cli");
    }

    #[test]
    fn test_invalid_name_rejected() {
        let mut set = HeaderSet::new();
        let err = set.try_append("bad header", "value").unwrap_err();
        assert!(matches!(err, HeaderError::InvalidName { .. }));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut set = HeaderSet::new();
        let err = set.try_append("x-custom", "line\nbreak").unwrap_err();
        assert!(matches!(err, HeaderError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_header_line() {
        let (n, v) = parse_header_line("User-Agent:  my-agent/1.0 ").unwrap();
        assert_eq!(n, name("user-agent"));
        assert_eq!(v, "my-agent/1.0");

        let (_, v) = parse_header_line("X-Empty:").unwrap();
        assert_eq!(v, "");

        assert!(matches!(
            parse_header_line("no-colon"),
            Err(HeaderError::MalformedLine(_))
        ));
        assert!(matches!(
            parse_header_line(": value"),
            Err(HeaderError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_deserialize_string_or_list() {
        #[derive(Deserialize)]
        struct Wrapper {
            headers: HeaderSet,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            [headers]
            "User-Agent" = "agent"
            "X-Custom-1" = ["one", "two", "one"]
            "X-Empty" = []
            "#,
        )
        .unwrap();

        let headers = wrapper.headers;
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get_all(&name("user-agent")), &[HeaderValue::from_static("agent")]);
        assert_eq!(
            headers.get_all(&name("x-custom-1")),
            &[
                HeaderValue::from_static("one"),
                HeaderValue::from_static("two"),
                HeaderValue::from_static("one"),
            ]
        );
        assert!(headers.contains_key(&name("x-empty")));
        assert!(headers.get_all(&name("x-empty")).is_empty());
    }

    #[test]
    fn test_deserialize_rejects_invalid_name() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrapper {
            headers: HeaderSet,
        }

        let result: Result<Wrapper, _> = toml::from_str(
            r#"
            [headers]
            "not a header" = "value"
            "#,
        );
        assert!(result.is_err());
    }
}
