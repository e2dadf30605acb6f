//! Route templates parsed into literal and placeholder segments.
//!
//! `"{id}/download"` becomes `[Placeholder("id"), Literal("/download")]`.
//! Placeholder membership is then an exact comparison against the text
//! between the braces, so `{id:int}` does not bind a parameter named `id`.
//! A placeholder is any `{...}` span whose inner text holds no brace, so
//! `{{id}}` still contains the placeholder `id`. An unterminated `{` is
//! literal text.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: SmallVec<[Segment; 4]>,
}

impl RouteTemplate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse_segments(&raw);
        RouteTemplate { raw, segments }
    }

    /// The template exactly as written on the marker.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the template contains the placeholder `{name}`.
    pub fn contains_placeholder(&self, name: &str) -> bool {
        self.placeholders().any(|p| p == name)
    }
}

fn parse_segments(raw: &str) -> SmallVec<[Segment; 4]> {
    let mut segments = SmallVec::new();
    let mut literal = String::new();
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if c == '{' {
            let close = rest[1..].find(['{', '}']).map(|i| i + 1);
            if let Some(end) = close.filter(|&i| rest[i..].starts_with('}')) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(rest[1..end].to_string()));
                rest = &rest[end + 1..];
                continue;
            }
        }
        literal.push(c);
        rest = &rest[c.len_utf8()..];
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for RouteTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
