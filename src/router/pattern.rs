//! Path patterns for the page route table.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised while building a pattern or adding it to a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("Empty parameter name in pattern: {0}")]
    EmptyParamName(String),

    #[error("Parameter '{name}' appears more than once in pattern: {pattern}")]
    DuplicateParam { pattern: String, name: String },

    #[error("Pattern '{new}' is structurally identical to existing pattern '{existing}'")]
    DuplicatePattern { existing: String, new: String },
}

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches the same text, ignoring ASCII case. Stored lowercased.
    Literal(String),
    /// Matches any non-empty segment and captures it under the name.
    Param(String),
}

/// Values captured by parameter segments, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn insert(&mut self, name: String, value: String) {
        self.0.insert(name, value);
    }
}

/// A parsed route pattern such as `/dashboard` or `/board/:id`.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Segments starting with `:` are parameters.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let mut segments: Vec<Segment> = Vec::new();
        for part in split_segments(raw) {
            let segment = match part.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyParamName(raw.to_string())),
                Some(name) => {
                    let seen = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if seen {
                        return Err(PatternError::DuplicateParam {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None => Segment::Literal(part.to_ascii_lowercase()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the pattern has no segments, i.e. it matches `/`.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Two patterns overlap when they have the same shape: same length,
    /// equal literals and parameters in the same positions.
    pub fn overlaps(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Match a request path, returning the captured parameters on success.
    ///
    /// Empty segments are ignored, so `/login/` and `//login` match `/login`.
    /// Each segment is percent-decoded before it is compared or captured, so
    /// `/log%69n` matches `/login`. A segment that does not decode to UTF-8
    /// never matches.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            let part = urlencoding::decode(part).ok()?;
            match segment {
                Segment::Literal(literal) => {
                    if !part.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), part.into_owned());
                }
            }
        }

        Some(params)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
