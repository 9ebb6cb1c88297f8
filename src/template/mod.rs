//! Template engine for placeholder substitution.
//!
//! Scaffold templates embed `{{Name}}` placeholders in otherwise literal
//! text. Rendering happens in two phases:
//!
//! 1. [`Template::parse`] checks placeholder syntax and produces a segment
//!    list. Malformed markers (unclosed `{{`, empty or non-identifier names)
//!    are rejected here, before any output file is touched.
//! 2. [`Template::render`] substitutes variable values. A placeholder with no
//!    value in the context is an error rather than a silent empty string.
//!
//! # Syntax
//!
//! - `{{Name}}` substitutes the value of variable `Name`; interior
//!   whitespace is allowed (`{{ Name }}`).
//! - Names are identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
//! - Lone `{` and `}` are ordinary text. Template bodies full of Go or
//!   Python braces need no escaping; only the `{{` opener is reserved.

use std::collections::HashMap;
use thiserror::Error;

/// Malformed placeholder syntax, reported at parse time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{{` opener with no closing `}}` before end of input.
    #[error("unclosed '{{{{' at position {position} in template")]
    UnclosedPlaceholder { position: usize },

    /// A placeholder with no name (`{{}}` or `{{ }}`).
    #[error("empty placeholder at position {position} in template")]
    EmptyPlaceholder { position: usize },

    /// A placeholder whose name is not an identifier.
    #[error("invalid placeholder name '{name}' at position {position} in template")]
    InvalidName { name: String, position: usize },
}

/// Substitution failure, reported at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder referenced a variable the context does not provide.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// Variable reference; `position` is the byte offset of its `{{` opener,
    /// kept for render-time diagnostics.
    Variable { name: String, position: usize },
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source into an executable template.
    ///
    /// `name` identifies the template in diagnostics (e.g. `go.mod`).
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, ParseError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0usize;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let position = offset + open;

            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or(ParseError::UnclosedPlaceholder { position })?;

            let raw_name = after[..close].trim();
            if raw_name.is_empty() {
                return Err(ParseError::EmptyPlaceholder { position });
            }
            if !is_identifier(raw_name) {
                return Err(ParseError::InvalidName {
                    name: raw_name.to_string(),
                    position,
                });
            }

            segments.push(Segment::Variable {
                name: raw_name.to_string(),
                position,
            });

            rest = &after[close + 2..];
            offset = position + 2 + close + 2;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            name: name.into(),
            segments,
        })
    }

    /// The template's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template by substituting variable values.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, RenderError> {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Variable { name, position } => match variables.get(name.as_str()) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(RenderError::UndefinedVariable {
                            name: name.clone(),
                            position: *position,
                        });
                    }
                },
            }
        }

        Ok(result)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub(crate) fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
