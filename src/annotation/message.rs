//! Message template for diff annotations.
//!
//! # Syntax
//!
//! - `{old}` - the old file name
//! - `{new}` - the new file name
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A `{` or `}` that is neither escaped nor part of a placeholder is an error.
//!
//! The template is parsed once when the configuration is loaded, so any
//! syntax problem surfaces as a config error and rendering itself cannot
//! fail.

use std::fmt;

/// Default template for the message of every diff annotation.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Differences between {old} and {new}";

/// Error type for template parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder other than `{old}` or `{new}` was used.
    UnknownPlaceholder {
        /// The name inside the braces.
        name: String,
        /// The position in the template where the placeholder was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// A `}` was found outside a placeholder without being doubled.
    UnmatchedClosingBrace {
        /// The position of the stray `}`.
        position: usize,
    },
    /// An empty placeholder was found (e.g., `{}`).
    EmptyPlaceholder {
        /// The position of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownPlaceholder { name, position } => {
                write!(
                    f,
                    "unknown placeholder '{{{}}}' at position {} in message template (expected {{old}} or {{new}})",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(
                    f,
                    "unmatched '{{' at position {} in message template",
                    position
                )
            }
            TemplateError::UnmatchedClosingBrace { position } => {
                write!(
                    f,
                    "unmatched '}}' at position {} in message template (use '}}}}' for a literal brace)",
                    position
                )
            }
            TemplateError::EmptyPlaceholder { position } => {
                write!(
                    f,
                    "empty placeholder '{{}}' at position {} in message template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    OldFile,
    NewFile,
}

/// A parsed message template with `{old}` and `{new}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            segments: vec![
                Segment::Literal("Differences between ".to_string()),
                Segment::OldFile,
                Segment::Literal(" and ".to_string()),
                Segment::NewFile,
            ],
        }
    }
}

impl MessageTemplate {
    /// Parse a template string.
    ///
    /// # Examples
    ///
    /// ```
    /// use diffscan::annotation::MessageTemplate;
    ///
    /// let template = MessageTemplate::parse("{old} -> {new}").unwrap();
    /// assert_eq!(template.render("a.txt", "b.txt"), "a.txt -> b.txt");
    ///
    /// assert!(MessageTemplate::parse("{path}").is_err());
    /// ```
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    let placeholder = match name.trim() {
                        "" => return Err(TemplateError::EmptyPlaceholder { position: pos }),
                        "old" => Segment::OldFile,
                        "new" => Segment::NewFile,
                        other => {
                            return Err(TemplateError::UnknownPlaceholder {
                                name: other.to_string(),
                                position: pos,
                            });
                        }
                    };

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(placeholder);
                }
                '}' => {
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedClosingBrace { position: pos });
                    }
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Fill in the two file names.
    pub fn render(&self, old_file: &str, new_file: &str) -> String {
        let mut result = String::with_capacity(self.source.len() + old_file.len() + new_file.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::OldFile => result.push_str(old_file),
                Segment::NewFile => result.push_str(new_file),
            }
        }
        result
    }
}
