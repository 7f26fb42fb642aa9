//! Attribute assembly for start tags and element merging.
//!
//! A [`StartTag`](crate::TokenKind::StartTag) token carries the verbatim tag
//! text. [`Element::parse`] re-tokenizes that text at the attribute level and
//! produces the tag name together with an ordered attribute map.

mod attributes;
mod lexer;

pub use self::attributes::{Attribute, Attributes};

use self::lexer::{AttributeLexeme, AttributeLexer};
use crate::errors::ElementError;
use crate::tokenizer::{Token, TokenKind};
use std::fmt::{self, Display};
use std::str::FromStr;

#[inline]
fn validate_name(name: &str, forbidden: &[char]) -> Result<(), ElementError> {
    if name.is_empty() {
        Err(ElementError::EmptyName)
    } else if let Some(ch) = name.chars().find(|ch| forbidden.contains(ch)) {
        Err(ElementError::ForbiddenCharacter(ch))
    } else {
        Ok(())
    }
}

const FORBIDDEN_IN_TAG_NAME: &[char] = &[' ', '\n', '\r', '\t', '\x0C', '/', '>', '<'];
const FORBIDDEN_IN_ATTRIBUTE_NAME: &[char] = &[' ', '\n', '\r', '\t', '\x0C', '/', '>', '='];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Attributes,
    self_closing: bool,
}

impl Element {
    #[inline]
    pub fn new(name: &str) -> Result<Self, ElementError> {
        validate_name(name, FORBIDDEN_IN_TAG_NAME)?;

        Ok(Element {
            name: name.to_owned(),
            attributes: Attributes::new(),
            self_closing: false,
        })
    }

    /// Assembles an element from the verbatim text of a start tag.
    ///
    /// Quotes are stripped from attribute values, valueless attributes get an
    /// absent value and a repeated attribute overwrites the value of its first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidStartTag`] if the text is not a complete start tag.
    pub fn parse(start_tag: &str) -> Result<Self, ElementError> {
        let mut name = None;
        let mut attributes = Attributes::new();
        let mut pending_attr_name = None;
        let mut self_closing = false;

        AttributeLexer::new(start_tag).run(|lexeme| match lexeme {
            AttributeLexeme::TagName(tag_name) => name = Some(tag_name),
            AttributeLexeme::AttributeName(attr_name) => {
                if let Some(prev_name) = pending_attr_name.replace(attr_name) {
                    attributes.set(prev_name, None);
                }
            }
            AttributeLexeme::AttributeValue(value) => {
                if let Some(attr_name) = pending_attr_name.take() {
                    attributes.set(attr_name, Some(value.to_owned()));
                }
            }
            AttributeLexeme::SelfClosing => self_closing = true,
        })?;

        if let Some(attr_name) = pending_attr_name {
            attributes.set(attr_name, None);
        }

        match name {
            Some(name) => Ok(Element {
                name: name.to_owned(),
                attributes,
                self_closing,
            }),
            None => Err(ElementError::InvalidStartTag(start_tag.to_owned())),
        }
    }

    /// Assembles an element from a start tag token.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidStartTag`] for tokens of other kinds and
    /// for start tags that can't be assembled.
    pub fn from_token(token: &Token) -> Result<Self, ElementError> {
        if token.kind() == TokenKind::StartTag {
            Element::parse(token.text())
        } else {
            Err(ElementError::InvalidStartTag(token.text().to_owned()))
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_name(&mut self, name: &str) -> Result<(), ElementError> {
        validate_name(name, FORBIDDEN_IN_TAG_NAME)?;
        self.name = name.to_owned();

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Value of the attribute, `None` if the attribute is missing or has no value.
    #[inline]
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Attribute::value)
    }

    #[inline]
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    #[inline]
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), ElementError> {
        validate_name(name, FORBIDDEN_IN_ATTRIBUTE_NAME)?;
        self.attributes.set(name, value.map(str::to_owned));

        Ok(())
    }

    #[inline]
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    #[inline]
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Merges the attributes of `other` into this element.
    ///
    /// Values of attributes present on both elements are joined with a single
    /// space, this element's value first. Attributes present only on `other` are
    /// appended. Nothing is ever removed.
    pub fn merge(&mut self, other: &Element) {
        for attr in other.attributes() {
            let own_value = self.attributes.get(attr.name()).and_then(Attribute::value);

            let value = match (own_value, attr.value()) {
                (Some(own_value), Some(other_value)) => Some(format!("{own_value} {other_value}")),
                (Some(value), None) | (None, Some(value)) => Some(value.to_owned()),
                (None, None) => None,
            };

            self.attributes.set(attr.name(), value);
        }
    }
}

impl FromStr for Element {
    type Err = ElementError;

    #[inline]
    fn from_str(start_tag: &str) -> Result<Self, Self::Err> {
        Element::parse(start_tag)
    }
}

impl TryFrom<&Token> for Element {
    type Error = ElementError;

    #[inline]
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Element::from_token(token)
    }
}

/// Serializes the element back into a start tag.
impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;

        for attr in &self.attributes {
            write!(f, " {attr}")?;
        }

        if self.self_closing {
            // NOTE: the space keeps `/` out of a trailing unquoted value.
            f.write_str(if self.attributes.is_empty() { "/>" } else { " />" })
        } else {
            f.write_str(">")
        }
    }
}
