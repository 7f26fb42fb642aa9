//! Attribute-level lexer for the text of a single start tag.

use crate::errors::ElementError;
use crate::tokenizer::{is_tag_name_start, COMMENT_CLOSER, DIRECTIVE_OPENER};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum AttributeLexeme<'i> {
    TagName(&'i str),
    AttributeName(&'i str),
    AttributeValue(&'i str),
    SelfClosing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    TagOpen,
    TagNameStart,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueQuoted(char),
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t' | '\x0C')
}

pub(crate) struct AttributeLexer<'i> {
    input: &'i str,
    pos: usize,
    part_start: usize,
    state: State,
}

impl<'i> AttributeLexer<'i> {
    pub fn new(input: &'i str) -> Self {
        AttributeLexer {
            input,
            pos: 0,
            part_start: 0,
            state: State::TagOpen,
        }
    }

    #[inline]
    fn invalid(&self) -> ElementError {
        ElementError::InvalidStartTag(self.input.to_owned())
    }

    #[inline]
    fn part(&self) -> &'i str {
        &self.input[self.part_start..self.pos]
    }

    #[inline]
    fn switch_to(&mut self, state: State) {
        self.state = state;
    }

    #[inline]
    fn start_part_at(&mut self, pos: usize, state: State) {
        self.part_start = pos;
        self.state = state;
    }

    /// Moves past a `<!--#...-->` directive if one starts at the current position.
    fn skip_directive(&mut self) -> Result<bool, ElementError> {
        let rest = &self.input[self.pos..];

        if !rest.starts_with(DIRECTIVE_OPENER) {
            return Ok(false);
        }

        match rest[DIRECTIVE_OPENER.len()..].find(COMMENT_CLOSER) {
            Some(offset) => {
                self.pos += DIRECTIVE_OPENER.len() + offset + COMMENT_CLOSER.len();

                Ok(true)
            }
            None => Err(self.invalid()),
        }
    }

    /// `>` must be the very last character of a start tag.
    #[inline]
    fn end(&self, tag_end: usize) -> Result<(), ElementError> {
        if tag_end == self.input.len() {
            Ok(())
        } else {
            Err(self.invalid())
        }
    }

    pub fn run(mut self, mut sink: impl FnMut(AttributeLexeme<'i>)) -> Result<(), ElementError> {
        while let Some(ch) = self.input[self.pos..].chars().next() {
            let next_pos = self.pos + ch.len_utf8();
            let state = self.state;

            match state {
                State::TagOpen => match ch {
                    '<' => self.switch_to(State::TagNameStart),
                    _ => return Err(self.invalid()),
                },
                State::TagNameStart => match ch {
                    ch if is_tag_name_start(ch) => {
                        self.start_part_at(self.pos, State::TagName);
                    }
                    _ => return Err(self.invalid()),
                },
                State::TagName => match ch {
                    ch if is_whitespace(ch) => {
                        sink(AttributeLexeme::TagName(self.part()));
                        self.switch_to(State::BeforeAttributeName);
                    }
                    '/' => {
                        sink(AttributeLexeme::TagName(self.part()));
                        self.switch_to(State::SelfClosingStartTag);
                    }
                    '>' => {
                        sink(AttributeLexeme::TagName(self.part()));
                        return self.end(next_pos);
                    }
                    _ => (),
                },
                State::BeforeAttributeName | State::AfterAttributeName => match ch {
                    ch if is_whitespace(ch) => (),
                    '=' if state == State::AfterAttributeName => {
                        self.switch_to(State::BeforeAttributeValue);
                    }
                    '/' => self.switch_to(State::SelfClosingStartTag),
                    '>' => return self.end(next_pos),
                    _ => {
                        self.start_part_at(self.pos, State::AttributeName);

                        if self.skip_directive()? {
                            continue;
                        }
                    }
                },
                State::AttributeName => match ch {
                    ch if is_whitespace(ch) => {
                        sink(AttributeLexeme::AttributeName(self.part()));
                        self.switch_to(State::AfterAttributeName);
                    }
                    '=' => {
                        sink(AttributeLexeme::AttributeName(self.part()));
                        self.switch_to(State::BeforeAttributeValue);
                    }
                    '/' => {
                        sink(AttributeLexeme::AttributeName(self.part()));
                        self.switch_to(State::SelfClosingStartTag);
                    }
                    '>' => {
                        sink(AttributeLexeme::AttributeName(self.part()));
                        return self.end(next_pos);
                    }
                    _ => (),
                },
                State::BeforeAttributeValue => match ch {
                    ch if is_whitespace(ch) => (),
                    '"' | '\'' => self.start_part_at(next_pos, State::AttributeValueQuoted(ch)),
                    '>' => {
                        sink(AttributeLexeme::AttributeValue(""));
                        return self.end(next_pos);
                    }
                    _ => {
                        self.start_part_at(self.pos, State::AttributeValueUnquoted);

                        if self.skip_directive()? {
                            continue;
                        }
                    }
                },
                State::AttributeValueQuoted(quote) => match ch {
                    ch if ch == quote => {
                        sink(AttributeLexeme::AttributeValue(self.part()));
                        self.switch_to(State::AfterAttributeValueQuoted);
                    }
                    '<' => {
                        if self.skip_directive()? {
                            continue;
                        }
                    }
                    _ => (),
                },
                State::AttributeValueUnquoted => match ch {
                    ch if is_whitespace(ch) => {
                        sink(AttributeLexeme::AttributeValue(self.part()));
                        self.switch_to(State::BeforeAttributeName);
                    }
                    '>' => {
                        sink(AttributeLexeme::AttributeValue(self.part()));
                        return self.end(next_pos);
                    }
                    '<' => {
                        if self.skip_directive()? {
                            continue;
                        }
                    }
                    _ => (),
                },
                State::AfterAttributeValueQuoted => match ch {
                    ch if is_whitespace(ch) => self.switch_to(State::BeforeAttributeName),
                    '/' => self.switch_to(State::SelfClosingStartTag),
                    '>' => return self.end(next_pos),
                    _ => {
                        // NOTE: missing whitespace between attributes, reconsume.
                        self.switch_to(State::BeforeAttributeName);
                        continue;
                    }
                },
                State::SelfClosingStartTag => match ch {
                    '>' => {
                        sink(AttributeLexeme::SelfClosing);
                        return self.end(next_pos);
                    }
                    _ => {
                        self.switch_to(State::BeforeAttributeName);
                        continue;
                    }
                },
            }

            self.pos = next_pos;
        }

        Err(self.invalid())
    }
}
