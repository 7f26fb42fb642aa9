use super::{count_occurrences, COMMENT_CLOSER, DIRECTIVE_OPENER};
use crate::source::CharacterSource;
use crate::tokenizer::{StateResult, TokenKind, Tokenizer};

#[inline]
fn is_allowed_in_tag(ch: char) -> bool {
    ch != '\\'
}

/// Checks whether the text contains a directive opener that hasn't been closed yet.
#[inline]
fn has_open_directive(text: &str) -> bool {
    count_occurrences(text, DIRECTIVE_OPENER) > count_occurrences(text, COMMENT_CLOSER)
}

impl<S: CharacterSource> Tokenizer<S> {
    // NOTE: shared by start and end tags, the produced token kind is
    // determined by the current state.
    pub(in crate::tokenizer) fn tag_state(&mut self) -> StateResult {
        let Some(ch) = self.consume_ch()? else {
            return Ok(self.finish_at_end_of_input());
        };

        match ch {
            '>' => {
                self.append(ch)?;
                self.transition_to(TokenKind::Text);

                Ok(true)
            }
            '<' if self.buffer.is_empty() || self.source.next_equals(&DIRECTIVE_OPENER[1..]) => {
                self.append(ch)?;

                Ok(false)
            }
            '<' => Ok(self.fall_back_to_text()),
            '-' if self.source.next_equals(&COMMENT_CLOSER[1..])
                && has_open_directive(self.buffer.as_str()) =>
            {
                self.append_str(COMMENT_CLOSER)?;
                self.consume_several(COMMENT_CLOSER.len() - 1);

                Ok(false)
            }
            ch if is_allowed_in_tag(ch) => {
                self.append(ch)?;

                Ok(false)
            }
            _ => Ok(self.fall_back_to_text()),
        }
    }
}
