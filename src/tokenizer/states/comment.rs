use super::{count_occurrences, COMMENT_CLOSER, COMMENT_OPENER};
use crate::source::CharacterSource;
use crate::tokenizer::{StateResult, TokenKind, Tokenizer};

const REVEALED_COMMENT_OPENER: &str = "<!-->";

/// Checks whether every comment opened in the text has been closed.
///
/// `<!-->` (the opener of a downlevel-revealed conditional comment) is not
/// counted as an opener, so `<!--[if X]><!-->BODY<!--<![endif]-->` is balanced
/// only at its final closer.
#[inline]
fn is_balanced(text: &str) -> bool {
    let opened = count_occurrences(text, COMMENT_OPENER)
        .saturating_sub(count_occurrences(text, REVEALED_COMMENT_OPENER));

    count_occurrences(text, COMMENT_CLOSER) >= opened
}

impl<S: CharacterSource> Tokenizer<S> {
    #[inline]
    fn close_if_balanced(&mut self) -> bool {
        let balanced = is_balanced(self.buffer.as_str());

        if balanced {
            self.transition_to(TokenKind::Text);
        }

        balanced
    }

    pub(in crate::tokenizer) fn comment_state(&mut self) -> StateResult {
        let Some(ch) = self.consume_ch()? else {
            return Ok(self.finish_at_end_of_input());
        };

        match ch {
            // NOTE: the opener is consumed as a whole, otherwise the
            // dashes of `<!-->` would be taken for a closer.
            '<' if self.source.next_equals(&COMMENT_OPENER[1..]) => {
                self.append_str(COMMENT_OPENER)?;
                self.consume_several(COMMENT_OPENER.len() - 1);

                // NOTE: the last dash of the opener also starts the closer in `<!--->`.
                if self.source.next_equals(&COMMENT_CLOSER[1..]) {
                    self.append_str(&COMMENT_CLOSER[1..])?;
                    self.consume_several(COMMENT_CLOSER.len() - 1);

                    Ok(self.close_if_balanced())
                } else {
                    Ok(false)
                }
            }
            '-' if self.source.next_equals(&COMMENT_CLOSER[1..]) => {
                self.append_str(COMMENT_CLOSER)?;
                self.consume_several(COMMENT_CLOSER.len() - 1);

                Ok(self.close_if_balanced())
            }
            ch => {
                self.append(ch)?;

                Ok(false)
            }
        }
    }
}
