use crate::source::CharacterSource;
use crate::tokenizer::{StateResult, TokenKind, Tokenizer};

/// Letters (including the Latin-1 letter range `À-ÿ`), digits, space and `.!-:/"`.
#[inline]
fn is_allowed_in_doctype(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ('\u{C0}'..='\u{FF}').contains(&ch)
        || matches!(ch, ' ' | '.' | '!' | '-' | ':' | '/' | '"')
}

impl<S: CharacterSource> Tokenizer<S> {
    pub(in crate::tokenizer) fn doctype_state(&mut self) -> StateResult {
        let Some(ch) = self.consume_ch()? else {
            return Ok(self.finish_at_end_of_input());
        };

        match ch {
            '<' if self.buffer.is_empty() => {
                self.append(ch)?;

                Ok(false)
            }
            '>' => {
                self.append(ch)?;
                self.transition_to(TokenKind::Text);

                Ok(true)
            }
            ch if is_allowed_in_doctype(ch) => {
                self.append(ch)?;

                Ok(false)
            }
            _ => Ok(self.fall_back_to_text()),
        }
    }
}
