use crate::source::CharacterSource;
use crate::tokenizer::{StateResult, TokenKind, Tokenizer};

/// Letter (any script) or underscore.
#[inline]
pub(crate) fn is_tag_name_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Determines which markup, if any, starts at the `<` that has just been consumed.
fn markup_start(source: &impl CharacterSource) -> Option<TokenKind> {
    if source.next_matches(0, is_tag_name_start) {
        Some(TokenKind::StartTag)
    } else if source.next_equals("/") && source.next_matches(1, char::is_alphabetic) {
        Some(TokenKind::EndTag)
    } else if source.next_equals("!--") {
        Some(TokenKind::Comment)
    } else if source.next_equals_ignore_case("!DOCTYPE") {
        Some(TokenKind::DocType)
    } else {
        None
    }
}

impl<S: CharacterSource> Tokenizer<S> {
    pub(in crate::tokenizer) fn text_state(&mut self) -> StateResult {
        let Some(ch) = self.consume_ch()? else {
            return Ok(self.finish_at_end_of_input());
        };

        if ch == '<' {
            if let Some(markup) = markup_start(&self.source) {
                self.unconsume_ch();
                self.transition_to(markup);

                return Ok(true);
            }
        }

        self.append(ch)?;

        Ok(false)
    }
}
