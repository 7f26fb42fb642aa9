//! State handlers. Each handler belongs to the state of the same token kind.

mod comment;
mod doctype;
mod tag;
mod text;

pub(crate) use self::text::is_tag_name_start;

use memchr::memmem;

const COMMENT_OPENER: &str = "<!--";
pub(crate) const COMMENT_CLOSER: &str = "-->";
pub(crate) const DIRECTIVE_OPENER: &str = "<!--#";

#[inline]
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    memmem::find_iter(haystack.as_bytes(), needle.as_bytes()).count()
}
