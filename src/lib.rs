//! Streaming HTML tokenizer.
//!
//! The tokenizer converts a character stream into a lossless sequence of typed
//! tokens: doctype, start tag, end tag, comment and text. Concatenating the text
//! of all emitted tokens reproduces the input exactly.
//!
//! Beyond plain HTML it understands:
//! - server-side-include directives (`<!--#echo var='LANG'-->`) embedded in tags;
//! - conditional comments with nested openers (`<!--[if IE]><!-->...<!--<![endif]-->`),
//!   which are emitted as a single comment;
//! - malformed tags, which fall back to text instead of failing the parse.
//!
//! # Example
//!
//! ```
//! use html_tokens::{tokenize, Element, TokenKind};
//!
//! let tokens = tokenize("<html lang=\"<!--#echo var='LANG'-->\">hi</html>").unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::StartTag);
//!
//! let html = Element::parse(tokens[0].text()).unwrap();
//!
//! assert_eq!(html.get_attribute("lang"), Some("<!--#echo var='LANG'-->"));
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod debug_trace;

pub mod element;
pub mod emitter;
pub mod errors;
pub mod memory;
pub mod settings;
pub mod source;
pub mod tokenizer;

pub use self::element::{Attribute, Attributes, Element};
pub use self::emitter::{
    tokenize, tokenize_with_settings, CancellationToken, EmitterState, SinkDirective,
    Subscription, TokenEmitter, TokenSink,
};
pub use self::errors::{ElementError, ParseError, TokenizerError};
pub use self::settings::{MemorySettings, Settings};
pub use self::source::{CharacterSource, StrSource};
pub use self::tokenizer::{Token, TokenCaptureFlags, TokenKind, Tokenizer};
