use crate::harness::{tokens, RecordingSink};
use html_tokens::{
    tokenize, CancellationToken, CharacterSource, EmitterState, SinkDirective, StrSource, Token,
    TokenEmitter, TokenKind, TokenizerError,
};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;

/// Counts how many characters have been consumed from the wrapped source.
struct CountingSource {
    inner: StrSource,
    reads: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new(input: &str) -> (Self, Rc<Cell<usize>>) {
        let reads = Rc::new(Cell::new(0));

        let source = CountingSource {
            inner: StrSource::new(input),
            reads: Rc::clone(&reads),
        };

        (source, reads)
    }
}

impl CharacterSource for CountingSource {
    fn read(&mut self) -> Option<char> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read()
    }

    fn unread(&mut self, count: usize) {
        self.inner.unread(count);
    }

    fn skip(&mut self, count: usize) {
        self.reads.set(self.reads.get() + count);
        self.inner.skip(count);
    }

    fn next_equals(&self, s: &str) -> bool {
        self.inner.next_equals(s)
    }

    fn next_equals_ignore_case(&self, s: &str) -> bool {
        self.inner.next_equals_ignore_case(s)
    }

    fn next_matches(&self, offset: usize, pattern: fn(char) -> bool) -> bool {
        self.inner.next_matches(offset, pattern)
    }

    fn current_position(&self) -> usize {
        self.inner.current_position()
    }
}

#[test]
fn doctype_only() {
    assert_eq!(
        tokenize("<!DOCTYPE html>").unwrap(),
        tokens![DocType("<!DOCTYPE html>")]
    );
}

#[test]
fn comment_followed_by_text() {
    assert_eq!(
        tokenize("<!-- a -->text").unwrap(),
        tokens![Comment("<!-- a -->"), Text("text")]
    );
}

#[test]
fn sink_cancellation_after_first_token() {
    let mut subscription =
        TokenEmitter::from_html("<p>a</p><p>b</p>").subscribe(RecordingSink::cancelling_after(1));

    assert_eq!(subscription.request_unbounded(), 1);
    assert!(subscription.is_cancelled());
    assert_eq!(subscription.request_unbounded(), 0);

    let sink = subscription.into_sink();

    assert_eq!(sink.tokens, tokens![StartTag("<p>")]);
    assert!(sink.errors.is_empty());
    assert_eq!(sink.end_count, 0);
}

#[test]
fn no_reads_after_cancellation() {
    let (source, reads) = CountingSource::new("<p>abc</p><p>def</p>");
    let mut emitter = TokenEmitter::new(source);

    assert_eq!(emitter.next(), Some(Ok(TokenKind::StartTag.token("<p>"))));

    let reads_before_cancel = reads.get();

    emitter.cancel();

    assert_eq!(emitter.next(), None);
    assert_eq!(emitter.next(), None);
    assert_eq!(reads.get(), reads_before_cancel);
    assert_eq!(emitter.state(), EmitterState::Cancelled);
}

#[test]
fn cancellation_from_another_thread() {
    let mut emitter = TokenEmitter::from_html("<a>b</a>");
    let token: CancellationToken = emitter.cancellation_token();

    assert!(emitter.next().is_some());

    thread::spawn(move || token.cancel()).join().unwrap();

    assert!(emitter.is_cancelled());
    assert_eq!(emitter.next(), None);
}

#[test]
fn bounded_demand_matches_unbounded() {
    let html = "<!DOCTYPE html><html><!-- c --><body class=x>text</body></html>";
    let expected = tokenize(html).unwrap();

    let mut subscription = TokenEmitter::from_html(html).subscribe(RecordingSink::default());
    let mut batches = 0;

    while !subscription.is_terminated() {
        let delivered = subscription.request(2);

        assert!(delivered <= 2);
        batches += 1;
    }

    let sink = subscription.into_sink();

    assert_eq!(sink.tokens, expected);
    assert_eq!(sink.end_count, 1);
    assert!(batches >= expected.len() / 2);
}

#[test]
fn zero_demand_reads_nothing() {
    let (source, reads) = CountingSource::new("<p>x</p>");
    let mut subscription = TokenEmitter::new(source).subscribe(RecordingSink::default());

    assert_eq!(subscription.request(0), 0);
    assert_eq!(reads.get(), 0);
    assert!(subscription.sink().tokens.is_empty());
}

#[test]
fn error_terminates_subscription() {
    let mut subscription =
        TokenEmitter::from_html("<i>\0</i>").subscribe(RecordingSink::default());

    assert_eq!(subscription.request_unbounded(), 1);
    assert!(subscription.is_terminated());
    assert!(!subscription.is_cancelled());

    let sink = subscription.into_sink();

    assert_eq!(sink.tokens, tokens![StartTag("<i>")]);
    assert_eq!(sink.end_count, 0);
    assert!(matches!(
        sink.errors.as_slice(),
        [TokenizerError::Parse(err)] if err.position == 3
    ));
}

#[test]
fn closure_sink_collects_tokens() {
    let mut texts = Vec::new();

    TokenEmitter::from_html("a<b>c")
        .subscribe(|token: Token| {
            texts.push(token.into_text());
            SinkDirective::Continue
        })
        .request_unbounded();

    assert_eq!(texts, ["a", "<b>", "c"]);
}
