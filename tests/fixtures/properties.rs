use crate::harness::{concat_text, describe, kinds, RecordingSink};
use html_tokens::{tokenize, Element, TokenEmitter, TokenKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x6874_6d6c;
const ITERATIONS: usize = 2000;

const FRAGMENTS: &[&str] = &[
    "<", ">", "</", "/", "<!--", "-->", "<!-->", "<!--#", "-", "!", "<!DOCTYPE", "<!doctype ",
    "a", "div", "_x", " ", "\n", "=", "\"", "'", "\\", "[if IE]", "<![endif]", "é", "ж", "1",
    "echo var='X'", "class=", "text",
];

fn random_html(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..24);

    (0..len)
        .map(|_| FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())])
        .collect()
}

fn random_inputs() -> impl Iterator<Item = String> {
    let mut rng = StdRng::seed_from_u64(SEED);

    (0..ITERATIONS).map(move |_| random_html(&mut rng))
}

#[test]
fn lossless_round_trip() {
    for html in random_inputs() {
        let tokens = tokenize(&html).unwrap();

        assert_eq!(concat_text(&tokens), html, "[{}]", describe(&tokens));
    }
}

#[test]
fn no_empty_tokens() {
    for html in random_inputs() {
        for token in tokenize(&html).unwrap() {
            assert!(!token.text().is_empty(), "{html:?}");
            assert!(!token.is_terminal(), "{html:?}");
        }
    }
}

#[test]
fn markup_tokens_start_with_less_than_sign() {
    for html in random_inputs() {
        for token in tokenize(&html).unwrap() {
            if token.kind() != TokenKind::Text {
                assert!(token.text().starts_with('<'), "{html:?}: {token:?}");
            }
        }
    }
}

#[test]
fn bounded_and_unbounded_demand_agree() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for html in random_inputs().take(ITERATIONS / 4) {
        let expected = tokenize(&html).unwrap();
        let mut subscription = TokenEmitter::from_html(&html).subscribe(RecordingSink::default());

        while !subscription.is_terminated() {
            subscription.request(rng.gen_range(1..4));
        }

        let sink = subscription.into_sink();

        assert_eq!(kinds(&sink.tokens), kinds(&expected), "{html:?}");
        assert_eq!(sink.tokens, expected, "{html:?}");
        assert_eq!(sink.end_count, 1, "{html:?}");
    }
}

#[test]
fn conditional_comment_is_single_token() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..ITERATIONS / 4 {
        let condition = ["IE", "gte IE 9", "!IE", "lt IE 8"][rng.gen_range(0..4)];
        let body = ["", "<html class=\"x\">", "text", "<p>a</p>", "<b>"][rng.gen_range(0..5)];
        let html = format!("<!--[if {condition}]><!-->{body}<!--<![endif]-->");

        assert_eq!(
            tokenize(&html).unwrap(),
            vec![TokenKind::Comment.token(html.as_str())]
        );
    }
}

#[test]
fn directives_are_preserved_in_start_tags() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..ITERATIONS / 4 {
        let var = ["LANG", "DIR", "X_1"][rng.gen_range(0..3)];
        let quote = ['"', '\''][rng.gen_range(0..2)];
        let inner_quote = if quote == '"' { '\'' } else { '"' };
        let value = format!("<!--#echo var={inner_quote}{var}{inner_quote}-->");
        let html = format!("<html lang={quote}{value}{quote}>");

        let tokens = tokenize(&html).unwrap();

        assert_eq!(tokens, vec![TokenKind::StartTag.token(html.as_str())]);
        assert_eq!(
            Element::parse(tokens[0].text()).unwrap().get_attribute("lang"),
            Some(value.as_str())
        );
    }
}

#[test]
fn attribute_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..ITERATIONS / 4 {
        let count = rng.gen_range(0..6);
        let mut html = String::from("<tag");
        let mut expected = Vec::new();

        for i in 0..count {
            let name = format!("attr{i}");

            let value = match rng.gen_range(0..4) {
                0 => {
                    html.push_str(&format!(" {name}"));
                    None
                }
                1 => {
                    html.push_str(&format!(" {name}=v{i}"));
                    Some(format!("v{i}"))
                }
                2 => {
                    html.push_str(&format!(" {name}='a b{i}'"));
                    Some(format!("a b{i}"))
                }
                _ => {
                    html.push_str(&format!(" {name}=\"c'{i}\""));
                    Some(format!("c'{i}"))
                }
            };

            expected.push((name, value));
        }

        html.push('>');

        let element = Element::parse(&html).unwrap();

        let actual = element
            .attributes()
            .iter()
            .map(|attr| (attr.name().to_owned(), attr.value().map(str::to_owned)))
            .collect::<Vec<_>>();

        assert_eq!(element.name(), "tag");
        assert_eq!(actual, expected, "{html:?}");
    }
}
