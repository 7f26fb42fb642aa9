use html_tokens::{tokenize, Element, ElementError, TokenKind};

fn attrs(element: &Element) -> Vec<(&str, Option<&str>)> {
    element
        .attributes()
        .iter()
        .map(|attr| (attr.name(), attr.value()))
        .collect()
}

#[test]
fn meta_charset() {
    let meta = Element::parse("<meta charset='UTF-8'>").unwrap();

    assert_eq!(meta.name(), "meta");
    assert_eq!(attrs(&meta), [("charset", Some("UTF-8"))]);
}

#[test]
fn merge_body_openings() {
    let mut first = Element::parse("<body class=\"a\">").unwrap();
    let second = Element::parse("<body class=\"b\" id=\"x\">").unwrap();

    first.merge(&second);

    assert_eq!(attrs(&first), [("class", Some("a b")), ("id", Some("x"))]);
    assert_eq!(first.to_string(), "<body class=\"a b\" id=\"x\">");
}

#[test]
fn attributes_keep_source_order() {
    let element =
        Element::parse("<input type=\"checkbox\" checked name=agree value='yes' disabled>")
            .unwrap();

    assert_eq!(
        attrs(&element),
        [
            ("type", Some("checkbox")),
            ("checked", None),
            ("name", Some("agree")),
            ("value", Some("yes")),
            ("disabled", None),
        ]
    );
}

#[test]
fn start_tags_of_a_document() {
    let html = concat!(
        "<!DOCTYPE html>",
        "<html lang=\"<!--#echo var='LANG'-->\">",
        "<head><meta charset='UTF-8'></head>",
        "<body class=\"page\" data-id=42>",
        "</body></html>"
    );

    let elements = tokenize(html)
        .unwrap()
        .iter()
        .filter(|token| token.kind() == TokenKind::StartTag)
        .map(|token| Element::from_token(token).unwrap())
        .collect::<Vec<_>>();

    let names = elements.iter().map(Element::name).collect::<Vec<_>>();

    assert_eq!(names, ["html", "head", "meta", "body"]);
    assert_eq!(
        elements[0].get_attribute("lang"),
        Some("<!--#echo var='LANG'-->")
    );
    assert_eq!(elements[3].get_attribute("data-id"), Some("42"));
}

#[test]
fn other_tokens_are_rejected() {
    for token in tokenize("<!-- x --></p>text").unwrap() {
        assert_eq!(
            Element::try_from(&token),
            Err(ElementError::InvalidStartTag(token.text().to_owned()))
        );
    }
}

#[test]
fn serialization_is_reparsable() {
    let mut element = Element::parse("<img src=a.png alt='say \"hi\"'/>").unwrap();

    element.set_attribute("title", Some("x")).unwrap();
    element.remove_attribute("src");

    let reparsed: Element = element.to_string().parse().unwrap();

    assert_eq!(reparsed, element);
    assert!(reparsed.is_self_closing());
    assert_eq!(reparsed.get_attribute("alt"), Some("say \"hi\""));
}
