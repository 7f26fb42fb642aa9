use crate::harness::{concat_text, describe, get_golden_tests};
use html_tokens::{Token, TokenEmitter};

#[test]
fn tokenizer_golden_tests() {
    let tests = get_golden_tests();

    assert!(!tests.is_empty(), "No golden tests have been found.");

    for test in tests {
        let mut actual = Vec::<Token>::new();
        let mut error_position = None;

        for result in TokenEmitter::from_html(&test.input) {
            match result {
                Ok(token) => actual.push(token),
                Err(err) => {
                    assert!(
                        err.position().is_some(),
                        "{}: unexpected error {err}",
                        test.description
                    );

                    error_position = err.position();
                }
            }
        }

        let expected = test.expected_tokens();

        assert_eq!(
            actual,
            expected,
            "{}\n  input: {:?}\n  expected: [{}]\n  actual: [{}]",
            test.description,
            test.input,
            describe(&expected),
            describe(&actual)
        );

        assert_eq!(
            error_position, test.error_position,
            "{}: error position",
            test.description
        );

        if test.error_position.is_none() {
            assert_eq!(
                concat_text(&actual),
                test.input,
                "{}: round trip",
                test.description
            );
        }
    }
}
