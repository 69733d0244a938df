//! Integration tests for end-to-end scanning.
//!
//! These tests build pattern lists the way a caller would and check the
//! properties every successful or failed scan must hold.

use lexscan::{
    pattern::common::{DOUBLE_QUOTED, IDENTIFIER, LINE_COMMENT, NEWLINES, NUMBER, WHITESPACE},
    tokenize, Error, Pattern, ScanOptions, Scanner,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn language_patterns() -> Result<Vec<Pattern>, Error> {
    Ok(vec![
        Pattern::builder(r"(let|fn|return)\b").label("keyword").build()?,
        Pattern::builder(r"[a-zA-Z_][a-zA-Z0-9_]*").label("identifier").build()?,
        Pattern::builder(r"[0-9]+").label("number").build()?,
        Pattern::builder(r"==|[=+;(){}]").label("punct").build()?,
        Pattern::builder(r"//[^\n]*").label("comment").significant(false).build()?,
        Pattern::insignificant(r"\s+")?,
    ])
}

#[test]
fn test_scan_small_program() -> Result<(), Error> {
    init_logging();

    let patterns = language_patterns()?;
    let source = "fn main() {\n    // answer\n    let x = 40 + 2;\n    return x;\n}\n";
    let tokens = tokenize(source, &patterns)?;

    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "1:0: 'fn' keyword",
            "1:3: 'main' identifier",
            "1:7: '(' punct",
            "1:8: ')' punct",
            "1:10: '{' punct",
            "3:4: 'let' keyword",
            "3:8: 'x' identifier",
            "3:10: '=' punct",
            "3:12: '40' number",
            "3:15: '+' punct",
            "3:17: '2' number",
            "3:18: ';' punct",
            "4:4: 'return' keyword",
            "4:11: 'x' identifier",
            "4:12: ';' punct",
            "5:0: '}' punct",
        ]
    );

    Ok(())
}

#[test]
fn test_keyword_prefix_is_identifier() -> Result<(), Error> {
    let patterns = language_patterns()?;
    let tokens = tokenize("letter fn", &patterns)?;

    assert_eq!(tokens[0].pattern.label(), "identifier");
    assert_eq!(tokens[0].text, "letter");
    assert_eq!(tokens[1].pattern.label(), "keyword");

    Ok(())
}

#[test]
fn test_matched_spans_cover_input() -> Result<(), Error> {
    // With every pattern significant, the tokens must tile the input.
    let patterns = vec![
        Pattern::new(r"\w+")?,
        Pattern::new(r"[^\w\s]+")?,
        Pattern::new(r"\s+")?,
    ];
    let input = "Alpha, beta;\n\tgamma!? delta\r\n  (epsilon)";
    let tokens = tokenize(input, &patterns)?;

    let mut expected_offset = 0;
    for token in &tokens {
        assert_eq!(token.offset, expected_offset);
        assert!(!token.text.is_empty());
        expected_offset = token.end();
    }
    assert_eq!(expected_offset, input.len());

    let rebuilt: String = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(rebuilt, input);

    Ok(())
}

#[test]
fn test_significance_filter() -> Result<(), Error> {
    let patterns = vec![
        Pattern::builder(r"[a-z]+").label("word").build()?,
        Pattern::builder(r"[0-9]+").label("digits").significant(false).build()?,
        Pattern::insignificant(" ")?,
    ];
    let tokens = tokenize("ab 12 cd34ef 5", &patterns)?;

    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(texts, ["ab", "cd", "ef"]);
    assert!(tokens.iter().all(|token| token.pattern.is_significant()));

    Ok(())
}

#[test]
fn test_failure_discards_partial_tokens() -> Result<(), Error> {
    let patterns = language_patterns()?;
    let result = tokenize("let a = 1;\nlet b = $;", &patterns);

    let err = result.unwrap_err();
    assert_eq!(err.offset(), 19);
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 8);
    assert_eq!(err.unmatched(), '$');

    let err: Error = err.into();
    assert_eq!(err.get_error_name(), "UnmatchedInput");

    Ok(())
}

#[test]
fn test_render_diagnostic_for_file() -> Result<(), Error> {
    let patterns = language_patterns()?;
    let scanner = Scanner::with_options(&patterns, ScanOptions::default().with_source("main.lang"));
    let err = scanner.tokenize("let a = 1;\nlet b = $;").unwrap_err();

    assert_eq!(
        err.render(),
        "error: no pattern matches '$'\n -> main.lang:2:8\n  |\n2 | let b = $;\n  | --------^"
    );

    Ok(())
}

fn broken_patterns() -> Result<Vec<Pattern>, Error> {
    Ok(vec![Pattern::new(r"\w+")?, Pattern::new("[a-")?])
}

#[test]
fn test_invalid_pattern_surfaces_through_error() {
    match broken_patterns() {
        Err(err) => assert_eq!(err.get_error_name(), "InvalidExpression"),
        Ok(_) => panic!("Expected invalid expression"),
    }
}

#[test]
fn test_stock_patterns() -> Result<(), Error> {
    let patterns = [
        &*LINE_COMMENT,
        &*DOUBLE_QUOTED,
        &*NUMBER,
        &*IDENTIFIER,
        &*WHITESPACE,
        &*NEWLINES,
    ];
    let input = "name \"a b\" 3.5 // trailing\nnext";

    let mut labels = vec![];
    let mut offset = 0;
    while offset < input.len() {
        let (pattern, len) = patterns
            .iter()
            .find_map(|pattern| pattern.match_at(input, offset).map(|len| (pattern, len)))
            .expect("every span is covered by a stock pattern");
        if pattern.is_significant() {
            labels.push((pattern.label(), &input[offset..offset + len]));
        }
        offset += len;
    }

    assert_eq!(
        labels,
        vec![
            ("identifier", "name"),
            ("string", "\"a b\""),
            ("number", "3.5"),
            ("identifier", "next"),
        ]
    );

    Ok(())
}

#[test]
fn test_patterns_shared_across_threads() -> Result<(), Error> {
    init_logging();

    let patterns = language_patterns()?;
    let inputs = ["let a = 1;", "fn f() { return 2; }", "x == y", "let b = #;"];

    let results: Vec<Result<usize, usize>> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let patterns = &patterns;
                scope.spawn(move || match tokenize(input, patterns) {
                    Ok(tokens) => Ok(tokens.len()),
                    Err(err) => Err(err.offset()),
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("scanner thread panicked"))
            .collect()
    });

    assert_eq!(results, vec![Ok(5), Ok(9), Ok(3), Err(8)]);

    Ok(())
}
