use caatinga_base::diagnostic::Dummy;
use caatinga_semantic::{analyze, symbol_table::SymbolTable};

use super::{escape_lexeme, format_lines, write_lexical_report, write_symbol_table_report};

fn render(
    write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
) -> String {
    let mut buffer = Vec::new();
    write(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_format_lines() {
    assert_eq!(format_lines(&[]), "");
    assert_eq!(format_lines(&[3]), "3");
    assert_eq!(format_lines(&[1, 2, 3, 4, 5, 6, 7]), "1, 2, 3, 4, 5");
}

#[test]
fn test_lexical_report() {
    let token_stream = analyze("x := 10;\nPRINT(x);".chars().peekable(), &Dummy);
    let report = render(|x| write_lexical_report(x, "demo.252", &token_stream));

    let rows = report
        .lines()
        .skip_while(|x| !x.starts_with("---"))
        .skip(1)
        .collect::<Vec<_>>();

    assert!(report.starts_with("LEXICAL ANALYSIS REPORT\nSOURCE: demo.252\n"));
    assert_eq!(rows.len(), token_stream.len());
    assert_eq!(rows[0], "1      | idn02  | X");
    assert_eq!(rows[1], "1      | srs04  | :=");
    assert_eq!(rows[4], "2      | prs26  | PRINT");
}

#[test]
fn test_symbol_table_report() {
    let source = format!(
        "VARTYPE INTEGER : x ;\n{}\nx\nx\nx\nx\nx",
        "y".repeat(40)
    );
    let token_stream = analyze(source.chars().peekable(), &Dummy);
    let symbol_table = SymbolTable::build(&token_stream);

    let report = render(|x| write_symbol_table_report(x, "demo.252", &symbol_table));
    let rows = report
        .lines()
        .skip_while(|x| !x.starts_with("---"))
        .skip(1)
        .collect::<Vec<_>>();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        format!(
            "1     | idn02 | {:<35} | IN   | 1   | 1   | 1, 3, 4, 5, 6",
            "X"
        )
    );
    assert_eq!(
        rows[1],
        format!("2     | idn02 | {} | -    | 40  | 35  | 2", "Y".repeat(35))
    );
}

#[test]
fn test_escape_lexeme() {
    assert_eq!(escape_lexeme("\"plain text\""), "\"plain text\"");
    assert_eq!(escape_lexeme("'\n'"), "'\\n'");
    assert_eq!(escape_lexeme("'\t'"), "'\\t'");
}

#[test]
fn test_char_literal_with_new_line_keeps_one_row() {
    let token_stream = analyze("x := '\n';".chars().peekable(), &Dummy);
    let report = render(|x| write_lexical_report(x, "demo.252", &token_stream));

    let rows = report
        .lines()
        .skip_while(|x| !x.starts_with("---"))
        .skip(1)
        .collect::<Vec<_>>();

    assert_eq!(token_stream.len(), 4);
    assert_eq!(token_stream[2].lexeme(), "'\n'");
    assert_eq!(rows.len(), 4);
    assert!(rows[2].ends_with("| idn07  | '\\n'"));

    let symbol_table = SymbolTable::build(&token_stream);
    let report = render(|x| write_symbol_table_report(x, "demo.252", &symbol_table));
    assert!(report.contains(&format!("| {:<35} | CH   |", "'\\n'")));
}
