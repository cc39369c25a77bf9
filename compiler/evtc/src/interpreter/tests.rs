use super::*;
use pretty_assertions::assert_eq;

struct Outcome {
    out: String,
    err: String,
    summary: RunSummary,
}

fn run(program: &str) -> Outcome {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = Interpreter::new(&mut out, &mut err).run(program.as_bytes());
    let Ok(summary) = summary else {
        panic!("in-memory run cannot fail with an io error");
    };
    Outcome {
        out: String::from_utf8_lossy(&out).into_owned(),
        err: String::from_utf8_lossy(&err).into_owned(),
        summary,
    }
}

#[test]
fn section_transitions() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut interp = Interpreter::new(&mut out, &mut err);
    assert_eq!(interp.section(), Section::Outside);
    assert!(interp.feed_line("ignored text").is_ok());
    assert_eq!(interp.section(), Section::Outside);
    assert!(interp.feed_line("  var  ").is_ok());
    assert_eq!(interp.section(), Section::Declarations);
    assert!(interp.feed_line("BEGIN").is_ok());
    assert_eq!(interp.section(), Section::Body);
    assert!(interp.feed_line("End").is_ok());
    assert_eq!(interp.section(), Section::Outside);
    assert_eq!(interp.mode(), Mode::Normal);
}

#[test]
fn feed_line_updates_symbol_table() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut interp = Interpreter::new(&mut out, &mut err);
    for line in ["var", "int n ;", "string s ;", "begin", "set n * 6 7 ;", "set s \"ok\" ;"] {
        assert!(interp.feed_line(line).is_ok());
    }
    let symbols = interp.symbols();
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols.get("n"), Some(&Value::Int(42)));
    assert_eq!(symbols.get("s"), Some(&Value::from("ok")));
    assert_eq!(symbols.appearances("n"), &[2, 5]);
    assert_eq!(interp.mode(), Mode::Normal);

    assert!(interp.feed_line("set n \"x\" ;").is_ok());
    assert_eq!(interp.symbols().get("n"), Some(&Value::Int(42)));
    assert_eq!(interp.mode(), Mode::Failed);
}

#[test]
fn prints_and_dumps() {
    let outcome = run("var\nint x ;\nbegin\nset x + 2 3 ;\nprint x ;\nprintln \" items\" ;\nend\n");
    assert_eq!(outcome.err, "");
    assert_eq!(
        outcome.out,
        "5 items\n\nSymbol Table Dump\n\n\tx\n\t\tint\n\t\t5\n\t\tAppeared on lines 2 4 5 \n"
    );
    assert_eq!(
        outcome.summary,
        RunSummary {
            lines: 7,
            errors: 0
        }
    );
}

#[test]
fn error_enters_failed_mode_but_keeps_going() {
    let outcome = run(
        "var\nint x ;\nbegin\nprintln 1 ;\nprintln y ;\nprintln 2 ;\nset x \"a\" ;\nend\n",
    );
    assert_eq!(outcome.out, "1\n");
    assert_eq!(
        outcome.err,
        "Error: at line 5: y is not declared\nError: at line 7: x invalid assignment\n"
    );
    assert_eq!(outcome.summary.errors, 2);
}

#[test]
fn declaration_errors_are_reported() {
    let outcome = run("var\nint a ;\nint a ;\nbool b ;\nint c\nbegin\nend\n");
    assert_eq!(
        outcome.err,
        "Error: at line 3: a already declared\n\
         Error: at line 4: Invalid data type 'bool'\n\
         Error: at line 5: Missing token in expression\n"
    );
    assert_eq!(outcome.out, "");
}

#[test]
fn expression_errors_carry_line_numbers() {
    let outcome = run("var\nbegin\nprintln + 1 ;\nprintln 1 2 ;\nprintln + \"s\" 1 ;\nend\n");
    assert_eq!(
        outcome.err,
        "Error: at line 3: Missing token in expression\n\
         Error: at line 4: Extra token in expression\n\
         Error: at line 5: invalid type for expression\n"
    );
}

#[test]
fn statement_errors() {
    let outcome = run("var\nbegin\nshow 1 ;\nprintln 1\nset ghost 1 ;\nend\n");
    assert_eq!(
        outcome.err,
        "Error: at line 3: invalid command show\n\
         Error: at line 4: Missing token (;) in expression\n\
         Error: at line 5: ghost is not declared\n"
    );
}

#[test]
fn sections_share_one_table() {
    let outcome = run("var\nint a ;\nbegin\nset a 4 ;\nend\nvar\nint b ;\nbegin\nset b * a a ;\nprintln b ;\nend\n");
    assert_eq!(outcome.err, "");
    assert!(outcome.out.starts_with("16\n"));
    assert!(outcome.out.contains("\tb\n\t\tint\n\t\t16\n\t\tAppeared on lines 7 9 10 \n"));
}

#[test]
fn string_variable_round_trip() {
    let outcome = run("var\nstring s ;\nbegin\nset s \"hello world\" ;\nprintln s ;\nend\n");
    assert_eq!(
        outcome.out,
        "hello world\n\nSymbol Table Dump\n\n\ts\n\t\tstring\n\t\t\"hello world\"\n\t\tAppeared on lines 2 4 5 \n"
    );
}

#[test]
fn unterminated_program_still_finishes() {
    let outcome = run("var\nint x ;\nbegin\nset x 1 ;");
    assert_eq!(outcome.err, "");
    assert!(outcome.out.contains("\t\t1\n"));
}

#[test]
fn blank_lines_are_skipped() {
    let outcome = run("var\n\nint x ;\n\nbegin\n\nprintln x ;\n   \nend\n");
    assert_eq!(outcome.err, "");
    assert!(outcome.out.starts_with("0\n"));
}
