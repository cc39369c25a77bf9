use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn no_arguments_reads_stdin() {
    assert_eq!(
        InterpreterConfig::from_args(args(&[])),
        Ok(InterpreterConfig {
            input: InputSource::Stdin
        })
    );
}

#[test]
fn one_argument_is_the_input_file() {
    assert_eq!(
        InterpreterConfig::from_args(args(&["prog.evt"])),
        Ok(InterpreterConfig {
            input: InputSource::File(PathBuf::from("prog.evt"))
        })
    );
}

#[test]
fn extra_arguments_are_rejected() {
    let err = InterpreterConfig::from_args(args(&["a", "b"]));
    assert_eq!(err, Err(ConfigError::TooManyArguments { count: 2 }));
    assert_eq!(
        ConfigError::TooManyArguments { count: 2 }.to_string(),
        "expected at most one input file, got 2 arguments"
    );
}
