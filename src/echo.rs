//! Numbered listing of command-line arguments.

/// One line per argument, numbered from 1: `Argument No.1: foo`.
pub fn list_arguments<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("Argument No.{}: {}", i + 1, arg.as_ref()))
        .collect()
}

/// Like [`list_arguments`] but with the program path at index 0:
/// `Argument No. : 0 (argcalc)`.
pub fn list_arguments_with_program<S: AsRef<str>>(program: &str, tokens: &[S]) -> Vec<String> {
    std::iter::once(program)
        .chain(tokens.iter().map(|t| t.as_ref()))
        .enumerate()
        .map(|(i, arg)| format!("Argument No. : {i} ({arg})"))
        .collect()
}
