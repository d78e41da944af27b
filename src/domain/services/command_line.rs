//! Shell-like rendering of command lines for logs and diagnostics
//!
//! Arguments are always handed to child processes as separate argv entries;
//! these helpers only affect how a command is shown.

/// Wrap a value in double quotes, escaping embedded quotes.
pub fn quote(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\\\""))
}

/// Quote a value only when it would otherwise split or vanish.
pub fn quote_if_needed(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
        quote(arg)
    } else {
        arg.to_string()
    }
}

/// Render `program` and `args` as one line, quoting paths with whitespace.
pub fn render<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = program.to_string();
    for arg in args {
        out.push(' ');
        out.push_str(&quote_if_needed(arg.as_ref()));
    }
    out
}
