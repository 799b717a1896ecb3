//! Input line tokenization and id validation.
//!
//! A raw input line splits into a command token and its arguments. Text
//! inside matching double quotes forms a single argument even when it
//! contains spaces; the quotes themselves are stripped. `""` therefore
//! produces an empty-string argument, which matters for distinguishing
//! "missing description" from "empty description" downstream.

/// Splits a line into a command name and its argument tokens.
///
/// Returns `None` for empty or whitespace-only lines, which the loop
/// silently ignores.
pub fn parse_command(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = tokenize(line);
    if tokens.is_empty() {
        return None;
    }
    let command = tokens.remove(0);
    Some((command, tokens))
}

/// Tokenizes a line, treating double-quoted substrings as single tokens.
///
/// An unterminated quote extends to the end of the line.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // Tracks whether the current token exists at all, so that `""` yields
    // an empty token instead of nothing.
    let mut pending = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        tokens.push(current);
    }

    tokens
}

/// Validates a task id token and converts it to a numeric id.
///
/// A token is a valid id only if it is all decimal digits with no leading
/// zero, no sign, and a value that fits in `u64`. Returns `None` otherwise;
/// malformed tokens never reach the store.
pub fn parse_task_id(token: &str) -> Option<u64> {
    if token.is_empty() || token.starts_with('0') || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
