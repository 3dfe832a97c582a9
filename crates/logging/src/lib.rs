// crates/logging/src/lib.rs
//! Logging setup shared by the `relpath` binary and library.

mod flags;
mod formatter;
mod sink;
mod subscriber;

pub use flags::{DebugFlag, LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::RelpathFormatter;
pub use subscriber::{init, subscriber};

/// Expand backslash escapes in a log-file layout.
///
/// Supports the C escapes (`\n`, `\t`, ...), `\xHH` and up to three octal
/// digits. Unknown escapes yield the escaped character itself.
pub fn parse_escapes(input: &str) -> String {
    let mut out = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('e') => out.push('\x1b'),
            Some('f') => out.push('\x0c'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\x0b'),
            Some('x') => {
                let mut val = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(digit) => {
                            val = (val << 4) + digit;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    tracing::warn!("invalid hex escape sequence");
                    out.push('x');
                } else if let Some(ch) = char::from_u32(val) {
                    out.push(ch);
                }
            }
            Some(c @ '0'..='7') => {
                let mut val = c.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            val = (val << 3) + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                match char::from_u32(val) {
                    Some(ch) => out.push(ch),
                    None => tracing::warn!("invalid octal escape value: {val}"),
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
