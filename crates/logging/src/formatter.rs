// crates/logging/src/formatter.rs
use crate::parse_escapes;
use std::collections::HashMap;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Text formatter for console and log-file output.
///
/// Without a layout, messages are word-wrapped to `$COLUMNS`. With a layout
/// each event becomes one line whose `%` tokens pull in event fields. Lines
/// are prefixed by time and pid unless the layout places `%t` or `%p`
/// itself:
///
/// | token | field |
/// |-------|-------|
/// | `%f`  | `from` |
/// | `%d`  | `to` |
/// | `%n`  | `relative` (or `common_length`) |
/// | `%o`  | `op` |
/// | `%l`  | event level |
/// | `%m`  | message |
/// | `%t`  | local time |
/// | `%p`  | process id |
pub struct RelpathFormatter {
    tokens: Option<Vec<Token>>,
}

impl RelpathFormatter {
    pub fn new(format: Option<String>) -> Self {
        let tokens = format.map(|f| {
            let fmt = parse_escapes(&f);
            parse_tokens(&fmt)
        });
        Self { tokens }
    }

    fn columns() -> usize {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&c| c > 0)
            .unwrap_or(80)
    }

    fn wrap(msg: &str, width: usize) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        for word in msg.split_whitespace() {
            let wlen = word.len();
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Lit(String),
    Percent,
    From,
    To,
    Relative,
    Operation,
    Level,
    Message,
    Time,
    Pid,
}

fn parse_tokens(fmt: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = fmt.chars();
    let mut lit = String::new();
    while let Some(c) = chars.next() {
        if c != '%' {
            lit.push(c);
            continue;
        }
        let token = match chars.next() {
            Some('%') => Token::Percent,
            Some('f') => Token::From,
            Some('d') => Token::To,
            Some('n') => Token::Relative,
            Some('o') => Token::Operation,
            Some('l') => Token::Level,
            Some('m') => Token::Message,
            Some('t') => Token::Time,
            Some('p') => Token::Pid,
            Some(other) => {
                lit.push('%');
                lit.push(other);
                continue;
            }
            None => {
                lit.push('%');
                continue;
            }
        };
        if !lit.is_empty() {
            tokens.push(Token::Lit(std::mem::take(&mut lit)));
        }
        tokens.push(token);
    }
    if !lit.is_empty() {
        tokens.push(Token::Lit(lit));
    }
    tokens
}

struct MsgVisitor {
    msg: String,
    fields: HashMap<String, String>,
}

impl MsgVisitor {
    fn new() -> Self {
        Self {
            msg: String::new(),
            fields: HashMap::new(),
        }
    }

    fn push_message(&mut self, value: &str) {
        if !self.msg.is_empty() {
            self.msg.push(' ');
        }
        self.msg.push_str(value);
    }
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.push_message(value);
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.push_message(&format!("{value:?}"));
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }
}

fn format_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_default()
}

impl<S, N> FormatEvent<S, N> for RelpathFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);
        if let Some(tokens) = &self.tokens {
            let field = |name: &str| visitor.fields.get(name).map(String::as_str);
            let stamped = tokens
                .iter()
                .any(|t| matches!(t, Token::Time | Token::Pid));
            let mut out = if stamped {
                String::new()
            } else {
                format!("{} [{}] ", format_time(), std::process::id())
            };
            for tok in tokens {
                match tok {
                    Token::Lit(s) => out.push_str(s),
                    Token::Percent => out.push('%'),
                    Token::Time => out.push_str(&format_time()),
                    Token::Pid => out.push_str(&std::process::id().to_string()),
                    Token::Level => out.push_str(event.metadata().level().as_str()),
                    Token::Message => out.push_str(&visitor.msg),
                    Token::From => out.push_str(field("from").unwrap_or_default()),
                    Token::To => out.push_str(field("to").unwrap_or_default()),
                    Token::Relative => {
                        if let Some(v) = field("relative").or_else(|| field("common_length")) {
                            out.push_str(v);
                        }
                    }
                    Token::Operation => {
                        if let Some(v) = field("op") {
                            out.push_str(v);
                        } else if let Some(first) = visitor.msg.split_whitespace().next() {
                            out.push_str(first);
                        }
                    }
                }
            }
            writer.write_str(&out)?;
            writer.write_char('\n')
        } else {
            let msg = if visitor.msg.is_empty() {
                event.metadata().target()
            } else {
                &visitor.msg
            };
            let width = Self::columns();
            let wrapped = Self::wrap(msg, width);
            for (i, line) in wrapped.lines().enumerate() {
                if i > 0 {
                    writer.write_char('\n')?;
                }
                writer.write_str(line)?;
            }
            writer.write_char('\n')
        }
    }
}
