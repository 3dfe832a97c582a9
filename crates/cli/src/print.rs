// crates/cli/src/print.rs
use std::io::{self, Write};

use serde_json::json;

use crate::codes::ExitCode;
use crate::validate::exit_code_from_error_kind;
use crate::version::program_name;

pub fn handle_clap_error(e: clap::Error) -> ! {
    use clap::error::ErrorKind;
    let kind = e.kind();
    let code = exit_code_from_error_kind(kind);
    if matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = e.print();
    } else {
        let mut msg = e.to_string();
        if kind == ErrorKind::UnknownArgument {
            let first = msg.lines().next().unwrap_or("");
            let arg = first.split('\'').nth(1).unwrap_or("");
            msg = format!("{arg}: unknown option");
        } else if let Some(stripped) = msg.strip_prefix("error: ") {
            msg = stripped.to_string();
        }
        let prog = program_name();
        let mut lines = msg.trim_end().lines();
        if let Some(first) = lines.next() {
            eprintln!("{prog}: {first}");
            for line in lines {
                eprintln!("{line}");
            }
        }
        report_exit(code);
    }
    std::process::exit(i32::from(code));
}

/// Print the trailing `<prog> error: <description> (code N)` line.
pub fn report_exit(code: ExitCode) {
    eprintln!(
        "{} error: {} (code {})",
        program_name(),
        code.description(),
        u8::from(code)
    );
}

/// One computed answer, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    Relative {
        from: &'a str,
        to: &'a str,
        relative: String,
    },
    CommonLength {
        from: &'a str,
        to: &'a str,
        common_length: usize,
    },
}

/// Writes records as plain lines or JSON objects.
pub struct Printer<W> {
    out: W,
    json: bool,
    terminator: u8,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, json: bool, null: bool) -> Self {
        Self {
            out,
            json,
            terminator: if null { b'\0' } else { b'\n' },
        }
    }

    pub fn print(&mut self, record: &Record<'_>) -> io::Result<()> {
        if self.json {
            let value = match record {
                Record::Relative { from, to, relative } => {
                    json!({ "from": from, "to": to, "relative": relative })
                }
                Record::CommonLength {
                    from,
                    to,
                    common_length,
                } => json!({ "from": from, "to": to, "common_length": common_length }),
            };
            serde_json::to_writer(&mut self.out, &value)?;
        } else {
            match record {
                Record::Relative { relative, .. } => self.out.write_all(relative.as_bytes())?,
                Record::CommonLength { common_length, .. } => {
                    write!(self.out, "{common_length}")?
                }
            }
        }
        self.out.write_all(&[self.terminator])
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: bool, null: bool, records: &[Record<'_>]) -> String {
        let mut printer = Printer::new(Vec::new(), json, null);
        for record in records {
            printer.print(record).unwrap();
        }
        String::from_utf8(printer.finish().unwrap()).unwrap()
    }

    #[test]
    fn plain_lines() {
        let records = [
            Record::Relative {
                from: "/a",
                to: "/b",
                relative: "../b".into(),
            },
            Record::CommonLength {
                from: "/a",
                to: "/a/b",
                common_length: 2,
            },
        ];
        assert_eq!(render(false, false, &records), "../b\n2\n");
        assert_eq!(render(false, true, &records), "../b\x002\x00");
    }

    #[test]
    fn json_objects() {
        let records = [Record::Relative {
            from: "/a",
            to: "/b",
            relative: "../b".into(),
        }];
        let out = render(true, false, &records);
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(v["from"], "/a");
        assert_eq!(v["to"], "/b");
        assert_eq!(v["relative"], "../b");
    }

    #[test]
    fn json_common_length_is_numeric() {
        let records = [Record::CommonLength {
            from: "C:\\x",
            to: "C:\\y",
            common_length: 3,
        }];
        let out = render(true, false, &records);
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(v["common_length"], 3);
        assert_eq!(v["from"], "C:\\x");
    }
}
