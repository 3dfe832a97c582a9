// crates/logging/src/sink.rs
use std::fs::File;
use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// Console sink; diagnostics never share stdout with computed paths.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LogWriter;

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        io::stderr()
    }
}

#[derive(Debug)]
pub(crate) struct FileWriter {
    pub(crate) file: File,
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.file
    }
}
