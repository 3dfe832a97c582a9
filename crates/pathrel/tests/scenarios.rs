// crates/pathrel/tests/scenarios.rs
use pathrel::{Error, Platform, Relativizer, relative_path};

fn posix() -> Relativizer {
    Relativizer::new(Platform::Posix, "/").unwrap()
}

fn windows() -> Relativizer {
    Relativizer::new(Platform::Windows, "C:\\").unwrap()
}

#[test]
fn posix_scenarios() {
    let rel = posix();
    let cases = [
        ("/Foo", "/Bar", "../Bar"),
        ("/Foo", "/Foo/Bar", "Bar"),
        ("/Foo/Bar", "/Bar/Bar", "../../Bar/Bar"),
        ("/Foo/Foo", "/Foo/Bar", "../Bar"),
        ("/Foo/Bar/", "/Foo/Bar", "."),
    ];
    for (from, to, expected) in cases {
        assert_eq!(rel.relative_path(from, to).unwrap(), expected, "{from} -> {to}");
    }
}

#[test]
fn windows_scenarios() {
    let rel = windows();
    let cases = [
        ("C:\\Foo", "D:\\Bar", "D:\\Bar"),
        ("C:\\Foo", "C:\\Bar", "..\\Bar"),
        ("C:\\Foo", "C:\\Foo\\Bar", "Bar"),
        ("C:\\Foo\\Bar", "C:\\Bar\\Bar", "..\\..\\Bar\\Bar"),
        ("C:\\Foo\\Foo", "C:\\Foo\\Bar", "..\\Bar"),
        ("C:\\Foo\\Bar\\", "C:\\Foo\\Bar", "."),
        ("C:\\Foo", "c:\\foo", "."),
        ("C:/Foo/Bar", "C:/Foo/Baz", "..\\Baz"),
        ("\\\\server\\share\\a", "\\\\server\\share\\b", "..\\b"),
    ];
    for (from, to, expected) in cases {
        assert_eq!(rel.relative_path(from, to).unwrap(), expected, "{from} -> {to}");
    }
}

#[test]
fn empty_operands_fail() {
    assert!(matches!(posix().relative_path("", "/Foo"), Err(Error::EmptyPath { .. })));
    assert!(matches!(posix().relative_path("/Foo", ""), Err(Error::EmptyPath { .. })));
    assert!(matches!(relative_path("", "/Foo"), Err(Error::EmptyPath { .. })));
    assert!(matches!(relative_path("/Foo", ""), Err(Error::EmptyPath { .. })));
}

#[cfg(unix)]
#[test]
fn host_entry_point_uses_posix_rules() {
    assert_eq!(relative_path("/usr/lib", "/usr/share/doc").unwrap(), "../share/doc");
}

#[test]
fn debug_events_are_emitted() {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Write for Buf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buf {
        type Writer = Buf;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    let buf = Buf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("debug::build=debug")
        .with_writer(buf.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        windows().relative_path("C:\\Foo", "D:\\Bar").unwrap();
    });
    let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(out.contains("no common root"), "{out}");
}
