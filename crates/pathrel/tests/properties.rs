// crates/pathrel/tests/properties.rs
use pathrel::{Canonicalize, Lexical, Platform, Relativizer, common_path_length};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,3}"
}

fn posix_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn windows_path() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("C:"), Just("c:"), Just("D:")],
        prop::collection::vec(segment(), 0..5),
    )
        .prop_map(|(drive, segs)| format!("{drive}\\{}", segs.join("\\")))
}

fn path_like() -> impl Strategy<Value = String> {
    "[ab/\\\\]{0,12}"
}

fn on_boundary(first: &[char], second: &[char], len: usize, platform: Platform) -> bool {
    len == 0
        || (len == first.len()
            && (len == second.len() || platform.is_separator(second[len])))
        || (len == second.len() && platform.is_separator(first[len]))
        || platform.is_separator(first[len - 1])
}

proptest! {
    #[test]
    fn common_length_lands_on_boundary(
        a in path_like(),
        b in path_like(),
        ignore_case in any::<bool>(),
        windows in any::<bool>(),
    ) {
        let platform = if windows { Platform::Windows } else { Platform::Posix };
        let len = common_path_length(&a, &b, ignore_case, platform);
        let first: Vec<char> = a.chars().collect();
        let second: Vec<char> = b.chars().collect();
        prop_assert!(len <= first.len().min(second.len()));
        prop_assert!(on_boundary(&first, &second, len, platform), "{a:?} {b:?} -> {len}");
    }

    #[test]
    fn common_length_of_self_is_full(a in path_like(), ignore_case in any::<bool>()) {
        for platform in [Platform::Windows, Platform::Posix] {
            prop_assert_eq!(common_path_length(&a, &a, ignore_case, platform), a.chars().count());
        }
    }

    #[test]
    fn relative_path_of_self_is_dot(p in posix_path()) {
        let rel = Relativizer::new(Platform::Posix, "/").unwrap();
        prop_assert_eq!(rel.relative_path(&p, &p).unwrap(), ".");
    }

    #[test]
    fn posix_round_trip(from in posix_path(), to in posix_path()) {
        let canon = Lexical::new(Platform::Posix, "/").unwrap();
        let rel = Relativizer::with_canonicalizer(Platform::Posix, canon.clone());
        let relative = rel.relative_path(&from, &to).unwrap();
        prop_assert!(!relative.starts_with('/'), "{relative}");
        prop_assert!(!relative.contains("//"), "{relative}");
        let joined = canon.canonicalize(&format!("{from}/{relative}")).unwrap();
        prop_assert_eq!(joined, to);
    }

    #[test]
    fn windows_round_trip(from in windows_path(), to in windows_path()) {
        let canon = Lexical::new(Platform::Windows, "C:\\").unwrap();
        let rel = Relativizer::with_canonicalizer(Platform::Windows, canon.clone());
        let relative = rel.relative_path(&from, &to).unwrap();
        if from[..1].eq_ignore_ascii_case(&to[..1]) {
            prop_assert!(!relative.contains(":"), "{relative}");
            let joined = canon.canonicalize(&format!("{from}\\{relative}")).unwrap();
            prop_assert!(joined.eq_ignore_ascii_case(&to), "{joined} != {to}");
        } else {
            prop_assert_eq!(relative, to);
        }
    }
}
