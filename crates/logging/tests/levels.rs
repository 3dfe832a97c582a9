// crates/logging/tests/levels.rs
use logging::{DebugFlag, SubscriberConfig, subscriber};
use tracing::Level;
use tracing::subscriber::with_default;

fn with_cfg(cfg: SubscriberConfig, check: impl FnOnce()) {
    let sub = subscriber(cfg).unwrap();
    with_default(sub, check);
}

#[test]
fn info_not_emitted_by_default() {
    with_cfg(SubscriberConfig::default(), || {
        assert!(!tracing::enabled!(Level::INFO));
        assert!(tracing::enabled!(Level::WARN));
    });
}

#[test]
fn verbose_enables_info() {
    with_cfg(SubscriberConfig::builder().verbose(1).build(), || {
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));
    });
}

#[test]
fn debug_with_two_v() {
    with_cfg(SubscriberConfig::builder().verbose(2).build(), || {
        assert!(tracing::enabled!(Level::DEBUG));
    });
}

#[test]
fn debug_flag_enables_its_target() {
    let cfg = SubscriberConfig::builder().debug([DebugFlag::Scan]).build();
    with_cfg(cfg, || {
        assert!(tracing::enabled!(target: "debug::scan", Level::TRACE));
        assert!(!tracing::enabled!(target: "debug::build", Level::TRACE));
    });
}

#[test]
fn quiet_suppresses_warnings() {
    let cfg = SubscriberConfig::builder()
        .verbose(3)
        .debug([DebugFlag::Build])
        .quiet(true)
        .build();
    with_cfg(cfg, || {
        assert!(!tracing::enabled!(Level::WARN));
        assert!(!tracing::enabled!(target: "debug::build", Level::TRACE));
        assert!(tracing::enabled!(Level::ERROR));
    });
}
