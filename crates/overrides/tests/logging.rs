//! Installs the global logger, so it lives alone in its own test binary.

use overrides::log::LevelFilter;
use overrides::log_init::init_logger;
use overrides::OverrideSet;

#[test]
fn test_file_logger_records_and_refuses_second_install() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("overrides.log");

    init_logger(&path, LevelFilter::Debug).expect("first install succeeds");

    let _ = OverrideSet::from_css("#index_work_list { margin-top: 0 !important; }")
        .expect("table loads");

    let written = std::fs::read_to_string(&path).expect("log file exists");
    assert!(
        written.contains("[DEBUG] overrides::rule: override set built: 1 rule(s), priority 0"),
        "log was: {written}"
    );

    assert!(init_logger(&path, LevelFilter::Info).is_err());
}
