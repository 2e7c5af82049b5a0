use gymsched::config::Config;
use gymsched::config::migrate::{migrate_config, missing_keys};
use gymsched::ui::prompt::confirm_with;
use gymsched::utils::table::{Column, Table};
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_gymsched.conf", name));
    fs::write(&path, content).expect("write conf");
    path
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let mut path = env::temp_dir();
    path.push("does_not_exist_gymsched.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).expect("defaults");
    assert_eq!(cfg.session_width, 120);
    assert_eq!(cfg.min_session_minutes, 30);
    assert_eq!(cfg.column_warning_threshold, 6);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let path = temp_conf(
        "partial",
        "database: /tmp/partial.sqlite\nsession_width: 90\n",
    );

    let cfg = Config::load_from(&path).expect("config");
    assert_eq!(cfg.database, "/tmp/partial.sqlite");
    assert_eq!(cfg.session_width, 90);
    assert_eq!(cfg.min_session_minutes, 30);
}

#[test]
fn test_migrate_adds_missing_keys_only() {
    let path = temp_conf(
        "migrate",
        "database: /tmp/migrate.sqlite\nsession_width: 100\n",
    );

    let missing = missing_keys(&path).expect("missing");
    assert!(missing.contains(&"min_session_minutes"));
    assert!(!missing.contains(&"session_width"));

    let added = migrate_config(&path).expect("migrate");
    assert_eq!(added, missing);
    assert!(missing_keys(&path).expect("after").is_empty());

    let cfg = Config::load_from(&path).expect("config");
    assert_eq!(cfg.session_width, 100);
    assert_eq!(cfg.database, "/tmp/migrate.sqlite");

    // second run is a no-op
    assert!(migrate_config(&path).expect("again").is_empty());
}

#[test]
fn test_confirm_answers() {
    assert!(confirm_with("Go?", &mut Cursor::new("y\n")).unwrap());
    assert!(confirm_with("Go?", &mut Cursor::new("YES\n")).unwrap());
    assert!(!confirm_with("Go?", &mut Cursor::new("n\n")).unwrap());
    assert!(!confirm_with("Go?", &mut Cursor::new("")).unwrap());
}

#[test]
fn test_table_alignment() {
    let mut table = Table::new(vec![Column::right("ID"), Column::left("Name")]);
    table.add_row(vec!["7".into(), "Spinning".into()]);
    table.add_row(vec!["12".into(), "Yoga".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("ID  Name"));
    assert!(lines[2].starts_with(" 7  Spinning"));
    assert!(lines[3].starts_with("12  Yoga"));
}
