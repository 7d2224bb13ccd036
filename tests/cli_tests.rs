use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::shoplist;

#[test]
fn test_init_creates_schema() {
    let home = tempfile::tempdir().unwrap();
    let db_path = home.path().join("data").join("list.sqlite");
    let db = db_path.to_string_lossy().to_string();

    shoplist()
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    assert!(shoplist::db::initialize::is_initialized(&conn).unwrap());
    // test mode leaves the config file alone
    assert!(!home.path().join(".shoplist").join("shoplist.conf").exists());
}

#[test]
fn test_init_writes_config_file() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("list.sqlite").to_string_lossy().to_string();

    shoplist()
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("SECRET_KEY")
        .args(["--db", &db, "init"])
        .assert()
        .success();

    let conf = home.path().join(".shoplist").join("shoplist.conf");
    let text = std::fs::read_to_string(conf).expect("config written");
    assert!(text.contains(&db));
}

#[test]
fn test_config_print_masks_secret() {
    let home = tempfile::tempdir().unwrap();

    shoplist()
        .env("HOME", home.path())
        .env("SECRET_KEY", "very-private-value")
        .env("DATABASE_URL", "sqlite:////srv/shop/app.db")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("/srv/shop/app.db"))
        .stdout(contains("very-private-value").not());
}

#[test]
fn test_bad_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".shoplist");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("shoplist.conf"), "database: [unclosed\n").unwrap();

    shoplist()
        .env("HOME", home.path())
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let home = tempfile::tempdir().unwrap();
    let db = home.path().join("list.sqlite").to_string_lossy().to_string();

    shoplist()
        .env("HOME", home.path())
        .args(["--db", &db, "serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(contains("invalid bind address"));
}
