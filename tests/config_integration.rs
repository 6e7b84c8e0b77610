use std::path::PathBuf;

use usermgr::application::auth::{AccessGate, FixedCredentialVerifier};
use usermgr::infra::app_config::load_config_from;
use usermgr::infra::db::Database;

#[test]
fn test_config_drives_gate_and_database_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("data").join("registry.db");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "database_path = {:?}\n\n[login]\nusername = \"clerk\"\npassword = \"hunter2\"\n",
            db_path.display().to_string()
        ),
    )?;

    let config = load_config_from(&config_path);
    assert_eq!(config.resolve_database_path(None), db_path);

    let explicit = PathBuf::from("/elsewhere/users.db");
    assert_eq!(config.resolve_database_path(Some(explicit.clone())), explicit);

    let gate = AccessGate::new(FixedCredentialVerifier::from(&config.login));
    assert!(gate.authenticate("clerk", "hunter2"));
    assert!(!gate.authenticate("admin", "admin"));

    let db = Database::open_at(config.resolve_database_path(None))?;
    db.user_repo().list_all()?;
    assert!(db_path.exists());
    Ok(())
}

#[test]
fn test_missing_config_falls_back_to_admin_pair() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml"));

    let gate = AccessGate::new(FixedCredentialVerifier::from(&config.login));
    assert!(gate.authenticate("admin", "admin"));
    assert!(config.database_path.is_none());
}
