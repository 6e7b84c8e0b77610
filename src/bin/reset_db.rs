use clap::Parser;
use std::path::{Path, PathBuf};

use usermgr::infra::db::Database;

#[derive(Parser, Debug)]
#[command(about = "Delete every user record from a usermgr database")]
struct Args {
    /// Database to reset (defaults to the per-user data directory)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let db_path = args.db.unwrap_or_else(Database::default_path);
    run(&db_path)
}

pub fn run(db_path: &Path) -> anyhow::Result<()> {
    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());

    let db = Database::open_at(db_path.to_path_buf())?;
    let repo = db.user_repo();

    println!("Current record count: {}", repo.count()?);

    let mut removed = 0usize;
    for user in repo.list_all()? {
        if repo.delete(user.id)? {
            removed += 1;
        }
    }
    println!("Deleted {} users", removed);

    // ids keep counting upward; the AUTOINCREMENT sequence is left alone
    let remaining = repo.count()?;
    println!("\nAfter reset: {} users", remaining);

    if remaining == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: Some records still exist in the database.");
    }

    println!("Database location: {}", db_path.display());

    Ok(())
}
