use clap::Parser;
use std::path::{Path, PathBuf};

use usermgr::domain::{UserDraft, UserError};
use usermgr::infra::db::Database;

const FIRST_NAMES: &[&str] = &[
    "Jane", "John", "Amira", "Kenji", "Lucia", "Omar", "Priya", "Sven", "Zoe", "Tomas",
];
const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Haddad", "Tanaka", "Rossi", "Farah", "Iyer", "Lund", "Martin", "Novak",
];
const STREETS: &[&str] = &["Main St", "Oak Ave", "Harbour Rd", "Station Sq", "Mill Ln"];

#[derive(Parser, Debug)]
#[command(about = "Fill a usermgr database with sample users")]
struct Args {
    /// Database to seed (defaults to the per-user data directory)
    #[arg(long)]
    db: Option<PathBuf>,

    /// How many users to generate
    #[arg(long, default_value_t = 10)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let db_path = args.db.unwrap_or_else(Database::default_path);
    let inserted = run(&db_path, args.count)?;

    println!("Inserted {} users", inserted);
    println!("Database location: {}", db_path.display());
    Ok(())
}

/// Builds the n-th sample user. National ids are derived from `n`, so seeding
/// twice collides instead of duplicating people.
fn sample_user(n: usize) -> UserDraft {
    let first_name = FIRST_NAMES[n % FIRST_NAMES.len()];
    let last_name = LAST_NAMES[(n / FIRST_NAMES.len() + n) % LAST_NAMES.len()];
    UserDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age: 18 + (n as i64 * 7) % 60,
        email: format!(
            "{}.{}{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            n
        ),
        addresses: format!("{} {}", 1 + n * 3, STREETS[n % STREETS.len()]),
        national_id: format!("SEED-{:05}", n),
    }
}

pub fn run(db_path: &Path, count: usize) -> anyhow::Result<usize> {
    println!("Connecting to database at: {}", db_path.display());

    let db = Database::open_at(db_path.to_path_buf())?;
    let repo = db.user_repo();

    let mut inserted = 0;
    for n in 0..count {
        let draft = sample_user(n);
        match repo.insert(&draft) {
            Ok(id) => {
                println!("Inserted user {}: {} {}", id, draft.first_name, draft.last_name);
                inserted += 1;
            }
            Err(UserError::UniquenessViolation(national_id)) => {
                log::warn!("skipping {national_id}: already present");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(inserted)
}
