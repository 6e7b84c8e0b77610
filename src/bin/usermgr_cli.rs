//! Headless administration for the user store.
//!
//! Runs the same access gate and record store as the desktop app, one
//! operation per invocation.

use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use usermgr::application::auth::{AccessGate, FixedCredentialVerifier};
use usermgr::application::form::UserForm;
use usermgr::domain::{UserId, UserRecord};
use usermgr::infra::app_config::{load_config, load_config_from};
use usermgr::infra::db::Database;

#[derive(Parser, Debug)]
#[command(name = "usermgr-cli")]
#[command(version)]
#[command(about = "Manage the user registry from a terminal", long_about = None)]
struct Args {
    /// SQLite file to use instead of the configured one
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    username: String,

    #[arg(short, long)]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every user, oldest first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one user
    Show { id: UserId },

    /// Add a user
    Add(UserFields),

    /// Replace every field of an existing user
    Update {
        id: UserId,
        #[command(flatten)]
        fields: UserFields,
    },

    /// Delete a user (deleting a missing id is not an error)
    Delete { id: UserId },
}

#[derive(ClapArgs, Debug)]
struct UserFields {
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    first_name: String,
    /// Parsed as an integer
    #[arg(long)]
    age: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    addresses: String,
    #[arg(long)]
    national_id: String,
}

impl From<UserFields> for UserForm {
    fn from(fields: UserFields) -> Self {
        UserForm {
            last_name: fields.last_name,
            first_name: fields.first_name,
            age: fields.age,
            email: fields.email,
            addresses: fields.addresses,
            national_id: fields.national_id,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let gate = AccessGate::new(FixedCredentialVerifier::from(&config.login));
    if !gate.authenticate(&args.username, &args.password) {
        bail!("Invalid credentials!");
    }

    let db = Database::open_at(config.resolve_database_path(args.db))
        .context("Failed to open the user store")?;
    let repo = db.user_repo();

    match args.command {
        Commands::List { json } => {
            let users = repo.list_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else if users.is_empty() {
                println!("No users recorded yet.");
            } else {
                for user in &users {
                    print_row(user);
                }
            }
        }
        Commands::Show { id } => match repo.find_by_id(id)? {
            Some(user) => print_row(&user),
            None => bail!("User {} not found", id),
        },
        Commands::Add(fields) => {
            let draft = UserForm::from(fields).to_draft()?;
            let id = repo.insert(&draft)?;
            let user = UserRecord::from_draft(id, draft);
            println!("Added user {} ({})", id, user.full_name());
        }
        Commands::Update { id, fields } => {
            let draft = UserForm::from(fields).to_draft()?;
            repo.update(id, &draft)?;
            println!("Updated user {}", id);
        }
        Commands::Delete { id } => {
            if repo.delete(id)? {
                println!("Deleted user {}", id);
            } else {
                println!("User {} did not exist; nothing deleted", id);
            }
        }
    }

    Ok(())
}

fn print_row(user: &UserRecord) {
    println!(
        "{:>5}  {:<20} {:>3}  {:<25} {:<12} {}",
        user.id,
        user.full_name(),
        user.age,
        user.email,
        user.national_id,
        user.addresses
    );
}
