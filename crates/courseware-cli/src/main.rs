use anyhow::Context;
use clap::{Parser, Subcommand};
use courseware_cli::seeder::{self, SeedConfig};
use courseware_config::{DatabaseConfig, SecurityConfig};
use courseware_core::ValidationFailure;
use courseware_db::{SqlitePool, UserStore, init_db_pool};
use courseware_models::NewUser;
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "courseware-cli")]
#[command(about = "Courseware CLI - Administrative tools for Courseware", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new user account
    CreateUser {
        /// First name of the user
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the user
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and courses
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of courses per user
        #[arg(short = 'c', long, default_value = "2")]
        courses: usize,
    },
    /// Clear all seeded users and their courses
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::CreateUser {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_user(&pool, first_name, last_name, email, password).await,
        Commands::Seed { users, courses } => handle_seed(&pool, users, courses).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_user(
    pool: &SqlitePool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let first_name = prompt_if_missing(first_name, "First name")?;
    let last_name = prompt_if_missing(last_name, "Last name")?;
    let email = prompt_if_missing(email, "Email address")?;

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let input = NewUser {
        first_name: Some(first_name),
        last_name: Some(last_name),
        email_address: Some(email),
        password: Some(password),
    };

    let cost = SecurityConfig::from_env().bcrypt_cost;

    match UserStore::create(pool, input, cost).await {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   Email: {}", user.email_address);
            println!("   Name: {} {}", user.first_name, user.last_name);
            Ok(())
        }
        Err(err) => {
            let failure = ValidationFailure::normalize(&err);
            eprintln!("\n❌ Error creating user:");
            if failure.errors.is_empty() {
                eprintln!("   {}", failure.message);
            }
            for message in &failure.errors {
                eprintln!("   - {}", message);
            }
            std::process::exit(1);
        }
    }
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase())),
    }
}

async fn handle_seed(pool: &SqlitePool, users: usize, courses: usize) -> anyhow::Result<()> {
    let config = SeedConfig::new(users).with_courses_per_user(courses);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_clear_seed(pool: &SqlitePool) -> anyhow::Result<()> {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
