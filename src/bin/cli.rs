use campuspass::{
    db,
    models::user::Role,
    repositories::user_repository::SqliteUserRepository,
    services::user_service::{SignupRequest, UserService},
};
use clap::{Parser, Subcommand};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "campuspass-cli")]
#[command(about = "CLI tool for managing CampusPass accounts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Role: organizer or attendee
        #[arg(short, long, default_value = "attendee")]
        role: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },
}

fn get_password(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database; the CLI only needs the database, not the
    // full server configuration.
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;
    let pool = db::create_pool(&database_url).await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Initialize services
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                email,
                name,
                role,
                password,
            } => {
                let role = Role::from_str(&role)?;
                let password = match password {
                    Some(pw) => pw,
                    None => get_password("Password")?,
                };

                let user = user_service
                    .signup(SignupRequest {
                        email,
                        password,
                        name,
                        role,
                    })
                    .await?;

                println!("Created {} {} (id {})", user.role, user.email, user.id);
            }
            UserCommands::List { limit, offset } => {
                let users = user_service.list_users(Some(limit), Some(offset)).await?;

                if users.is_empty() {
                    println!("No users found");
                } else {
                    println!("{:<6} {:<32} {:<24} {:<10}", "ID", "EMAIL", "NAME", "ROLE");
                    for user in users {
                        println!(
                            "{:<6} {:<32} {:<24} {:<10}",
                            user.id,
                            user.email,
                            user.name,
                            user.role.to_string()
                        );
                    }
                }
            }
        },
    }

    Ok(())
}
