use blogdesk_cli::admin::create_admin;
use blogdesk_cli::seeder::{self, BlogSeedConfig};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "blogdesk-cli")]
#[command(about = "Blogdesk CLI - Administrative tools for Blogdesk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the admin account used to log into the dashboard
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake blog posts
    SeedBlogs {
        /// Number of posts to create
        #[arg(short = 'c', long, default_value = "25")]
        count: usize,

        /// Source tag for the seeded posts
        #[arg(long, default_value = "blogsmk")]
        source: String,
    },
    /// Delete every blog post
    ClearBlogs,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin { email, password } => {
            handle_create_admin(&pool, email, password).await
        }
        Commands::SeedBlogs { count, source } => handle_seed_blogs(&pool, count, source).await,
        Commands::ClearBlogs => handle_clear_blogs(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &sqlx::postgres::PgPool,
    email: Option<String>,
    password: Option<String>,
) {
    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &email, &password).await {
        Ok(user) => {
            println!("\n✅ Admin created successfully!");
            println!("   ID:    {}", user.id);
            println!("   Email: {}", user.email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_blogs(pool: &sqlx::postgres::PgPool, count: usize, source: String) {
    let config = BlogSeedConfig::new(count).with_source(source);

    if let Err(e) = seeder::seed_blogs(pool, config).await {
        eprintln!("\n❌ Error seeding blogs: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_blogs(pool: &sqlx::postgres::PgPool) {
    match seeder::clear_blogs(pool).await {
        Ok(count) => {
            println!("✅ Cleared {} blogs", count);
        }
        Err(e) => {
            eprintln!("\n❌ Error clearing blogs: {}", e);
            std::process::exit(1);
        }
    }
}
