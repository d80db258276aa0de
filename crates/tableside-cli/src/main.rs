use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use tableside_cli::seeder::{self, SeedConfig};
use tableside_config::DatabaseConfig;
use tableside_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "tableside-cli")]
#[command(about = "Tableside CLI - Administrative tools for Tableside", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new restaurant owner account
    CreateOwner {
        /// Username of the owner
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Insert the demo owner, restaurant, staff member and product
    SeedDemo,
    /// Seed the database with fake owners, restaurants, staff, and products
    Seed {
        /// Number of owners to create
        #[arg(short = 'o', long, default_value = "5")]
        owners: usize,

        /// Number of restaurants per owner
        #[arg(short = 'r', long, default_value = "2")]
        restaurants: usize,

        /// Number of staff per restaurant
        #[arg(short = 's', long, default_value = "4")]
        staff: usize,

        /// Number of products per restaurant
        #[arg(short = 'p', long, default_value = "12")]
        products: usize,
    },
    /// Delete all data from every table
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateOwner { username, password } => {
            handle_create_owner(&pool, username, password).await
        }
        Commands::SeedDemo => handle_seed_demo(&pool).await,
        Commands::Seed {
            owners,
            restaurants,
            staff,
            products,
        } => handle_seed(&pool, owners, restaurants, staff, products).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    let pool = tableside_db::init_db_pool(&config).await?;
    tableside_db::run_migrations(&pool).await?;
    Ok(pool)
}

fn prompt_credentials(
    username: Option<String>,
    password: Option<String>,
) -> dialoguer::Result<(String, String)> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    Ok((username, password))
}

async fn handle_create_owner(pool: &PgPool, username: Option<String>, password: Option<String>) {
    let (username, password) = match prompt_credentials(username, password) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("\n❌ Failed to read input: {e}");
            std::process::exit(1);
        }
    };

    match seeder::create_owner(pool, &username, &password).await {
        Ok(id) => {
            println!("\n✅ Owner created successfully!");
            println!("   Username: {username}");
            println!("   ID: {id}");
        }
        Err(e) => {
            eprintln!("\n❌ Error creating owner: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_seed_demo(pool: &PgPool) {
    match seeder::seed_demo(pool).await {
        Ok(Some(summary)) => {
            println!("✅ Demo data inserted");
            println!(
                "   Owner: {} / {}",
                seeder::DEMO_OWNER.0,
                seeder::DEMO_OWNER.1
            );
            println!(
                "   Staff: {} / {}",
                seeder::DEMO_STAFF.0,
                seeder::DEMO_STAFF.1
            );
            println!(
                "   Restaurant: {} ({})",
                seeder::DEMO_RESTAURANT,
                summary.restaurant_id
            );
            println!("   Product: {} ({})", seeder::DEMO_PRODUCT.0, summary.product_id);
        }
        Ok(None) => println!("ℹ️  Owners already exist, skipping demo data"),
        Err(e) => {
            eprintln!("❌ Error seeding demo data: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    pool: &PgPool,
    owners: usize,
    restaurants: usize,
    staff: usize,
    products: usize,
) {
    let config = SeedConfig::new(owners)
        .with_restaurants(restaurants)
        .with_staff(staff)
        .with_products(products);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("❌ Error seeding database: {e}");
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    match seeder::clear_all(pool).await {
        Ok(()) => println!("✅ All data cleared"),
        Err(e) => {
            eprintln!("❌ Error clearing data: {e}");
            std::process::exit(1);
        }
    }
}
