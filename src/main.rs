use company_seed::{
    config::{database, seed_file},
    core::seed,
    errors::Result,
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal: variables can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Resolve settings before touching the database
    let settings = database::DatabaseSettings::from_env()
        .inspect_err(|e| error!("Invalid database configuration: {}", e))?;

    let departments = match seed_file::load_seed_file_from_var(env::var("SEED_FILE"))
        .inspect_err(|e| error!("Failed to load seed file: {}", e))?
    {
        Some(departments) => {
            info!("Loaded {} departments from SEED_FILE.", departments.len());
            departments
        }
        None => seed::sample_departments(),
    };

    // 4. Connect and ensure the schema
    let db = database::create_connection(&settings)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    if let Err(e) = database::create_tables(&db).await {
        error!("Failed to create tables: {}", e);
        if let Err(close_err) = db.close().await {
            error!("Failed to close database connection: {}", close_err);
        }
        return Err(e);
    }

    // 5. Seed once; the connection is closed on every path
    seed::run_once(db, &departments)
        .await
        .inspect(|_| info!("Company data seeded successfully."))
        .inspect_err(|e| error!("Failed to seed company data: {}", e))?;

    Ok(())
}
