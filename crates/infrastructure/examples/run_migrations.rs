//! Apply pending migrations to the configured database and exit.
//!
//! ```bash
//! DATABASE_URL="sqlite://lims.db?mode=rwc" cargo run -p infrastructure --example run_migrations
//! ```

use infrastructure::ServerConfig;
use infrastructure::database::connect;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenv::dotenv().ok();

    let config = ServerConfig::load("config")?;

    println!("Connecting to {}...", config.database.url);
    // connect() runs the migrator before handing back the connection
    let connection = connect(&config.database).await?;
    connection.close().await?;

    println!("✅ Migrations applied successfully.");

    Ok(())
}
