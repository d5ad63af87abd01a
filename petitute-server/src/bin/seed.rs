//! Create the schema and load demo data into an empty database.
//!
//! ```ignore
//! DATABASE_PATH=petitute.db cargo run --bin petitute-seed
//! ```

use petitute_server::db::DbService;
use petitute_server::db::seed::seed_demo_data;
use petitute_server::{Config, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_environment();

    let config = Config::from_env()?;
    let db = DbService::new(&config.database_path).await?;

    let seeded = seed_demo_data(&db.pool).await?;

    if seeded {
        println!("DB initialized with demo data ({})", config.database_path);
    } else {
        println!("DB initialized ({}), existing data kept", config.database_path);
    }

    Ok(())
}
