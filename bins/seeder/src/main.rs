//! Database seeder for Hipoteca development and testing.
//!
//! Seeds demo clients. Clients that already exist are left untouched, so
//! the seeder can be run repeatedly.
//!
//! Usage: cargo run --bin seeder

use hipoteca_core::identity::Dni;
use hipoteca_db::repositories::{ClientError, ClientRepository, CreateClientInput};
use hipoteca_shared::AppConfig;
use rust_decimal::Decimal;

/// Demo clients: DNI, name, email, requested capital.
const DEMO_CLIENTS: [(&str, &str, &str, i64); 2] = [
    ("45129442S", "Marta Vives", "martavivesluis@gmail.com", 32_000),
    ("65004204V", "Jesus Hidalgo", "jesushidalgo@gmail.com", 85_000),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = hipoteca_db::connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    hipoteca_db::run_migrations(&db)
        .await
        .expect("Failed to run migrations");

    println!("Seeding demo clients...");
    seed_clients(&ClientRepository::new(db)).await;

    println!("Seeding complete!");
}

/// Seeds the demo clients, skipping any that already exist.
async fn seed_clients(repo: &ClientRepository) {
    for (code, name, email, capital) in DEMO_CLIENTS {
        let dni = match Dni::parse(code) {
            Ok(dni) => dni,
            Err(e) => {
                eprintln!("  Skipping {code}: {e}");
                continue;
            }
        };

        let input = CreateClientInput {
            dni,
            name: name.to_string(),
            email: email.to_string(),
            requested_capital: Decimal::from(capital),
        };

        match repo.create_client(input).await {
            Ok(client) => println!("  Created client {} ({})", client.dni, client.name),
            Err(ClientError::DuplicateDni(_) | ClientError::DuplicateEmail(_)) => {
                println!("  Client {code} already exists, skipping...");
            }
            Err(e) => eprintln!("Failed to insert client {code}: {e}"),
        }
    }
}
