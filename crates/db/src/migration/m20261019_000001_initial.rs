//! Initial database migration.
//!
//! Creates the clients and mortgages tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(CLIENTS_SQL).await?;
        db.execute_unprepared(MORTGAGES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS mortgages CASCADE;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS clients CASCADE;")
            .await?;
        Ok(())
    }
}

const CLIENTS_SQL: &str = r"
CREATE TABLE clients (
    dni VARCHAR(9) PRIMARY KEY,
    name VARCHAR(60) NOT NULL,
    email VARCHAR(60) NOT NULL,
    requested_capital NUMERIC(10, 2) NOT NULL,
    CONSTRAINT uq_clients_email UNIQUE (email),
    CONSTRAINT chk_clients_dni_length CHECK (char_length(dni) = 9),
    CONSTRAINT chk_clients_capital_non_negative CHECK (requested_capital >= 0)
);
";

const MORTGAGES_SQL: &str = r"
CREATE TABLE mortgages (
    id SERIAL PRIMARY KEY,
    monthly_payment NUMERIC(10, 2) NOT NULL,
    total_amount NUMERIC(10, 2) NOT NULL,
    client_id VARCHAR(9) NOT NULL REFERENCES clients(dni) ON DELETE CASCADE
);

-- Index for listing a client's mortgages
CREATE INDEX idx_mortgages_client ON mortgages(client_id);
";
