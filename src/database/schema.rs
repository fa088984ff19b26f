//! Schema de la base de datos
//!
//! Crea las tablas al arrancar si no existen. Los índices únicos sobre
//! license_plate, email y driver_license son los garantes reales de las
//! invariantes de unicidad del dominio.

use anyhow::Result;
use sqlx::PgPool;

const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS cars (
        id UUID PRIMARY KEY,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        license_plate TEXT NOT NULL UNIQUE,
        daily_rate NUMERIC(10, 2) NOT NULL CHECK (daily_rate > 0),
        status TEXT NOT NULL DEFAULT 'AVAILABLE',
        fuel_type TEXT,
        transmission_type TEXT,
        seating_capacity INTEGER,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone_number TEXT NOT NULL,
        driver_license TEXT NOT NULL UNIQUE,
        address TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rentals (
        id UUID PRIMARY KEY,
        customer_id UUID NOT NULL REFERENCES customers(id),
        car_id UUID NOT NULL REFERENCES cars(id),
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        actual_return_date DATE,
        total_cost NUMERIC(10, 2) NOT NULL,
        status TEXT NOT NULL DEFAULT 'ACTIVE',
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    // El check de solapes filtra por (car_id, status)
    "CREATE INDEX IF NOT EXISTS idx_rentals_car_status ON rentals (car_id, status)",
    "CREATE INDEX IF NOT EXISTS idx_rentals_customer ON rentals (customer_id)",
    "CREATE INDEX IF NOT EXISTS idx_cars_status ON cars (status)",
];

/// Crear las tablas e índices si no existen
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema de base de datos verificado");
    Ok(())
}
