//! Datos de ejemplo
//!
//! Inserta una flota y clientes de muestra cuando las tablas están vacías,
//! para poder levantar el backend con datos desde el primer arranque.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

struct SeedCar {
    make: &'static str,
    model: &'static str,
    year: i32,
    license_plate: &'static str,
    daily_rate: &'static str,
    status: &'static str,
    fuel_type: &'static str,
    transmission_type: &'static str,
    seating_capacity: i32,
}

struct SeedCustomer {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone_number: &'static str,
    driver_license: &'static str,
    address: &'static str,
}

const SEED_CARS: &[SeedCar] = &[
    SeedCar { make: "Toyota", model: "Camry", year: 2023, license_plate: "ABC123", daily_rate: "45.00", status: "AVAILABLE", fuel_type: "Gasoline", transmission_type: "Automatic", seating_capacity: 5 },
    SeedCar { make: "Honda", model: "Civic", year: 2022, license_plate: "XYZ789", daily_rate: "40.00", status: "AVAILABLE", fuel_type: "Gasoline", transmission_type: "Manual", seating_capacity: 5 },
    SeedCar { make: "BMW", model: "X5", year: 2023, license_plate: "BMW001", daily_rate: "85.00", status: "AVAILABLE", fuel_type: "Gasoline", transmission_type: "Automatic", seating_capacity: 7 },
    SeedCar { make: "Tesla", model: "Model 3", year: 2023, license_plate: "TSL001", daily_rate: "75.00", status: "AVAILABLE", fuel_type: "Electric", transmission_type: "Automatic", seating_capacity: 5 },
    SeedCar { make: "Ford", model: "Mustang", year: 2022, license_plate: "FRD001", daily_rate: "65.00", status: "MAINTENANCE", fuel_type: "Gasoline", transmission_type: "Manual", seating_capacity: 4 },
];

const SEED_CUSTOMERS: &[SeedCustomer] = &[
    SeedCustomer { first_name: "John", last_name: "Doe", email: "john.doe@email.com", phone_number: "555-0101", driver_license: "DL123456789", address: "123 Main St, City, State 12345" },
    SeedCustomer { first_name: "Jane", last_name: "Smith", email: "jane.smith@email.com", phone_number: "555-0102", driver_license: "DL987654321", address: "456 Oak Ave, City, State 12345" },
    SeedCustomer { first_name: "Mike", last_name: "Johnson", email: "mike.johnson@email.com", phone_number: "555-0103", driver_license: "DL456789123", address: "789 Pine Rd, City, State 12345" },
];

/// Insertar los datos de muestra si las tablas están vacías
pub async fn seed_sample_data(pool: &PgPool) -> Result<()> {
    let (car_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    if car_count == 0 {
        let now = Utc::now();
        for car in SEED_CARS {
            let daily_rate: Decimal = car.daily_rate.parse()?;
            sqlx::query(
                r#"
                INSERT INTO cars (id, make, model, year, license_plate, daily_rate, status,
                                  fuel_type, transmission_type, seating_capacity, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(car.make)
            .bind(car.model)
            .bind(car.year)
            .bind(car.license_plate)
            .bind(daily_rate)
            .bind(car.status)
            .bind(car.fuel_type)
            .bind(car.transmission_type)
            .bind(car.seating_capacity)
            .bind(now)
            .execute(pool)
            .await?;
        }
        tracing::info!("Seeded {} sample cars", SEED_CARS.len());
    }

    let (customer_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    if customer_count == 0 {
        let now = Utc::now();
        for customer in SEED_CUSTOMERS {
            sqlx::query(
                r#"
                INSERT INTO customers (id, first_name, last_name, email, phone_number,
                                       driver_license, address, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(customer.first_name)
            .bind(customer.last_name)
            .bind(customer.email)
            .bind(customer.phone_number)
            .bind(customer.driver_license)
            .bind(customer.address)
            .bind(now)
            .execute(pool)
            .await?;
        }
        tracing::info!("Seeded {} sample customers", SEED_CUSTOMERS.len());
    }

    Ok(())
}
