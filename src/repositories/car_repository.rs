//! Repositorio de Cars
//!
//! Todas las queries SQL de la tabla cars viven aquí.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::car_dto::{CreateCarRequest, UpdateCarRequest};
use crate::models::{Car, CarStatus};
use crate::utils::errors::{map_constraint_violation, AppError};

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    /// Variante para usar dentro de una transacción abierta
    pub async fn find_by_id_in(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(car)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cars WHERE license_plate = $1)")
                .bind(license_plate)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn create(&self, request: &CreateCarRequest) -> Result<Car, AppError> {
        let now = Utc::now();
        let status = request.status.unwrap_or(CarStatus::Available);

        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, make, model, year, license_plate, daily_rate, status,
                              fuel_type, transmission_type, seating_capacity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.make)
        .bind(&request.model)
        .bind(request.year)
        .bind(&request.license_plate)
        .bind(request.daily_rate)
        .bind(status.as_str())
        .bind(&request.fuel_type)
        .bind(&request.transmission_type)
        .bind(request.seating_capacity)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                &format!("Car with license plate '{}' already exists", request.license_plate),
            )
        })?;

        Ok(car)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateCarRequest) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET make = $2, model = $3, year = $4, license_plate = $5, daily_rate = $6,
                status = $7, fuel_type = $8, transmission_type = $9, seating_capacity = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.make)
        .bind(&request.model)
        .bind(request.year)
        .bind(&request.license_plate)
        .bind(request.daily_rate)
        .bind(request.status.as_str())
        .bind(&request.fuel_type)
        .bind(&request.transmission_type)
        .bind(request.seating_capacity)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                &format!("Car with license plate '{}' already exists", request.license_plate),
            )
        })?;

        Ok(car)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(e, "Car has rentals and cannot be deleted")
            })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_status(&self, status: CarStatus) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_daily_rate_between(
        &self,
        min_rate: Decimal,
        max_rate: Decimal,
    ) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE daily_rate BETWEEN $1 AND $2 ORDER BY daily_rate",
        )
        .bind(min_rate)
        .bind(max_rate)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT * FROM cars
            WHERE make ILIKE '%' || $1 || '%' OR model ILIKE '%' || $1 || '%'
            ORDER BY make, model
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_make_and_model(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE make = $1 AND model = $2 ORDER BY year DESC",
        )
        .bind(make)
        .bind(model)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn update_status(&self, id: Uuid, status: CarStatus) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }

    /// Variante para usar dentro de una transacción abierta
    pub async fn update_status_in(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: CarStatus,
    ) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(car)
    }
}
