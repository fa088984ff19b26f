//! Repositorio de Customers
//!
//! Los índices únicos sobre email y driver_license son el garante real de
//! unicidad; los checks de la capa de servicio son solo un pre-check amigable.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::customer_dto::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::models::Customer;
use crate::utils::errors::{map_constraint_violation, AppError};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    /// Check de existencia para usar dentro de una transacción abierta
    pub async fn exists_by_id_in(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;

        Ok(result.0)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn find_by_driver_license(
        &self,
        driver_license: &str,
    ) -> Result<Option<Customer>, AppError> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE driver_license = $1")
                .bind(driver_license)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    pub async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<Customer>, AppError> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE phone_number = $1")
                .bind(phone_number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Customer, AppError> {
        let now = Utc::now();

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, first_name, last_name, email, phone_number,
                                   driver_license, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone_number)
        .bind(&request.driver_license)
        .bind(&request.address)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_violation(e, "Customer with this email or driver license already exists"))?;

        Ok(customer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCustomerRequest,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                driver_license = $6, address = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone_number)
        .bind(&request.driver_license)
        .bind(&request.address)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_constraint_violation(e, "Customer with this email or driver license already exists"))?;

        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(e, "Customer has rentals and cannot be deleted")
            })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE first_name ILIKE '%' || $1 || '%'
               OR last_name ILIKE '%' || $1 || '%'
               OR email ILIKE '%' || $1 || '%'
            ORDER BY last_name, first_name
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }
}
