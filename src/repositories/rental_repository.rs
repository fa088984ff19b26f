//! Repositorio de Rentals
//!
//! Las lecturas hacen JOIN contra cars y customers para devolver el detalle
//! completo en una sola query. Las operaciones que mutan el estado del coche
//! exponen variantes `_in` para ejecutarse dentro de la transacción que abre
//! el controller.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{Rental, RentalDetail, RentalStatus};
use crate::utils::errors::AppError;

const DETAIL_SELECT: &str = r#"
SELECT r.id, r.customer_id, r.car_id, r.start_date, r.end_date, r.actual_return_date,
       r.total_cost, r.status, r.notes, r.created_at, r.updated_at,
       c.make AS car_make, c.model AS car_model, c.license_plate AS car_license_plate,
       c.daily_rate AS car_daily_rate, c.status AS car_status,
       cu.first_name AS customer_first_name, cu.last_name AS customer_last_name,
       cu.email AS customer_email
FROM rentals r
JOIN cars c ON c.id = r.car_id
JOIN customers cu ON cu.id = r.customer_id
"#;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} ORDER BY r.created_at DESC",
            DETAIL_SELECT
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalDetail>, AppError> {
        let rental =
            sqlx::query_as::<_, RentalDetail>(&format!("{} WHERE r.id = $1", DETAIL_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(rental)
    }

    /// Fila de rental sin JOIN, para decidir transiciones de estado
    pub async fn find_entity_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Variante para usar dentro de una transacción abierta
    pub async fn find_entity_by_id_in(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(rental)
    }

    pub async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} WHERE r.customer_id = $1 ORDER BY r.created_at DESC",
            DETAIL_SELECT
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} WHERE r.car_id = $1 ORDER BY r.created_at DESC",
            DETAIL_SELECT
        ))
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_status(&self, status: RentalStatus) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} WHERE r.status = $1 ORDER BY r.created_at DESC",
            DETAIL_SELECT
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Alquileres ACTIVE cuya fecha de fin ya pasó
    pub async fn find_overdue(&self, today: NaiveDate) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} WHERE r.status = 'ACTIVE' AND r.end_date < $1 ORDER BY r.end_date",
            DETAIL_SELECT
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_start_date_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RentalDetail>, AppError> {
        let rentals = sqlx::query_as::<_, RentalDetail>(&format!(
            "{} WHERE r.start_date BETWEEN $1 AND $2 ORDER BY r.start_date",
            DETAIL_SELECT
        ))
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Alquileres ACTIVE del mismo coche. El test de solape de fechas lo
    /// aplica el controller sobre el resultado.
    pub async fn find_active_by_car_in(
        &self,
        conn: &mut PgConnection,
        car_id: Uuid,
    ) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE car_id = $1 AND status = 'ACTIVE'",
        )
        .bind(car_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rentals)
    }

    /// Insertar un alquiler nuevo dentro de la transacción de creación
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_in(
        &self,
        conn: &mut PgConnection,
        customer_id: Uuid,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_cost: Decimal,
        notes: Option<&str>,
    ) -> Result<Rental, AppError> {
        let now = Utc::now();

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (id, customer_id, car_id, start_date, end_date,
                                 actual_return_date, total_cost, status, notes,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NULL, $6, 'ACTIVE', $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_cost)
        .bind(notes)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;

        Ok(rental)
    }

    /// Sobrescribir fechas, estado, notas y coste de un alquiler existente
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        actual_return_date: Option<NaiveDate>,
        status: RentalStatus,
        notes: Option<&str>,
        total_cost: Decimal,
    ) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET start_date = $2, end_date = $3, actual_return_date = $4,
                status = $5, notes = $6, total_cost = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(start_date)
        .bind(end_date)
        .bind(actual_return_date)
        .bind(status.as_str())
        .bind(notes)
        .bind(total_cost)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(rental)
    }

    /// Marcar un alquiler como COMPLETED dentro de la transacción de cierre
    pub async fn complete_in(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        actual_return_date: NaiveDate,
    ) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET actual_return_date = $2, status = 'COMPLETED', updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(actual_return_date)
        .bind(Utc::now())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(rental)
    }

    /// Borrar un alquiler dentro de la transacción de borrado
    pub async fn delete_in(&self, conn: &mut PgConnection, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
