//! Controller de Rentals
//!
//! El ciclo de vida del alquiler: ACTIVE → COMPLETED. Crear, completar y
//! borrar un alquiler mutan también el estado del coche, así que esas tres
//! operaciones corren dentro de una única transacción.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::rental_dto::{
    CreateRentalRequest, RentalCostResponse, RentalResponse, UpdateRentalRequest,
};
use crate::models::{CarStatus, RentalStatus};
use crate::repositories::car_repository::CarRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Número de días facturables de un rango [start,end] inclusivo.
/// El día de inicio y el de fin se cobran ambos.
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// Coste total: tarifa diaria × días inclusivos, redondeado a dos decimales
pub fn rental_cost(daily_rate: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Decimal {
    (daily_rate * Decimal::from(rental_days(start_date, end_date))).round_dp(2)
}

/// Solape inclusivo de dos rangos [start,end]: compartir un único día ya
/// cuenta como solape. Dos rangos espalda con espalda (end1 < start2) no.
pub fn ranges_overlap(
    existing_start: NaiveDate,
    existing_end: NaiveDate,
    new_start: NaiveDate,
    new_end: NaiveDate,
) -> bool {
    existing_start <= new_end && existing_end >= new_start
}

fn check_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if end_date < start_date {
        return Err(AppError::BadRequest(
            "endDate must not be before startDate".to_string(),
        ));
    }
    Ok(())
}

pub struct RentalController {
    rentals: RentalRepository,
    cars: CarRepository,
    customers: CustomerRepository,
    pool: PgPool,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            rentals: RentalRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.rentals.find_all().await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RentalResponse, AppError> {
        let rental = self
            .rentals
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        Ok(RentalResponse::from(rental))
    }

    /// Protocolo de creación: cliente existe → coche existe → coche AVAILABLE
    /// → sin solapes ACTIVE → coste → coche a RENTED → insertar. Todo dentro
    /// de una transacción para que el cambio de estado y el insert sean
    /// atómicos juntos.
    pub async fn create(&self, request: CreateRentalRequest) -> Result<RentalResponse, AppError> {
        request.validate()?;
        check_date_range(request.start_date, request.end_date)?;

        let mut tx = self.pool.begin().await?;

        if !self
            .customers
            .exists_by_id_in(&mut tx, request.customer_id)
            .await?
        {
            return Err(not_found_error("Customer", request.customer_id));
        }

        let car = self
            .cars
            .find_by_id_in(&mut tx, request.car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", request.car_id))?;

        if car.status != CarStatus::Available {
            return Err(AppError::Conflict("Car is not available for rental".to_string()));
        }

        let active_rentals = self
            .rentals
            .find_active_by_car_in(&mut tx, request.car_id)
            .await?;

        if active_rentals.iter().any(|existing| {
            ranges_overlap(
                existing.start_date,
                existing.end_date,
                request.start_date,
                request.end_date,
            )
        }) {
            return Err(AppError::Conflict(
                "Car is already rented for the selected dates".to_string(),
            ));
        }

        let total_cost = rental_cost(car.daily_rate, request.start_date, request.end_date);

        self.cars
            .update_status_in(&mut tx, car.id, CarStatus::Rented)
            .await?
            .ok_or_else(|| not_found_error("Car", car.id))?;

        let rental = self
            .rentals
            .insert_in(
                &mut tx,
                request.customer_id,
                request.car_id,
                request.start_date,
                request.end_date,
                total_cost,
                request.notes.as_deref(),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Rental {} created for car {} ({} - {}), total cost {}",
            rental.id,
            rental.car_id,
            rental.start_date,
            rental.end_date,
            rental.total_cost
        );

        self.get_by_id(rental.id).await
    }

    /// Sobrescribe fechas/estado/notas y recalcula el coste con la tarifa
    /// actual del coche. No repite los checks de disponibilidad ni de solape.
    pub async fn update(&self, id: Uuid, request: UpdateRentalRequest) -> Result<RentalResponse, AppError> {
        request.validate()?;
        check_date_range(request.start_date, request.end_date)?;

        let existing = self
            .rentals
            .find_entity_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        let car = self
            .cars
            .find_by_id(existing.car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", existing.car_id))?;

        let total_cost = rental_cost(car.daily_rate, request.start_date, request.end_date);

        self.rentals
            .update(
                id,
                request.start_date,
                request.end_date,
                request.actual_return_date,
                request.status,
                request.notes.as_deref(),
                total_cost,
            )
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        self.get_by_id(id).await
    }

    /// Registrar la devolución: fecha real, estado COMPLETED y el coche vuelve
    /// a AVAILABLE sin comprobar si otra reserva lo tomó entre medias.
    pub async fn complete(&self, id: Uuid, actual_return_date: NaiveDate) -> Result<RentalResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = self
            .rentals
            .find_entity_by_id_in(&mut tx, id)
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        self.rentals
            .complete_in(&mut tx, id, actual_return_date)
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        self.cars
            .update_status_in(&mut tx, rental.car_id, CarStatus::Available)
            .await?
            .ok_or_else(|| not_found_error("Car", rental.car_id))?;

        tx.commit().await?;

        tracing::info!("Rental {} completed, car {} released", id, rental.car_id);

        self.get_by_id(id).await
    }

    /// Borrar un alquiler; si estaba ACTIVE, el coche vuelve a AVAILABLE
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = self
            .rentals
            .find_entity_by_id_in(&mut tx, id)
            .await?
            .ok_or_else(|| not_found_error("Rental", id))?;

        if rental.status == RentalStatus::Active {
            self.cars
                .update_status_in(&mut tx, rental.car_id, CarStatus::Available)
                .await?
                .ok_or_else(|| not_found_error("Car", rental.car_id))?;
        }

        self.rentals.delete_in(&mut tx, id).await?;

        tx.commit().await?;

        tracing::info!("Rental {} deleted", id);

        Ok(())
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.rentals.find_by_customer(customer_id).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    pub async fn list_by_car(&self, car_id: Uuid) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.rentals.find_by_car(car_id).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    pub async fn list_by_status(&self, status: RentalStatus) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.rentals.find_by_status(status).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    /// Alquileres ACTIVE cuya fecha de fin es estrictamente anterior a hoy
    pub async fn list_overdue(&self) -> Result<Vec<RentalResponse>, AppError> {
        let today = Utc::now().date_naive();
        let rentals = self.rentals.find_overdue(today).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    pub async fn list_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RentalResponse>, AppError> {
        check_date_range(start_date, end_date)?;
        let rentals = self
            .rentals
            .find_by_start_date_between(start_date, end_date)
            .await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    /// Calcular el coste de un alquiler sin crearlo
    pub async fn calculate_cost(
        &self,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RentalCostResponse, AppError> {
        check_date_range(start_date, end_date)?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", car_id))?;

        Ok(RentalCostResponse {
            car_id,
            start_date,
            end_date,
            days: rental_days(start_date, end_date),
            total_cost: rental_cost(car.daily_rate, start_date, end_date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_rental_days_counts_both_endpoints() {
        // start=D, end=D+2 son tres días facturables
        assert_eq!(rental_days(date(2026, 8, 23), date(2026, 8, 25)), 3);
    }

    #[test]
    fn test_rental_days_single_day() {
        assert_eq!(rental_days(date(2026, 8, 23), date(2026, 8, 23)), 1);
    }

    #[test]
    fn test_rental_cost_three_days_at_45() {
        let cost = rental_cost(dec("45.00"), date(2026, 8, 23), date(2026, 8, 25));
        assert_eq!(cost, dec("135.00"));
    }

    #[test]
    fn test_rental_cost_single_day_is_daily_rate() {
        let cost = rental_cost(dec("85.00"), date(2026, 8, 23), date(2026, 8, 23));
        assert_eq!(cost, dec("85.00"));
    }

    #[test]
    fn test_rental_cost_rounds_to_two_decimals() {
        let cost = rental_cost(dec("33.335"), date(2026, 8, 23), date(2026, 8, 24));
        assert_eq!(cost, dec("66.67"));
    }

    #[test]
    fn test_ranges_overlap_detects_intersection() {
        // existente 23-25, nuevo 24-27
        assert!(ranges_overlap(
            date(2026, 8, 23),
            date(2026, 8, 25),
            date(2026, 8, 24),
            date(2026, 8, 27),
        ));
    }

    #[test]
    fn test_ranges_overlap_contained_range() {
        // el nuevo rango cae entero dentro del existente
        assert!(ranges_overlap(
            date(2026, 8, 20),
            date(2026, 8, 30),
            date(2026, 8, 23),
            date(2026, 8, 25),
        ));
    }

    #[test]
    fn test_ranges_overlap_shared_single_day_conflicts() {
        // el nuevo empieza el mismo día en que termina el existente
        assert!(ranges_overlap(
            date(2026, 8, 23),
            date(2026, 8, 25),
            date(2026, 8, 25),
            date(2026, 8, 27),
        ));
    }

    #[test]
    fn test_ranges_overlap_back_to_back_is_allowed() {
        // el nuevo empieza el día siguiente al fin del existente
        assert!(!ranges_overlap(
            date(2026, 8, 23),
            date(2026, 8, 25),
            date(2026, 8, 26),
            date(2026, 8, 28),
        ));
        // y también en el otro orden
        assert!(!ranges_overlap(
            date(2026, 8, 26),
            date(2026, 8, 28),
            date(2026, 8, 23),
            date(2026, 8, 25),
        ));
    }

    #[test]
    fn test_check_date_range_rejects_reversed_range() {
        assert!(check_date_range(date(2026, 8, 25), date(2026, 8, 23)).is_err());
    }

    #[test]
    fn test_check_date_range_accepts_same_day() {
        assert!(check_date_range(date(2026, 8, 23), date(2026, 8, 23)).is_ok());
    }
}
