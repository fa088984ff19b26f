//! Controller de Cars
//!
//! Lógica de negocio del registro de coches. El estado del coche también lo
//! muta el controller de rentals al crear/completar/borrar alquileres.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::models::CarStatus;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarResponse, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(CarResponse::from(car))
    }

    pub async fn create(&self, request: CreateCarRequest) -> Result<CarResponse, AppError> {
        request.validate()?;

        if request.daily_rate <= Decimal::ZERO {
            return Err(AppError::BadRequest("Daily rate must be positive".to_string()));
        }

        // Pre-check amigable; el índice único es el garante real
        if self.repository.license_plate_exists(&request.license_plate).await? {
            return Err(conflict_error("Car", "license plate", &request.license_plate));
        }

        let car = self.repository.create(&request).await?;
        Ok(CarResponse::from(car))
    }

    pub async fn update(&self, id: Uuid, request: UpdateCarRequest) -> Result<CarResponse, AppError> {
        request.validate()?;

        if request.daily_rate <= Decimal::ZERO {
            return Err(AppError::BadRequest("Daily rate must be positive".to_string()));
        }

        let car = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(CarResponse::from(car))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Car", id));
        }
        Ok(())
    }

    pub async fn list_available(&self) -> Result<Vec<CarResponse>, AppError> {
        self.list_by_status(CarStatus::Available).await
    }

    pub async fn list_by_status(&self, status: CarStatus) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_by_status(status).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.search_by_keyword(keyword).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn list_by_price_range(
        &self,
        min_rate: Decimal,
        max_rate: Decimal,
    ) -> Result<Vec<CarResponse>, AppError> {
        let cars = self
            .repository
            .find_by_daily_rate_between(min_rate, max_rate)
            .await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn list_by_make_and_model(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_by_make_and_model(make, model).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn set_status(&self, id: Uuid, status: CarStatus) -> Result<CarResponse, AppError> {
        let car = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(CarResponse::from(car))
    }
}
