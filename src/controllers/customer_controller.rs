//! Controller de Customers
//!
//! Los checks de unicidad de email y licencia son read-then-write: sirven
//! para dar un mensaje claro, pero el índice único de la base de datos es
//! quien decide bajo escritores concurrentes.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", id))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(conflict_error("Customer", "email", &request.email));
        }

        if self
            .repository
            .find_by_driver_license(&request.driver_license)
            .await?
            .is_some()
        {
            return Err(conflict_error("Customer", "driver license", &request.driver_license));
        }

        let customer = self.repository.create(&request).await?;
        Ok(CustomerResponse::from(customer))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", id))?;

        // Solo rechazar si el nuevo valor colisiona con OTRO cliente
        if existing.email != request.email
            && self.repository.find_by_email(&request.email).await?.is_some()
        {
            return Err(conflict_error("Customer", "email", &request.email));
        }

        if existing.driver_license != request.driver_license
            && self
                .repository
                .find_by_driver_license(&request.driver_license)
                .await?
                .is_some()
        {
            return Err(conflict_error("Customer", "driver license", &request.driver_license));
        }

        let customer = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Customer", id))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Customer", id));
        }
        Ok(())
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.search_by_keyword(keyword).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer not found with email: {}", email)))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn get_by_driver_license(&self, license: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_driver_license(license)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Customer not found with driver license: {}", license))
            })?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn get_by_phone_number(&self, phone: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_phone_number(phone)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Customer not found with phone number: {}", phone))
            })?;

        Ok(CustomerResponse::from(customer))
    }
}
