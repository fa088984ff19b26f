//! DTOs de Car
//!
//! Requests y responses de la API de coches. Los nombres de campos JSON
//! van en camelCase, igual que el frontend los consume.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Car, CarStatus};

/// Request para registrar un coche nuevo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 1, max = 20))]
    pub license_plate: String,

    pub daily_rate: Decimal,

    pub status: Option<CarStatus>,

    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
}

/// Request para actualizar un coche - sobrescribe todos los campos
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 1, max = 20))]
    pub license_plate: String,

    pub daily_rate: Decimal,

    pub status: CarStatus,

    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
}

/// Response de coche para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub daily_rate: Decimal,
    pub status: CarStatus,
    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            make: car.make,
            model: car.model,
            year: car.year,
            license_plate: car.license_plate,
            daily_rate: car.daily_rate,
            status: car.status,
            fuel_type: car.fuel_type,
            transmission_type: car.transmission_type,
            seating_capacity: car.seating_capacity,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Query de búsqueda por keyword (make/model)
#[derive(Debug, Deserialize)]
pub struct CarSearchQuery {
    pub keyword: String,
}

/// Query de filtro por rango de tarifa diaria (bordes inclusivos)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    pub min_rate: Decimal,
    pub max_rate: Decimal,
}

/// Query para cambiar el estado de un coche
#[derive(Debug, Deserialize)]
pub struct CarStatusQuery {
    pub status: CarStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let request: CreateCarRequest = serde_json::from_str(
            r#"{
                "make": "Toyota",
                "model": "Camry",
                "year": 2023,
                "licensePlate": "ABC123",
                "dailyRate": "45.00",
                "fuelType": "Gasoline",
                "transmissionType": "Automatic",
                "seatingCapacity": 5
            }"#,
        )
        .unwrap();

        assert_eq!(request.license_plate, "ABC123");
        assert_eq!(request.daily_rate, dec("45.00"));
        assert!(request.status.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_make() {
        let request: CreateCarRequest = serde_json::from_str(
            r#"{
                "make": "",
                "model": "Camry",
                "year": 2023,
                "licensePlate": "ABC123",
                "dailyRate": "45.00"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_car_response_serializes_camel_case() {
        let car = Car {
            id: Uuid::new_v4(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2022,
            license_plate: "XYZ789".to_string(),
            daily_rate: dec("40.00"),
            status: CarStatus::Available,
            fuel_type: None,
            transmission_type: None,
            seating_capacity: Some(5),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(CarResponse::from(car)).unwrap();
        assert_eq!(json["licensePlate"], "XYZ789");
        assert_eq!(json["dailyRate"], "40.00");
        assert_eq!(json["status"], "AVAILABLE");
        assert_eq!(json["seatingCapacity"], 5);
    }
}
