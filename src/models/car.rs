//! Modelo de Car
//!
//! Este módulo contiene el struct Car y su enum de estado.
//! Mapea exactamente al schema PostgreSQL de la tabla cars.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del coche - almacenado como TEXT en la tabla cars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "AVAILABLE",
            CarStatus::Rented => "RENTED",
            CarStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AVAILABLE") {
            Ok(CarStatus::Available)
        } else if s.eq_ignore_ascii_case("RENTED") {
            Ok(CarStatus::Rented)
        } else if s.eq_ignore_ascii_case("MAINTENANCE") {
            Ok(CarStatus::Maintenance)
        } else {
            Err(format!("Invalid car status: {}", s))
        }
    }
}

impl TryFrom<String> for CarStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub daily_rate: Decimal,
    #[sqlx(try_from = "String")]
    pub status: CarStatus,
    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_status_round_trip() {
        for status in [CarStatus::Available, CarStatus::Rented, CarStatus::Maintenance] {
            let parsed: CarStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_car_status_parse_is_case_insensitive() {
        assert_eq!("available".parse::<CarStatus>().unwrap(), CarStatus::Available);
        assert_eq!("Rented".parse::<CarStatus>().unwrap(), CarStatus::Rented);
    }

    #[test]
    fn test_car_status_rejects_unknown_value() {
        assert!("SCRAPPED".parse::<CarStatus>().is_err());
    }

    #[test]
    fn test_car_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&CarStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
    }
}
