//! Modelo de Rental
//!
//! Mapea a la tabla rentals y contiene el enum de estado del alquiler.
//! No existe un estado CANCELLED: el dominio original no lo define.

use super::car::CarStatus;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del alquiler - almacenado como TEXT en la tabla rentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentalStatus {
    Active,
    Completed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "ACTIVE",
            RentalStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ACTIVE") {
            Ok(RentalStatus::Active)
        } else if s.eq_ignore_ascii_case("COMPLETED") {
            Ok(RentalStatus::Completed)
        } else {
            Err(format!("Invalid rental status: {}", s))
        }
    }
}

impl TryFrom<String> for RentalStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub total_cost: Decimal,
    #[sqlx(try_from = "String")]
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rental con los datos del coche y del cliente asociados.
///
/// Las lecturas de rentals hacen JOIN contra cars y customers para que la
/// respuesta de la API incluya ambos resúmenes en una sola query.
#[derive(Debug, Clone, FromRow)]
pub struct RentalDetail {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub total_cost: Decimal,
    #[sqlx(try_from = "String")]
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub car_make: String,
    pub car_model: String,
    pub car_license_plate: String,
    pub car_daily_rate: Decimal,
    #[sqlx(try_from = "String")]
    pub car_status: CarStatus,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_status_round_trip() {
        for status in [RentalStatus::Active, RentalStatus::Completed] {
            let parsed: RentalStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_rental_status_has_no_cancelled_value() {
        assert!("CANCELLED".parse::<RentalStatus>().is_err());
    }

    #[test]
    fn test_rental_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RentalStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
