//! DTOs de Rental
//!
//! Las respuestas de alquileres incluyen un resumen del coche y del cliente,
//! igual que la API original que consumía el frontend.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CarStatus, RentalDetail, RentalStatus};

/// Request para crear un alquiler
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}

/// Request para actualizar un alquiler - sobrescribe fechas, estado y notas.
/// El coste total se recalcula con la tarifa actual del coche.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub status: RentalStatus,
    pub notes: Option<String>,
}

/// Query para completar un alquiler
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRentalQuery {
    pub actual_return_date: NaiveDate,
}

/// Query de rango de fechas de inicio (bordes inclusivos)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query para calcular el coste de un alquiler sin crearlo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCostQuery {
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Resumen del coche embebido en la respuesta de alquiler
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCarSummary {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub license_plate: String,
    pub daily_rate: Decimal,
    pub status: CarStatus,
}

/// Resumen del cliente embebido en la respuesta de alquiler
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCustomerSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Response de alquiler para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub customer: RentalCustomerSummary,
    pub car: RentalCarSummary,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub total_cost: Decimal,
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RentalDetail> for RentalResponse {
    fn from(detail: RentalDetail) -> Self {
        Self {
            id: detail.id,
            customer: RentalCustomerSummary {
                id: detail.customer_id,
                first_name: detail.customer_first_name,
                last_name: detail.customer_last_name,
                email: detail.customer_email,
            },
            car: RentalCarSummary {
                id: detail.car_id,
                make: detail.car_make,
                model: detail.car_model,
                license_plate: detail.car_license_plate,
                daily_rate: detail.car_daily_rate,
                status: detail.car_status,
            },
            start_date: detail.start_date,
            end_date: detail.end_date,
            actual_return_date: detail.actual_return_date,
            total_cost: detail.total_cost,
            status: detail.status,
            notes: detail.notes,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}

/// Response del cálculo de coste
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCostResponse {
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub total_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_iso_dates() {
        let request: CreateRentalRequest = serde_json::from_str(
            r#"{
                "customerId": "11111111-1111-1111-1111-111111111111",
                "carId": "22222222-2222-2222-2222-222222222222",
                "startDate": "2026-08-23",
                "endDate": "2026-08-25"
            }"#,
        )
        .unwrap();

        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
        );
        assert_eq!(
            request.end_date,
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
        );
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_rental_response_embeds_car_and_customer() {
        let detail = RentalDetail {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            actual_return_date: None,
            total_cost: "135.00".parse().unwrap(),
            status: RentalStatus::Active,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            car_make: "Toyota".to_string(),
            car_model: "Camry".to_string(),
            car_license_plate: "ABC123".to_string(),
            car_daily_rate: "45.00".parse().unwrap(),
            car_status: CarStatus::Rented,
            customer_first_name: "John".to_string(),
            customer_last_name: "Doe".to_string(),
            customer_email: "john.doe@email.com".to_string(),
        };

        let json = serde_json::to_value(RentalResponse::from(detail)).unwrap();
        assert_eq!(json["car"]["licensePlate"], "ABC123");
        assert_eq!(json["car"]["status"], "RENTED");
        assert_eq!(json["customer"]["email"], "john.doe@email.com");
        assert_eq!(json["totalCost"], "135.00");
        assert_eq!(json["startDate"], "2026-08-23");
        assert_eq!(json["status"], "ACTIVE");
    }
}
