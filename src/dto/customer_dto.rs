//! DTOs de Customer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Customer;

/// Request para registrar un cliente nuevo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 50))]
    pub driver_license: String,

    pub address: Option<String>,
}

/// Request para actualizar un cliente - sobrescribe todos los campos
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 50))]
    pub driver_license: String,

    pub address: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub driver_license: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            driver_license: customer.driver_license,
            address: customer.address,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Query de búsqueda por keyword (nombre/email)
#[derive(Debug, Deserialize)]
pub struct CustomerSearchQuery {
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_invalid_email() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{
                "firstName": "John",
                "lastName": "Doe",
                "email": "not-an-email",
                "phoneNumber": "555-0101",
                "driverLicense": "DL123456789"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_customer_response_serializes_camel_case() {
        let customer = Customer {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            phone_number: "555-0102".to_string(),
            driver_license: "DL987654321".to_string(),
            address: Some("456 Oak Ave".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(CustomerResponse::from(customer)).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["driverLicense"], "DL987654321");
        assert_eq!(json["phoneNumber"], "555-0102");
    }
}
