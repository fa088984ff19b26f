pub mod car_dto;
pub mod customer_dto;
pub mod rental_dto;
