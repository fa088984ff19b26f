pub mod car_repository;
pub mod customer_repository;
pub mod rental_repository;
