pub mod car;
pub mod customer;
pub mod rental;

pub use car::{Car, CarStatus};
pub use customer::Customer;
pub use rental::{Rental, RentalDetail, RentalStatus};
