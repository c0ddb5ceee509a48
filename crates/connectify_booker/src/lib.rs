// --- File: crates/connectify_booker/src/lib.rs ---
pub mod booking;
#[cfg(test)]
mod booking_test;
pub mod name_field;
#[cfg(test)]
mod name_field_proptest;

pub use booking::{BookingCreateBody, BookingValidationError};
pub use name_field::{resolve, FieldDescriptor, NameResponse};
