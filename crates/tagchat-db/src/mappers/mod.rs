//! Entity <-> model mappers

mod friend;
mod message;
mod user;

pub use user::UserInsert;
