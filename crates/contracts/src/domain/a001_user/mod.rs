pub mod aggregate;

pub use aggregate::{UpdateUserDto, User};
