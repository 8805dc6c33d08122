//! Value Objects

pub mod email;
pub mod username;

pub use email::Email;
pub use username::Username;
