//! Domain Value Objects

pub mod user_name;
pub mod user_password;

pub use user_name::UserName;
pub use user_password::{RawPassword, UserPassword};
