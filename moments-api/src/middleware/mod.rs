pub mod auth;

pub use auth::{admin_auth_middleware, ADMIN_PASSWORD_HEADER};
