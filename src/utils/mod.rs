pub mod identifier;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod school_email;
pub mod validate;

pub use identifier::{generate_identifier, is_valid_identifier};
pub use parameter_error_handler::json_error_handler;
