pub mod entities;

pub use entities::{AccountCredentials, AccountRole, AccountStatus, Principal};
