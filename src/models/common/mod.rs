pub mod address;
pub mod fields;
pub mod requests;
pub mod response;

pub use address::PostalAddress;
pub use fields::{deserialize_lenient_string, non_empty};
