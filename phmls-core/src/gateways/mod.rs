pub mod geo;
pub mod notify;
