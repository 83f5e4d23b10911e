pub mod checkout;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;
