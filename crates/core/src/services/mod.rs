pub mod collections;
pub mod portfolio_service;
pub mod projection;
pub mod record_store;
pub mod validation;
