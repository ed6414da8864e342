pub mod learning;
pub mod scenarios;
