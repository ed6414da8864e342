pub mod challenge;
pub mod goal;
pub mod investment;
pub mod learning;
pub mod scenario;
pub mod simulation;
pub mod summary;
