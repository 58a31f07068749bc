pub mod models;
pub mod restful;
pub mod schedule;
pub mod validation;
