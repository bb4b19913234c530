pub mod health;
pub mod nextdate;
pub mod tasks;
