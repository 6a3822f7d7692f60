pub mod browse;
pub mod catalog;
pub mod health;
pub mod preview;
