pub mod health;
pub mod speech;
