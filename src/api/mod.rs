pub mod auth;
pub mod foods;
pub mod health;
pub mod swagger;
pub mod users;
