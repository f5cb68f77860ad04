pub mod food_service;
pub mod token_service;
pub mod user_service;
