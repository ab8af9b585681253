pub mod client_api;
pub mod command;
pub mod recipe_client;
