pub mod error;
pub mod recipe;
pub mod server;
pub mod store;
pub mod util;
