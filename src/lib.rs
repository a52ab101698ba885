pub mod authors;
pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod routes;
pub mod utils;
