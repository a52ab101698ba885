pub mod ddb;
pub mod logging;
