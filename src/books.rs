pub mod domain;
pub mod dto;
pub mod factory;
pub mod query;
pub mod repository;
