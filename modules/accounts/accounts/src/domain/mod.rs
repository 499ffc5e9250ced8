pub mod error;
pub mod ownership;
pub mod repo;
pub mod service;
