pub mod api;
pub mod entity;
pub mod infra;
pub mod repository;
pub mod service;
