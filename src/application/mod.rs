// Application layer - Use cases and ports
pub mod observation_repository;
pub mod river_service;
pub mod table_cache;
