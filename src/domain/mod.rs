//! Domain layer: business entities and repository contracts.

pub mod entities;
pub mod repositories;
