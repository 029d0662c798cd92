//! SeaORM entities.

pub mod like;
pub mod tweet;
pub mod user;
pub mod video;
