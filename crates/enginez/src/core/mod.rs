pub mod collision;
pub mod geometry;
pub mod rng;
pub mod scene;
pub mod time;
pub mod world;
