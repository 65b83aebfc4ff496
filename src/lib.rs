pub mod core;
pub mod systems;
pub mod management;
