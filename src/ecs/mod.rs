// src/ecs/mod.rs
//! カードの実体 (World) と、それを指す ID (Entity)。

pub mod entity;
pub mod world;

// `crate::ecs::X` で使えるように再エクスポート
pub use entity::Entity;
pub use world::World;
