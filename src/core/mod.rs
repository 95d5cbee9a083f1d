// src/core/mod.rs

pub mod context;
pub mod engine;
pub mod knowledge;
pub mod resolver;
pub mod tables;
pub mod types;
