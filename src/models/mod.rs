// src/models/mod.rs

pub mod achievement;
pub mod assessment;
pub mod module;
pub mod path;
pub mod user;
