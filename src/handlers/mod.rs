// src/handlers/mod.rs

pub mod achievement;
pub mod assessment;
pub mod auth;
pub mod catalog;
pub mod path;
pub mod user;
