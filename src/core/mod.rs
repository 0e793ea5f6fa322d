// src/core/mod.rs
//
// The pure learning kernel: scoring, path generation, path adaptation,
// and achievement evaluation. Everything here is a synchronous function
// over explicit inputs; persistence and HTTP live elsewhere.

pub mod achievements;
pub mod path_adapter;
pub mod path_generator;
pub mod scorer;
