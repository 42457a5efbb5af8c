//! Infrastructure layer: concrete storage and transport data shapes.

pub mod dto;
pub mod registry;
