//! DTOs exchanged with the portal backend

pub mod job;
pub mod saved;
