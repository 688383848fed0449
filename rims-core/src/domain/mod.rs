//! Domain types

pub mod candidate;
pub mod job;

pub use candidate::CandidateId;
pub use job::{FilterOptions, JobId, JobPost, JobTypeOption};
