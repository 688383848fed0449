//! RIMS Core
//!
//! Core types for the RIMS recruitment-portal client.
//!
//! This crate contains:
//! - Domain types: Job postings, canonical job identifiers, candidate identity
//! - DTOs: Request/response bodies exchanged with the portal backend

pub mod domain;
pub mod dto;
