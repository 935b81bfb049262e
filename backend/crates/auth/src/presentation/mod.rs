//! Presentation Layer
//!
//! HTTP handlers, DTOs, session extractors and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod session;
