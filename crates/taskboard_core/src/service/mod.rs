//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation consumers decoupled from storage details.

pub mod auth_service;
pub mod board_service;
