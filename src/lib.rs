//! Leave Duration & Availability Engine
//!
//! This crate provides the computational core of an HR leave-management
//! front-end: business-day counting, leave duration calculation, request
//! validation, and the leave request status machine, together with the
//! role capabilities and session lifecycle those operations depend on.

#![warn(missing_docs)]

pub mod auth;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
