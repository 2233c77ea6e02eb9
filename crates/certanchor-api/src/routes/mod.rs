//! # API Routes
//!
//! Route modules, one per resource.

pub mod certificates;
pub mod network;
