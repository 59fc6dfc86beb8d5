//! data-gateway: a thin HTTP gateway over a MongoDB document collection.
pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
