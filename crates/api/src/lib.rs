//! HTTP API: JSON presentation surface over the inventory repository.

pub mod app;
