//! rest-kit - timezone and limit/offset pagination helpers for axum services
//!
//! The helpers in [`timezone`] and [`pagination`] are plain functions over
//! request parts; [`extract`] wires them into axum handlers and [`routes`]
//! serves them as a small reference API.

pub mod common;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod routes;
pub mod timezone;
