//! Fulfillment Webhook - intent-routed dispatcher for conversational platforms
//!
//! The platform calls a single webhook for every matched intent. This crate
//! decodes the callback envelope, routes it by intent name to a registered
//! handler and writes the handler's answer back as JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
