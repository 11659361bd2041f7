//! Release Notifier: announce software releases in a chat channel.
//!
//! A library for turning release metadata into a rich chat message and
//! delivering it to an incoming-webhook endpoint.

pub mod config;
pub mod message;
pub mod release;
pub mod time;
pub mod webhook;
