//! Webhook layer for delivering messages to a chat webhook.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-attempt message delivery ([`NotificationSender`], [`HttpWebhook`])

mod client;
mod error;
mod request;
mod sender;

#[cfg(test)]
mod request_tests;

pub use client::ReqwestClient;
pub use error::{DeliveryError, HttpError};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{Delivered, HttpWebhook, NotificationSender};
