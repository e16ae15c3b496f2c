//! HTTP client module
//!
//! Sends authenticated JSON requests to the Web API.
//!
//! # Features
//!
//! - **Basic Authentication**: credentials applied to every request
//! - **JSON Headers**: `Content-Type: application/json` on every request
//! - **Rate Limiting**: optional token bucket using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
