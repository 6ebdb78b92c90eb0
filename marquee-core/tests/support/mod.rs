//! Shared helpers for core integration tests.

#![allow(dead_code)]

pub mod gemini_server;
pub mod provider;
