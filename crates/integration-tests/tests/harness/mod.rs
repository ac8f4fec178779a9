//! Shared fixtures for end-to-end tests

#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod server;
