//! Shared test helpers for `pitchsync-core` integration tests.
//!
//! An in-memory store implementing every repository port and a URL-keyed fake
//! fetcher, so engine tests can focus on behaviour instead of plumbing.

#![allow(dead_code)]

pub mod fetcher;
pub mod fixtures;
pub mod repositories;
