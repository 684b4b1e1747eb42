// tests/support/mod.rs
#![allow(dead_code)]

pub mod helpers;
pub mod mocks;
