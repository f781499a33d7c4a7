//! # IO Module
//!
//! Interface layer exposing the domain services over HTTP.

pub mod rest;
