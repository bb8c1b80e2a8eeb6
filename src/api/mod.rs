//! # API Layer
//!
//! Interface adapters exposing the services over HTTP.

pub mod rest;
