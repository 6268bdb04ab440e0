//! Web SEO Guard: a single-page audit form backed by a grounded Gemini call.
//!
//! The model does all of the analysis. This crate builds the request,
//! validates the JSON it gets back and renders it.

#![allow(non_snake_case)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod presentation;
pub mod progress;
pub mod report;
pub mod routes;
pub mod timer;
pub mod views;
