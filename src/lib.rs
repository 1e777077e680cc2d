//! StockAI Web - Rust Implementation
//!
//! Client-side navigation shell for the StockAI front end.
//!
//! This library provides:
//! - Theme resolution with localStorage persistence and OS preference fallback
//! - Route activity evaluation for nav highlighting
//! - Navigation config (brand + route table)
//! - Dioxus app shell (router, navbar, theme toggle)

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod theme;
