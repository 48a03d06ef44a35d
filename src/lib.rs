//! Shop Catalog Data Layer
//!
//! Persistent schema and repositories for a small film-store catalog:
//! sections, products, discount coupons, orders and order lines.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod migrator;
pub mod repositories;

pub use config::{load_config, AppConfig};
pub use db::{establish_connection, run_migrations, DbPool};
pub use entities::OrderStatus;
pub use errors::AppError;
