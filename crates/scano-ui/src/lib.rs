#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Scano media-monitoring dashboard (Yew web client).
//!
//! A thin presentation layer over the remote monitoring API: session and
//! reference-cache state, per-resource fetchers, list pagination/selection,
//! and chart adapters. Pure state logic lives in ungated modules so it tests
//! natively; everything touching the DOM or network is wasm-only.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub(crate) mod app;
#[cfg(target_arch = "wasm32")]
pub(crate) mod components;
#[cfg(target_arch = "wasm32")]
pub(crate) mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
