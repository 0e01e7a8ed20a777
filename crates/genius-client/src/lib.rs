// SPDX-License-Identifier: GPL-3.0-or-later

//! Genius API client for fetching artist metadata.
//!
//! This crate provides a client for the Genius web API, resolving free-text
//! artist searches to full artist payloads and flattening batches of search
//! terms into tabular rows.

pub mod client;
pub mod error;
pub mod models;

pub use client::GeniusClient;
pub use error::{GeniusError, Result};
pub use models::{Artist, ArtistPayload, ArtistRow};
