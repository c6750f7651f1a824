//! Core library for navdeck.
//!
//! Contains the card and group document model, the board store (reads and
//! writes the two JSON documents through a storage backend), the admin token
//! check, and the outbound search URL builder. This crate depends on
//! `navdeck-storage` for the backend trait and knows nothing about HTTP.

pub mod auth;
pub mod board;
pub mod card;
pub mod error;
pub mod search;
