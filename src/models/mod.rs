//! Data models for the conversation archive.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`IndexEntry`] - One row of the conversation catalog (`index.json`)
//! - [`Conversation`] / [`ChatMessage`] - An archived conversation and its messages
//! - [`Sender`] - Closed enumeration of message senders
//! - [`DisplaySettings`] - Sender display-name configuration
//!
//! These models use serde for JSON (de)serialization, with a custom
//! deserializer mapping the archive's free-form `sender` string onto
//! [`Sender`].

pub mod conversation;
pub mod index;
pub mod settings;

pub use conversation::{ChatMessage, Conversation, Sender};
pub use index::IndexEntry;
pub use settings::DisplaySettings;
