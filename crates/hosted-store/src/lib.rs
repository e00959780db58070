//! Hosted journal store client.
//!
//! This crate talks to the hosted PostgREST endpoint that owns the `notes`
//! table (a Supabase project in the usual deployment). It supports the four
//! operations the journal needs:
//!
//! - `select * order by created_at desc`
//! - `insert {title, content, summary}`
//! - `update {title, content, summary} where id = :id`
//! - `delete where id = :id`
//!
//! # Example
//!
//! ```no_run
//! use hosted_store::{HostedConfig, HostedStore};
//! use journal_core::JournalStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HostedConfig::new("https://abcd.supabase.co", "anon-key");
//! let store = HostedStore::new(config)?;
//!
//! for entry in store.list().await? {
//!     println!("{} {}", entry.display_date(), entry.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::HostedStore;
pub use config::{HostedConfig, DEFAULT_TABLE};
pub use error::HostedError;
