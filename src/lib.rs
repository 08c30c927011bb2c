//! # DBLP Client
//!
//! A Rust client library for the DBLP computer science bibliography.
//! Author and publication records are created from their identity alone and
//! fetch their XML document the first time any of their fields is read.
//!
//! ## Features
//!
//! - **Author Search**: Find authors by name
//! - **Lazy Records**: Fetch and parse each record once, on first field access
//! - **Async Support**: Built on tokio and reqwest
//! - **Error Handling**: Distinct errors for transport, parsing, missing records and unknown fields
//!
//! ## Quick Start
//!
//! ```no_run
//! use dblp_client::DblpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DblpClient::new();
//!
//!     let authors = client.search_authors("Matt Luongo").await?;
//!     for author in &authors {
//!         // No request has been made for `author` until here
//!         println!("{} ({})", author.name().await?, author.urlpt());
//!
//!         for publication in author.publications().await? {
//!             println!(
//!                 "  [{}] {}",
//!                 publication.year().await?,
//!                 publication.title().await?.unwrap_or("untitled")
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Reading fields by name
//!
//! ```no_run
//! use dblp_client::DblpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DblpClient::new();
//!     let publication = client.publication("journals/cacm/Knuth74");
//!
//!     let journal = publication.get("journal").await?;
//!     println!("{:?}", journal.as_str());
//!
//!     // Undeclared names are rejected before any request
//!     assert!(publication.get("abstract").await.is_err());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod lazy;
pub mod models;
pub mod parser;
pub mod records;

// Re-export main types for convenience
pub use client::{DblpClient, search};
pub use config::ClientConfig;
pub use error::{DblpError, ErrorKind, Result};
pub use lazy::{LazyRecord, RecordField};
pub use models::{Citation, PublicationRecord, Publisher, Series};
pub use records::{Author, AuthorField, FieldValue, Publication, PublicationField};
