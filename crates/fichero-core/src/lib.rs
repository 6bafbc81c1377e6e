//! fichero-core: embeddable client-record store.
//!
//! Manages a directory of per-client plain-text record files with an
//! in-memory name index for fast lookup. The interactive shell sitting on top
//! of the store lives elsewhere; this crate only exposes the operations.
//!
//! # Quick Start
//!
//! ```no_run
//! use fichero_core::ClientStore;
//!
//! fn main() -> fichero_core::Result<()> {
//!     let mut store = ClientStore::load(None)?;
//!     store.create_client("ana maría", "Corte de pelo")?;
//!     println!("{}", store.read_client("Ana María")?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod safe_io;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, StoreError};
pub use store::ClientStore;
