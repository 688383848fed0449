//! RIMS Session
//!
//! Client-local session state for the RIMS portal: a string key/value store
//! (the native stand-in for browser local storage), candidate identity
//! resolution, and the development-mode saved-jobs cache.
//!
//! # Example
//!
//! ```no_run
//! use rims_session::{SessionStore, resolve_candidate_id};
//!
//! let store = SessionStore::at_default_path();
//! let candidate = resolve_candidate_id(&store, false);
//! if candidate.is_anonymous() {
//!     println!("not signed in");
//! }
//! ```

mod cache;
mod error;
mod identity;
mod store;

pub use cache::{DEV_SAVED_JOBS_KEY, LocalSavedCache};
pub use error::SessionError;
pub use identity::{
    DEV_CANDIDATE_ID, IdentitySource, TOKEN_KEY, resolve_candidate_id, resolve_identity,
};
pub use store::SessionStore;
