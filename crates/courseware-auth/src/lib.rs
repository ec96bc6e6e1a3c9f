//! # Courseware Auth
//!
//! Per-request Basic authentication and ownership authorization.
//!
//! - [`credentials`]: parses an `Authorization: Basic ...` header, no I/O
//! - [`gate`]: resolves credentials to an [`Identity`](courseware_models::Identity)
//!   or a denial reason
//! - [`ownership`]: restricts course mutation to the course owner
//!
//! There are no sessions or tokens. Every protected request carries
//! credentials and goes through [`AuthGate::authenticate`].
//!
//! # Example
//!
//! ```ignore
//! use courseware_auth::{AuthGate, AuthOutcome};
//!
//! match AuthGate::authenticate(&pool, Some("Basic am9lQHNtaXRoLmNvbTpwYXNzd29yZA==")).await? {
//!     AuthOutcome::Authenticated(identity) => println!("hello {}", identity.first_name),
//!     AuthOutcome::Denied(reason) => println!("denied: {reason}"),
//! }
//! ```

pub mod credentials;
pub mod gate;
pub mod ownership;

pub use credentials::{Credentials, extract_credentials};
pub use gate::{AuthGate, AuthOutcome, DenialReason};
pub use ownership::ensure_owner;
