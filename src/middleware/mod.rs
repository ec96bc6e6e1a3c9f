//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor that runs the
//!   authentication gate
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Basic <base64(email:password)>` on every
//!    protected request
//! 2. `AuthUser` hands the raw header to the gate
//! 3. A denial short-circuits with 401 `{"errors":["Access Denied"]}`
//! 4. Otherwise the handler runs with the resolved identity
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn current_user(AuthUser(identity): AuthUser) -> Json<PublicUser> {
//!     Json(identity.public())
//! }
//! ```

pub mod auth;
