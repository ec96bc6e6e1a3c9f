//! Feature modules. Each has a `router`, a `controller` with the HTTP
//! handlers, and a `service` that calls into the stores.

pub mod courses;
pub mod users;
