//! `parchi-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it produces a
//! [`Principal`] at the boundary and offers pure policy checks the operations
//! layer consumes as a "who is asking" oracle.

pub mod credentials;
pub mod error;
pub mod policy;
pub mod principal;
pub mod roles;

pub use credentials::{AdminCredentials, CredentialVerifier, StudentCredentials, hash_password};
pub use error::AuthError;
pub use policy::{ensure_admin, ensure_owner_or_admin};
pub use principal::Principal;
pub use roles::Role;
