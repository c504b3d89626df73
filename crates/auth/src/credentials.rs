//! Credential verification boundary.
//!
//! One abstraction decided at the boundary instead of ad-hoc password checks
//! per caller: admins and students share the hashing scheme but own separate
//! user tables, and each table produces the matching [`Principal`] shape.

use std::collections::HashMap;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use parchi_core::RollNumber;

use crate::{AuthError, Principal};

/// Verifies a username/password pair and produces the caller's principal.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError>;
}

/// Hash a password for storage (PHC string).
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Admin user table (username to PHC hash).
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    users: HashMap<String, String>,
}

impl AdminCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, username: impl Into<String>, password: &str) -> Result<(), AuthError> {
        let hash = hash_password(password)?;
        self.users.insert(username.into(), hash);
        Ok(())
    }
}

impl CredentialVerifier for AdminCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        // Unknown user and wrong password fail identically.
        let hash = self
            .users
            .get(username)
            .ok_or(AuthError::InvalidCredentials)?;
        if verify_password(password, hash) {
            Ok(Principal::admin(username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Student user table, keyed by roll number.
#[derive(Debug, Clone, Default)]
pub struct StudentCredentials {
    users: HashMap<String, String>,
}

impl StudentCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, roll: &RollNumber, password: &str) -> Result<(), AuthError> {
        let hash = hash_password(password)?;
        self.users.insert(roll.as_str().to_string(), hash);
        Ok(())
    }
}

impl CredentialVerifier for StudentCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let hash = self
            .users
            .get(username)
            .ok_or(AuthError::InvalidCredentials)?;
        if verify_password(password, hash) {
            Ok(Principal::student(RollNumber::new(username)))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
