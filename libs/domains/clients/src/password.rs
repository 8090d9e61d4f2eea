//! Argon2 password hashing

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{ClientError, ClientResult};

/// A derived password: the PHC hash string and the salt it was made with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub hash: String,
    pub salt: String,
}

pub fn hash_password(password: &str) -> ClientResult<HashedPassword> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ClientError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(HashedPassword {
        hash,
        salt: salt.as_str().to_string(),
    })
}

pub fn verify_password(password: &str, hash: &str) -> ClientResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| ClientError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
