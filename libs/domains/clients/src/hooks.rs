//! Lifecycle rules applied before a client is written.
//!
//! The hasher is passed in; the service uses [`crate::password::hash_password`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::models::{Client, ClientPatch, CreateClient, UpdateClient};
use crate::password::HashedPassword;

pub const PASSWORD_REQUIRED: &str = "Password Required";

/// Build the document to insert: stamp both timestamps, require a password
/// and replace it by its hash. A hashing failure is returned unchanged.
pub fn before_create<H>(input: CreateClient, now: DateTime<Utc>, hasher: H) -> ClientResult<Client>
where
    H: Fn(&str) -> ClientResult<HashedPassword>,
{
    let password = input
        .password
        .filter(|plain| !plain.is_empty())
        .ok_or_else(|| ClientError::Validation(PASSWORD_REQUIRED.to_string()))?;
    let HashedPassword { hash, salt } = hasher(&password)?;

    Ok(Client {
        id: Uuid::now_v7(),
        name: input.name,
        email: input.email,
        password: hash,
        salt,
        addresses: input.addresses,
        orders: input.orders,
        reservations: input.reservations,
        wishlist: input.wishlist,
        created_at: now,
        updated_at: now,
    })
}

/// Turn an update payload into the `$set` patch: stamp `updated_at` and hash
/// a supplied password. An empty password is refused rather than hashed.
pub fn before_update<H>(input: UpdateClient, now: DateTime<Utc>, hasher: H) -> ClientResult<ClientPatch>
where
    H: Fn(&str) -> ClientResult<HashedPassword>,
{
    let (password, salt) = match input.password.as_deref() {
        Some("") => return Err(ClientError::Validation(PASSWORD_REQUIRED.to_string())),
        Some(plain) => {
            let hashed = hasher(plain)?;
            (Some(hashed.hash), Some(hashed.salt))
        }
        None => (None, None),
    };

    Ok(ClientPatch {
        name: input.name,
        email: input.email,
        password,
        salt,
        addresses: input.addresses,
        orders: input.orders,
        reservations: input.reservations,
        wishlist: input.wishlist,
        updated_at: now,
    })
}
