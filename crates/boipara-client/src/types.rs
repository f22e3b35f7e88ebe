//! Response shapes of the backend.
//!
//! Endpoints return either the bare payload or the payload wrapped in a
//! `{"data": ...}` envelope; [`Payload`] accepts both.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Bare(T),
    Wrapped { data: T },
}

impl<T> Payload<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Payload::Bare(inner) | Payload::Wrapped { data: inner } => inner,
        }
    }
}
