//! Route handlers
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`auth`] | `POST /api/auth/login` |
//! | [`encryption`] | `GET /api/encryption/rsa/public-key` and the debug cipher routes |
//! | [`health`] | `GET /live`, `GET /ready` |

pub mod auth;
pub mod encryption;
pub mod health;
