//! Outbound API client.
//!
//! [`ApiClient`] exposes one async method per service operation. The
//! per-operation differences (path, base URL, envelope, reply shape and
//! validation policy) live in the [`Operation`] table rather than in the
//! methods themselves.

mod api;
mod operation;
mod status;


pub use api::{ACCEPT_VERSION, ApiClient, HMAC_HEADER, JSON_CONTENT_TYPE, SHOP_DOMAIN_HEADER};
pub use operation::{Base, ModeRule, Operation, Route, UnknownOperation};
pub use status::{CONTACT_SUPPORT, TEMPORARY_ERROR, classify};
