//! This crate serves purely as a rest api abstraction for an in-memory product list server.
//! Additionally there is a canonical server implementation in the same repository.
//!
//! The server holds an ordered list of product names, addressed by zero-based index.
//!
//! ## Usage
//! For the complete usage, see the serde structs in [`api`].
//! * `GET /` returns all products as [`api::ProductsResponse`].
//! * `GET /{index}` returns the bare product name, or `404` with an empty body.
//! * `POST /` appends the [`api::NameRequest::name`], `201` on success.
//! * `PUT /{index}` overwrites a product, `204` on success, `404` or `400` otherwise.
//! * `DELETE /{index}` removes a product and shifts the following ones down, `204` or `404`.
//!
//! A request without a (non-empty) `name` is always answered with `400`.
//!
//! ## Forwarding routes
//! The server also exposes `GET /post-request/`, `GET /put-request/` and
//! `GET /delete-request/`, which take their arguments as query strings
//! (see [`api::PostRequestQuery`] and friends) and re-issue the matching call
//! against the server itself. They only report that the request was sent.
//!
//! ## Persistence
//! There is none. The list starts with four products and is lost on restart.

pub mod api;
