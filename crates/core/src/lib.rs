//! Core library for metadict
//!
//! This crate implements the **Functional Core** of the metadict application:
//! pure transformation functions with zero I/O. The companion `metadict` crate
//! is the Imperative Shell that talks to the DHIS2 server and the filesystem.
//!
//! All functions here are deterministic, side-effect free, and testable with
//! plain fixture data; no HTTP client or logger is required.
//!
//! # Module Organization
//!
//! - [`auth`]: HTTP Basic credential construction
//! - [`option_set`]: domain models and response envelopes for option sets
//! - [`pagination`]: page-filter planning from server-reported totals
//! - [`dictionary`]: flattening option sets into sorted dictionary rows

pub mod auth;
pub mod dictionary;
pub mod option_set;
pub mod pagination;
