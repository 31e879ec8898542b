//! Shared REST data models for the Gatehouse remote access gateway.
//!
//! The gateway's server crate mounts these types behind its endpoints;
//! this crate defines only the wire shapes and the read-only contracts
//! they are copied from. It performs no I/O and owns no live state.

pub mod docs;
pub mod models;
