//! Data models shared between connection tracking and API handlers.

pub mod active_connection;
