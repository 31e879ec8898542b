//! Models for connections currently in progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only access to a connection currently in use, as maintained by
/// whatever subsystem owns live connection state.
///
/// Every accessor is side-effect free and may return `None` when the
/// tracking layer has no value for that field. Absence means "unknown
/// or not applicable", never the empty string.
pub trait ActiveConnection {
    /// Identifier of this specific use of a connection. Distinct from
    /// [`connection_identifier`](Self::connection_identifier): two
    /// concurrent uses of the same connection carry two different
    /// values here.
    fn identifier(&self) -> Option<&str>;

    /// Identifier of the connection definition being used.
    fn connection_identifier(&self) -> Option<&str>;

    /// When this use of the connection began.
    fn start_date(&self) -> Option<DateTime<Utc>>;

    /// Host the connection originated from, if known.
    fn remote_host(&self) -> Option<&str>;

    /// Name of the user who used or is using the connection.
    fn username(&self) -> Option<&str>;

    /// Returns `true` when a new client may attach to this
    /// already-active connection.
    fn is_connectable(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Point-in-time copy of an active connection, shaped for the REST API.
///
/// Absent fields are left out of the serialized form entirely; `null`
/// never stands in for "unknown". Unrecognized fields in incoming
/// payloads are ignored so output from newer producers stays readable.
pub struct ActiveConnectionResponse {
    /// Identifier of the active connection itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Identifier of the connection this active use belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_identifier: Option<String>,
    /// Date and time the connection began.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Host the connection originated from, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_host: Option<String>,
    /// Name of the user who used or is using the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether this active connection may be connected to.
    #[serde(default)]
    pub connectable: bool,
}

impl ActiveConnectionResponse {
    /// Copies the exposed fields out of a live connection.
    ///
    /// Each accessor is read exactly once; the result never reflects
    /// later changes to `connection`. A caller that needs a consistent
    /// snapshot of a concurrently mutated source must synchronize the
    /// source itself.
    pub fn from_connection<C>(connection: &C) -> Self
    where
        C: ActiveConnection + ?Sized,
    {
        Self {
            identifier: connection.identifier().map(str::to_owned),
            connection_identifier: connection.connection_identifier().map(str::to_owned),
            start_date: connection.start_date(),
            remote_host: connection.remote_host().map(str::to_owned),
            username: connection.username().map(str::to_owned),
            connectable: connection.is_connectable(),
        }
    }
}
