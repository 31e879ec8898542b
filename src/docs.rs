//! OpenAPI components exported for the gateway's API documentation.

use crate::models::active_connection::ActiveConnectionResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(ActiveConnectionResponse)),
    tags(
        (name = "active-connections", description = "Monitoring of connections currently in use")
    )
)]
/// Schema registry aggregated into the gateway's published API document.
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_doc_exports_the_active_connection_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ActiveConnectionResponse"));
    }
}
