use serde::{Deserialize, Serialize};

/// The version of this api, reported by the server on startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request body of `POST /` and `PUT /{index}`.
///
/// The name is optional on the wire, so that a missing name can be answered
/// with `400` instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NameRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The name, if present and not empty.
    pub fn into_name(self) -> Option<String> {
        self.name.filter(|name| !name.is_empty())
    }
}

/// Describes the json response format for `GET /`.
///
/// # Serialized Example
/// ```
/// # let ser = r#"
/// {
///     "products": ["Phone", "Mobile", "Computer", "Laptop"]
/// }
/// # "#;
/// # let deser: product_store_api::api::ProductsResponse
/// #    = serde_json::from_str(ser).expect("failed parsing");
/// # assert_eq!(deser.products.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<String>,
}

/// Query of `GET /post-request/`, forwarded as `POST /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequestQuery {
    pub product: Option<String>,
}

/// Query of `GET /put-request/`, forwarded as `PUT /{index}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutRequestQuery {
    pub index: usize,
    pub product: Option<String>,
}

/// Query of `GET /delete-request/`, forwarded as `DELETE /{index}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequestQuery {
    pub index: usize,
}
