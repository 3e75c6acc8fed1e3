use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

///
/// Pagination
/// Page accounting reported alongside list payloads.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub size: Option<u32>,
    pub total_pages: Option<u64>,
    pub total_items: Option<u64>,
}

impl Pagination {
    /// Derive the page count from the item total; partial pages count.
    #[must_use]
    pub const fn new(size: u32, total_items: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_items.div_ceil(size as u64)
        };

        Self {
            size: Some(size),
            total_pages: Some(total_pages),
            total_items: Some(total_items),
        }
    }
}

///
/// ResponseMetadata
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub status: bool,
    pub code: u16,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub time_execution: Option<f64>,
}

impl ResponseMetadata {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: true,
            code: 200,
            message: None,
            time_execution: None,
        }
    }

    #[must_use]
    pub fn err(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: false,
            code,
            message: Some(message.into()),
            time_execution: None,
        }
    }

    #[must_use]
    pub const fn with_time_execution(mut self, seconds: f64) -> Self {
        self.time_execution = Some(seconds);
        self
    }
}

///
/// PaginationMetadata
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PaginationMetadata {
    #[serde(flatten)]
    pub response: ResponseMetadata,

    pub pagination: Pagination,
}

///
/// BaseResponse
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BaseResponse<T = Json> {
    #[serde(default)]
    pub data: Option<T>,

    pub metadata: ResponseMetadata,
}

impl<T> BaseResponse<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            metadata: ResponseMetadata::ok(),
        }
    }

    #[must_use]
    pub fn err(code: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            metadata: ResponseMetadata::err(code, message),
        }
    }
}

///
/// PaginatedResponse
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PaginatedResponse<T = Json> {
    #[serde(default)]
    pub data: Option<T>,

    pub metadata: PaginationMetadata,
}

impl<T> PaginatedResponse<T> {
    #[must_use]
    pub const fn ok(data: T, pagination: Pagination) -> Self {
        Self {
            data: Some(data),
            metadata: PaginationMetadata {
                response: ResponseMetadata::ok(),
                pagination,
            },
        }
    }
}

///
/// ValidResponse
/// Outcome envelope for validation endpoints.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ValidResponse<T = Json> {
    pub status: bool,

    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ValidResponse<T> {
    #[must_use]
    pub const fn valid(data: T) -> Self {
        Self {
            status: true,
            detail: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self {
            status: false,
            detail: Some(detail.into()),
            data: None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pagination_counts_partial_pages() {
        assert_eq!(
            Pagination::new(10, 95),
            Pagination {
                size: Some(10),
                total_pages: Some(10),
                total_items: Some(95),
            }
        );
        assert_eq!(Pagination::new(10, 100).total_pages, Some(10));
        assert_eq!(Pagination::new(10, 0).total_pages, Some(0));
    }

    #[test]
    fn ok_response_shape() {
        let response = BaseResponse::ok(json!({ "name": "ice" }));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "data": { "name": "ice" },
                "metadata": { "status": true, "code": 200, "message": null, "timeExecution": null },
            })
        );
    }

    #[test]
    fn err_response_carries_message() {
        let response: BaseResponse = BaseResponse::err(404, "missing");
        assert!(!response.metadata.status);
        assert_eq!(response.metadata.code, 404);
        assert_eq!(response.metadata.message.as_deref(), Some("missing"));
        assert!(response.data.is_none());
    }

    #[test]
    fn paginated_response_flattens_metadata() {
        let response = PaginatedResponse::ok(json!([1, 2, 3]), Pagination::new(3, 7));
        let value = serde_json::to_value(&response).unwrap();
        let metadata = value.get("metadata").unwrap().as_object().unwrap();

        assert_eq!(metadata.get("status"), Some(&json!(true)));
        assert_eq!(
            metadata.get("pagination"),
            Some(&json!({ "size": 3, "totalPages": 3, "totalItems": 7 }))
        );
    }

    #[test]
    fn typed_payload_round_trips() {
        #[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
        struct Item {
            name: String,
        }

        let raw = json!({
            "status": true,
            "detail": null,
            "data": { "name": "ice" },
        });
        let response: ValidResponse<Item> = serde_json::from_value(raw).unwrap();
        assert_eq!(
            response.data,
            Some(Item {
                name: "ice".to_string()
            })
        );
    }
}
