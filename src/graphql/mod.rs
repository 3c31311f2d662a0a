//! GraphQL Client
//!
//! Frontend bindings to the task store's GraphQL API: the request envelope,
//! response unwrapping, and per-domain operation wrappers.

mod task;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use task::*;

/// Endpoint the store serves its GraphQL API from
pub const GRAPHQL_ENDPOINT: &str = "/graphql";

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct GraphQlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Join GraphQL error messages into one diagnostic string
fn error_summary(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// POST one operation and unwrap the response envelope.
/// GraphQL-level errors count as failures, as do non-2xx responses.
async fn execute<V, T>(query: &str, variables: V) -> Result<T, String>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(GRAPHQL_ENDPOINT)
        .json(&GraphQlRequest { query, variables })
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), GRAPHQL_ENDPOINT));
    }

    let payload: GraphQlResponse<T> = response.json().await.map_err(|e| e.to_string())?;
    if let Some(errors) = payload.errors.filter(|errs| !errs.is_empty()) {
        return Err(error_summary(&errors));
    }
    payload
        .data
        .ok_or_else(|| "response contained no data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_envelope_carries_query_and_variables() {
        let request = GraphQlRequest {
            query: "query Tasks { tasks { id } }",
            variables: (),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "query Tasks { tasks { id } }", "variables": null})
        );
    }

    #[test]
    fn response_surfaces_graphql_errors() {
        let payload: GraphQlResponse<serde_json::Value> = serde_json::from_value(
            json!({"errors": [{"message": "boom"}, {"message": "again"}]}),
        )
        .unwrap();
        assert!(payload.data.is_none());
        assert_eq!(error_summary(&payload.errors.unwrap()), "boom; again");
    }

    #[test]
    fn response_tolerates_missing_errors_key() {
        let payload: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(json!({"data": {"tasks": []}})).unwrap();
        assert!(payload.errors.is_none());
        assert_eq!(payload.data.unwrap(), json!({"tasks": []}));
    }
}
