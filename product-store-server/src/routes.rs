use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use product_store_api::api::{
    DeleteRequestQuery, NameRequest, PostRequestQuery, ProductsResponse, PutRequestQuery,
};

use crate::client::{ForwardError, SelfClient};
use crate::store::{SharedStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub client: SelfClient,
}

/// The product routes and the forwarding routes, all at the root.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_all).post(append))
        .route("/:index", get(get_one).put(replace).delete(delete))
        .route("/post-request/", get(post_request))
        .route("/post-request", get(post_request))
        .route("/put-request/", get(put_request))
        .route("/put-request", get(put_request))
        .route("/delete-request/", get(delete_request))
        .route("/delete-request", get(delete_request))
        .with_state(state)
}

/// The router only knows plain digit indices, everything else (signs included) is not found.
fn parse_index(raw: &str) -> Result<usize, StoreError> {
    let index = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    };
    index.ok_or_else(|| {
        log::debug!(raw; "not a product index");
        StoreError::NotFound
    })
}

/// Extracts the product name, a missing or unreadable payload is a bad request.
fn required_name(
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<String, StoreError> {
    let name = match payload {
        Ok(Json(request)) => request.into_name(),
        Err(e) => {
            log::debug!(e:display; "unreadable payload");
            None
        }
    };
    name.ok_or_else(|| {
        log::debug!("payload without name");
        StoreError::BadRequest
    })
}

async fn list_all(State(state): State<AppState>) -> Json<ProductsResponse> {
    let products = state.store.read().list_all().to_vec();
    log::debug!(count = products.len(); "sending products");
    Json(ProductsResponse { products })
}

async fn get_one(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<String, StoreError> {
    let index = parse_index(&index)?;
    let product = state.store.read().get(index).map(String::from);
    if product.is_err() {
        log::debug!(index; "no such product");
    }
    product
}

async fn append(
    State(state): State<AppState>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<StatusCode, StoreError> {
    let name = required_name(payload)?;
    let index = state.store.write().append(name);
    log::info!(index; "appended product");
    Ok(StatusCode::CREATED)
}

async fn replace(
    State(state): State<AppState>,
    Path(index): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<StatusCode, StoreError> {
    // The payload is checked first, a nameless request is a 400 even for an unknown index.
    let name = required_name(payload)?;
    let index = parse_index(&index)?;
    state.store.write().replace(index, name).inspect_err(|_| {
        log::debug!(index; "no product to replace");
    })?;
    log::info!(index; "replaced product");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<StatusCode, StoreError> {
    let index = parse_index(&index)?;
    let removed = state.store.write().delete(index).inspect_err(|_| {
        log::debug!(index; "no product to delete");
    })?;
    log::info!(index, removed:debug; "deleted product");
    Ok(StatusCode::NO_CONTENT)
}

/// Logs the outcome of a forwarded call and answers with `message` once it was sent.
fn forwarded(result: Result<StatusCode, ForwardError>, message: String) -> Response {
    match result {
        Ok(status) => {
            log::info!(status = status.as_u16(); "forwarded request answered");
            message.into_response()
        }
        Err(e) => {
            log::warn!(e:display; "failed to forward request");
            (
                StatusCode::BAD_GATEWAY,
                format!("request could not be sent: {e}"),
            )
                .into_response()
        }
    }
}

async fn post_request(
    State(state): State<AppState>,
    Query(query): Query<PostRequestQuery>,
) -> Response {
    let product = query.product.as_deref();
    log::debug!(product:debug; "forwarding create");
    let result = state.client.create(product).await;
    forwarded(
        result,
        format!(
            "request sent successfully and \"{}\" added.",
            product.unwrap_or_default()
        ),
    )
}

async fn put_request(
    State(state): State<AppState>,
    Query(query): Query<PutRequestQuery>,
) -> Response {
    let product = query.product.as_deref();
    log::debug!(index = query.index, product:debug; "forwarding update");
    let result = state.client.update(query.index, product).await;
    forwarded(
        result,
        format!(
            "request sent successfully and \"{}\" can be updated with any index that you want.",
            product.unwrap_or_default()
        ),
    )
}

async fn delete_request(
    State(state): State<AppState>,
    Query(query): Query<DeleteRequestQuery>,
) -> Response {
    log::debug!(index = query.index; "forwarding delete");
    let result = state.client.delete(query.index).await;
    forwarded(
        result,
        format!(
            "delete index of \"{}\" from list was successful.",
            query.index
        ),
    )
}
