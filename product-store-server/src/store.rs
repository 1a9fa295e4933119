use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parking_lot::RwLock;

/// The products every fresh server starts with.
pub const SEED: [&str; 4] = ["Phone", "Mobile", "Computer", "Laptop"];

/// Handle to the store shared by all request handlers.
pub type SharedStore = Arc<RwLock<ProductStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no product at this index")]
    NotFound,
    #[error("request is missing a product name")]
    BadRequest,
}

impl IntoResponse for StoreError {
    /// Errors are answered with the bare status code and an empty body.
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::BadRequest => StatusCode::BAD_REQUEST,
        }
        .into_response()
    }
}

/// Ordered list of product names, addressed by zero-based index.
///
/// Duplicates are allowed. An index outside `0..len` never mutates the list
/// and always yields [`StoreError::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStore {
    products: Vec<String>,
}

impl ProductStore {
    pub fn new(products: Vec<String>) -> Self {
        Self { products }
    }

    /// A store holding the [`SEED`] products.
    pub fn seeded() -> Self {
        Self::new(SEED.iter().map(ToString::to_string).collect())
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }

    pub fn list_all(&self) -> &[String] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Result<&str, StoreError> {
        self.products
            .get(index)
            .map(String::as_str)
            .ok_or(StoreError::NotFound)
    }

    /// Appends at the end and returns the new index.
    pub fn append(&mut self, name: String) -> usize {
        self.products.push(name);
        self.products.len() - 1
    }

    pub fn replace(&mut self, index: usize, name: String) -> Result<(), StoreError> {
        let slot = self.products.get_mut(index).ok_or(StoreError::NotFound)?;
        *slot = name;
        Ok(())
    }

    /// Removes the product at `index`, the following ones shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<String, StoreError> {
        if index < self.products.len() {
            Ok(self.products.remove(index))
        } else {
            Err(StoreError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &ProductStore) -> Vec<&str> {
        store.list_all().iter().map(String::as_str).collect()
    }

    #[test]
    fn starts_with_seed() {
        let store = ProductStore::seeded();
        assert_eq!(names(&store), SEED);
        assert_eq!(store.get(0), Ok("Phone"));
        assert_eq!(store.get(3), Ok("Laptop"));
    }

    #[test]
    fn out_of_range_is_not_found() {
        let mut store = ProductStore::seeded();
        assert_eq!(store.get(4), Err(StoreError::NotFound));
        assert_eq!(store.get(99), Err(StoreError::NotFound));
        assert_eq!(
            store.replace(4, String::from("Tablet")),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(99), Err(StoreError::NotFound));
        assert_eq!(store, ProductStore::seeded());

        let empty = ProductStore::default();
        assert!(empty.list_all().is_empty());
        assert_eq!(empty.get(0), Err(StoreError::NotFound));
    }

    #[test]
    fn append_goes_last() {
        let mut store = ProductStore::seeded();
        assert_eq!(store.append(String::from("Tablet")), 4);
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(4), Ok("Tablet"));
        assert_eq!(store.list_all().last().map(String::as_str), Some("Tablet"));
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut store = ProductStore::seeded();
        store.append(String::from("Phone"));
        assert_eq!(store.get(0), store.get(4));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn replace_touches_only_one_position() {
        let mut store = ProductStore::seeded();
        store.replace(1, String::from("Tablet")).unwrap();
        assert_eq!(names(&store), ["Phone", "Tablet", "Computer", "Laptop"]);
    }

    #[test]
    fn delete_shifts_following_products() {
        let mut store = ProductStore::seeded();
        assert_eq!(store.delete(1).as_deref(), Ok("Mobile"));
        assert_eq!(names(&store), ["Phone", "Computer", "Laptop"]);
    }

    #[test]
    fn delete_last_twice() {
        let mut store = ProductStore::seeded();
        assert_eq!(store.delete(3).as_deref(), Ok("Laptop"));
        assert_eq!(store.delete(3), Err(StoreError::NotFound));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn crud_scenario() {
        let mut store = ProductStore::seeded();
        store.append(String::from("Tablet"));
        assert_eq!(store.len(), 5);

        store.replace(1, String::from("Tablet")).unwrap();
        assert_eq!(store.get(1), Ok("Tablet"));
        assert_eq!(store.get(0), Ok("Phone"));

        store.delete(0).unwrap();
        assert_eq!(names(&store), ["Tablet", "Computer", "Laptop", "Tablet"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn errors_are_bare_status_codes() {
        for (error, status) in [
            (StoreError::NotFound, StatusCode::NOT_FOUND),
            (StoreError::BadRequest, StatusCode::BAD_REQUEST),
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(body.is_empty(), "{error} has a body");
        }
    }
}
