//! Catalog browsing: listing and debounced search.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use tracing::error;

use crate::{
    api::CatalogApi,
    catalog::models::{Category, Page, ProductQuery, ProductSummary},
};

/// Read-only catalog browsing against the backend.
#[derive(Debug, Default)]
pub struct CatalogView;

impl CatalogView {
    /// List products for the query.
    ///
    /// A failed read is logged and degrades to an empty page.
    pub async fn search(api: &dyn CatalogApi, query: ProductQuery) -> Page<ProductSummary> {
        let page = query.page;
        let page_size = query.page_size;

        match api.list_products(query).await {
            Ok(page) => page,
            Err(e) => {
                error!(error = %e, "product listing failed, showing empty page");
                Page::empty(page, page_size)
            }
        }
    }

    /// List all categories, degrading to an empty list on failure.
    pub async fn categories(api: &dyn CatalogApi) -> Vec<Category> {
        match api.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                error!(error = %e, "category listing failed, showing none");
                Vec::new()
            }
        }
    }
}

/// Debounces a search input: a query only fires once no newer input has
/// arrived within the delay window.
#[derive(Debug, Clone)]
pub struct SearchBox {
    state: Arc<Mutex<(u64, String)>>,
    delay: Duration,
}

impl SearchBox {
    /// Create a search box with the given debounce delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new((0, String::new()))),
            delay,
        }
    }

    /// Record new input, returning its generation token.
    pub fn input(&self, text: &str) -> u64 {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        guard.0 += 1;
        guard.1 = text.to_owned();
        guard.0
    }

    /// Wait out the debounce delay; returns the query only when the given
    /// generation is still the latest input.
    pub async fn settled(&self, generation: u64) -> Option<String> {
        tokio::time::sleep(self.delay).await;

        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        (guard.0 == generation).then(|| guard.1.clone())
    }
}
