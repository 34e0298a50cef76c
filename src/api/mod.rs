//! Backend API surface: service traits and their HTTP implementation.

pub mod client;
pub mod dto;
pub mod errors;

pub use client::ApiClient;
pub use dto::{OrderConfirmation, OrderItem, OrderRequest};
pub use errors::ApiError;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    addresses::Profile,
    api::dto::{CartDto, LoginRequest, LoginResponse, ProfileDto, UpdateQuantityRequest},
    cart::models::CartLine,
    catalog::models::{Category, Page, ProductQuery, ProductSummary},
    session::AuthState,
};

/// Cart, profile, order and authentication calls.
#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the authenticated account's cart lines.
    async fn get_cart(&self) -> Result<Vec<CartLine>, ApiError>;

    /// Set the quantity of one cart line.
    async fn update_quantity(&self, line_id: i64, quantity: u32) -> Result<(), ApiError>;

    /// Remove one cart line.
    async fn remove_item(&self, line_id: i64) -> Result<(), ApiError>;

    /// Fetch the account profile, including saved addresses.
    async fn get_profile(&self) -> Result<Profile, ApiError>;

    /// Submit one order-creation request.
    async fn create_order(&self, request: OrderRequest) -> Result<OrderConfirmation, ApiError>;

    /// Exchange credentials for a session.
    async fn login(&self, email: &str, password: &str) -> Result<AuthState, ApiError>;
}

/// Read-only catalog browsing calls.
#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List products matching the query, paginated.
    async fn list_products(&self, query: ProductQuery) -> Result<Page<ProductSummary>, ApiError>;

    /// List all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

/// [`StorefrontApi`] and [`CatalogApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: ApiClient,
}

impl HttpStorefrontApi {
    /// Create an implementation backed by the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn get_cart(&self) -> Result<Vec<CartLine>, ApiError> {
        let cart: CartDto = self.client.get_json("/Cart").await?;

        Ok(cart.items.into_iter().map(Into::into).collect())
    }

    async fn update_quantity(&self, line_id: i64, quantity: u32) -> Result<(), ApiError> {
        let body = UpdateQuantityRequest {
            cart_item_id: line_id,
            quantity,
        };

        self.client.post_unit("/Cart/UpdateQuantity", &body).await
    }

    async fn remove_item(&self, line_id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/Cart/RemoveItem/{line_id}"))
            .await
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        let profile: ProfileDto = self.client.get_json("/profile/me").await?;

        Ok(profile.into())
    }

    async fn create_order(&self, request: OrderRequest) -> Result<OrderConfirmation, ApiError> {
        self.client.post_json("/orders", &request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthState, ApiError> {
        let response: LoginResponse = self
            .client
            .post_json("/auth/login", &LoginRequest { email, password })
            .await?;

        Ok(response.into())
    }
}

#[async_trait]
impl CatalogApi for HttpStorefrontApi {
    async fn list_products(&self, query: ProductQuery) -> Result<Page<ProductSummary>, ApiError> {
        self.client.get_json_query("/products", &query).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get_json("/categories").await
    }
}
