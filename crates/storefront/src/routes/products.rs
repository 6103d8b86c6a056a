//! Product listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use paradise_nursery_core::{Cart, Catalog, Category, Product};
use tracing::instrument;

use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: String,
    /// Already in the visitor's cart; the add button is disabled.
    pub in_cart: bool,
}

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub products: Vec<ProductView>,
}

impl ProductView {
    fn new(product: &Product, cart: &Cart) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            cost: product.cost.clone(),
            in_cart: cart.contains(&product.name),
        }
    }
}

impl CategoryView {
    fn new(category: &Category, cart: &Cart) -> Self {
        Self {
            name: category.category.clone(),
            products: category
                .plants
                .iter()
                .map(|p| ProductView::new(p, cart))
                .collect(),
        }
    }
}

/// Build the listing for a catalog as seen by a cart.
#[must_use]
pub fn category_views(catalog: &Catalog, cart: &Cart) -> Vec<CategoryView> {
    catalog
        .categories()
        .iter()
        .map(|c| CategoryView::new(c, cart))
        .collect()
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub categories: Vec<CategoryView>,
    pub cart_count: u64,
}

/// Display the catalog grouped by category.
#[instrument(skip(state, cart))]
pub async fn index(State(state): State<AppState>, cart: SessionCart) -> impl IntoResponse {
    ProductsIndexTemplate {
        categories: category_views(state.catalog(), cart.cart()),
        cart_count: cart.cart().total_quantity(),
    }
}
