/// Shared product collection: one owned signal, provided through Leptos context.
/// The provider performs the initial fetch; `refresh` repeats it and replaces the snapshot.
use std::rc::Rc;

use leptos::logging::{error, log};
use leptos::*;

use crate::api::ProductApi;
use crate::error::ApiError;
use crate::models::product::Product;
use crate::utils::leptos_owner::with_owner_safe;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProductsState {
    // The first fetch starts as soon as the provider mounts.
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// What the list renders, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    Empty,
    Populated(Vec<Product>),
}

impl ProductsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(err) => {
                self.products.clear();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn list_state(&self) -> ListState {
        if self.loading {
            ListState::Loading
        } else if let Some(message) = &self.error {
            ListState::Failed(message.clone())
        } else if self.products.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated(self.products.clone())
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProductContext {
    state: RwSignal<ProductsState>,
    api: StoredValue<Rc<dyn ProductApi>>,
    owner: Option<Owner>,
}

impl ProductContext {
    pub fn state(&self) -> ReadSignal<ProductsState> {
        self.state.read_only()
    }

    pub fn api(&self) -> Rc<dyn ProductApi> {
        self.api.get_value()
    }

    pub fn list_state(&self) -> ListState {
        self.state.with(ProductsState::list_state)
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.with(|s| s.products.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.products.is_empty())
    }

    /// Fetches the collection and replaces the stored snapshot.
    /// Resolves once the new state has been applied (or discarded because the
    /// provider was unmounted while the request was in flight).
    pub async fn refresh(self) {
        let started = with_owner_safe(self.owner, "products refresh", || {
            self.state.update(ProductsState::begin_load)
        });
        if started.is_none() {
            return;
        }
        let Some(api) = self.api.try_get_value() else {
            return;
        };

        let result = api.fetch_products().await;
        match &result {
            Ok(products) => log!("[PRODUCTS] Loaded {} products", products.len()),
            Err(err) => error!("[PRODUCTS] Error fetching products: {}", err),
        }

        with_owner_safe(self.owner, "products refresh", move || {
            self.state.update(|s| s.finish_load(result))
        });
    }
}

/// Creates the shared product state under the current owner and starts the initial fetch.
pub fn provide_product_context(api: Rc<dyn ProductApi>) -> ProductContext {
    let context = ProductContext {
        state: create_rw_signal(ProductsState::default()),
        api: store_value(api),
        owner: Owner::current(),
    };
    provide_context(context);
    spawn_local(context.refresh());
    context
}

pub fn use_products() -> ProductContext {
    expect_context::<ProductContext>()
}
