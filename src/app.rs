/// Main application entry point.
/// Wires the HTTP backend into the shared product context and renders the product page.
use std::rc::Rc;

use leptos::*;
use leptos_meta::*;

use crate::api::{HttpProductApi, ProductApi};
use crate::components::products_list::ProductsList;
use crate::config::ApiConfig;
use crate::context::provide_product_context;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    leptos::logging::log!("[APP] Using product API at {}", config.base_url());
    let api: Rc<dyn ProductApi> = Rc::new(HttpProductApi::new(config));

    view! {
        <Title text="Product Reviews" />
        <ProductsPage api=api />
    }
}

/// Provides the product context for `api` and renders the list under it.
#[component]
pub fn ProductsPage(api: Rc<dyn ProductApi>) -> impl IntoView {
    provide_product_context(api);

    view! {
        <main class="container">
            <ProductsList />
        </main>
    }
}
