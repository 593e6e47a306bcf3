/// Whole-list placeholders shown instead of the product grid.
use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            <p>{ "Loading products..." }</p>
        </div>
    }
}

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h3>{ "Error Loading Products" }</h3>
            <p>{ message }</p>
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{ "No Products Found" }</h3>
            <p>{ "There are no products available at the moment." }</p>
        </div>
    }
}
