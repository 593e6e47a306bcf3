/// Page body driven by the shared product state.
/// Shows exactly one of: loading indicator, error panel, form + empty state, form + product grid.
use leptos::*;
use crate::components::product_card::ProductCard;
use crate::components::review_form::ReviewFormView;
use crate::components::status::{EmptyState, ErrorPanel, LoadingSpinner};
use crate::context::{use_products, ListState};
use crate::form::ReviewForm;

#[component]
pub fn ProductsList() -> impl IntoView {
    let products = use_products();
    // Lives here rather than in the form so a refresh does not wipe it.
    let form = create_rw_signal(ReviewForm::default());

    view! {
        <div class="products-page">
            {move || match products.list_state() {
                ListState::Loading => view! { <LoadingSpinner /> }.into_view(),
                ListState::Failed(message) => view! { <ErrorPanel message=message /> }.into_view(),
                ListState::Empty => view! {
                    <ReviewFormView form=form />
                    <EmptyState />
                }.into_view(),
                ListState::Populated(items) => view! {
                    <ReviewFormView form=form />
                    <div class="products">
                        <h2>{ "Products" }</h2>
                        <div class="product-grid">
                            {items.into_iter().map(|product| view! {
                                <ProductCard product=product />
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
