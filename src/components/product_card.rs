use leptos::*;
use crate::components::reviews_list::ReviewsList;
use crate::models::product::Product;

/// One product: name, ID, review count, average (when reviewed) and its reviews.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let count = product.review_count();
    let average = product.average_rating();
    let Product { id, name, reviews } = product;
    let id_label = format!("ID: {}", id);

    view! {
        <div class="product-card">
            <div class="product-header">
                <h3>{ name }</h3>
                <p class="product-id">{ id_label }</p>
            </div>
            <div class="product-reviews">
                <div class="product-reviews-summary">
                    <h4>{ format!("Reviews ({})", count) }</h4>
                    {average.map(|avg| view! {
                        <div class="average-rating">{ format!("Avg: {}", avg) }</div>
                    })}
                </div>
                <ReviewsList product_id=id reviews=reviews />
            </div>
        </div>
    }
}
