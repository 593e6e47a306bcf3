use leptos::*;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(product_id: String, reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! {
            <div class="reviews-empty">
                <p>{ "No reviews yet" }</p>
            </div>
        }
        .into_view();
    }

    view! {
        <ul class="reviews">
            {
                reviews.into_iter().map(|review| {
                    let key = format!("{}-{}", product_id, review.id);
                    view! {
                        <li class="review" data-key=key>
                            <p class="reviewer">{ review.reviewer }</p>
                            <StarRating rating=review.rating />
                            <p class="comment">{ review.comment }</p>
                        </li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
    .into_view()
}
