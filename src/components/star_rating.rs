use leptos::*;
use crate::models::review::star_fills;

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="star-rating">
            {star_fills(rating).into_iter().map(|filled| view! {
                <span class="star" class:filled=filled>{ if filled { "★" } else { "☆" } }</span>
            }).collect::<Vec<_>>()}
            <span class="star-rating-label">{ format!("({}/5)", rating) }</span>
        </div>
    }
}
