use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use wasm_bindgen_futures::spawn_local;

use crate::context::use_products;
use crate::form::{Field, ReviewForm, SUCCESS_MESSAGE};

/// How long the success message stays up after a review is accepted.
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Review submission form. `form` is owned by the caller so the entered values and
/// the success message survive this view being re-rendered during a refresh.
#[component]
pub fn ReviewFormView(form: RwSignal<ReviewForm>) -> impl IntoView {
    let products = use_products();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = form.try_update(ReviewForm::begin_submit).flatten() else {
            return;
        };
        log!("[REVIEW] Submitting review for product {}", submission.product_id);
        let api = products.api();

        spawn_local(async move {
            let result = submission.send(api.as_ref()).await;
            if let Err(err) = &result {
                warn!("[REVIEW] Submission failed: {}", err);
            }
            let succeeded = result.is_ok();

            if let Some(token) = form.try_update(|f| f.finish(result)).flatten() {
                spawn_local(async move {
                    sleep(SUCCESS_MESSAGE_DURATION).await;
                    form.try_update(|f| f.dismiss_success(token));
                });
            }

            if succeeded {
                products.refresh().await;
            }
        });
    };

    let disabled = move || form.with(ReviewForm::is_submitting);
    let invalid = move |field: Field| move || form.with(|f| f.error(field).is_some());
    let field_error = move |field: Field| {
        move || {
            form.with(|f| f.error(field)).map(|message| view! {
                <p class="field-error">{ message }</p>
            })
        }
    };

    view! {
        <div class="review-form">
            <h2>{ "Submit a Review" }</h2>
            <form on:submit=handle_submit>
                <div class="form-field">
                    <label for="productId">{ "Select Product" }</label>
                    <select
                        id="productId"
                        name="productId"
                        class:invalid=invalid(Field::Product)
                        disabled=disabled
                        on:change=move |e| form.update(|f| f.edit(Field::Product, event_target_value(&e)))
                    >
                        <option value="" prop:selected=move || form.with(|f| f.product_id.is_empty())>
                            { "-- Select a product --" }
                        </option>
                        {move || products.products().into_iter().map(|product| {
                            let id = product.id.clone();
                            view! {
                                <option
                                    value=product.id
                                    prop:selected=move || form.with(|f| f.product_id == id)
                                >
                                    { product.name }
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                    {field_error(Field::Product)}
                </div>

                <div class="form-field">
                    <label for="reviewer">{ "Your Name" }</label>
                    <input
                        id="reviewer"
                        name="reviewer"
                        type="text"
                        placeholder="Enter your name"
                        class:invalid=invalid(Field::Reviewer)
                        disabled=disabled
                        prop:value=move || form.with(|f| f.reviewer.clone())
                        on:input=move |e| form.update(|f| f.edit(Field::Reviewer, event_target_value(&e)))
                    />
                    {field_error(Field::Reviewer)}
                </div>

                <div class="form-field">
                    <label for="rating">{ "Rating" }</label>
                    <input
                        id="rating"
                        name="rating"
                        type="number"
                        min="1"
                        max="5"
                        placeholder="1-5"
                        class:invalid=invalid(Field::Rating)
                        disabled=disabled
                        prop:value=move || form.with(|f| f.rating.clone())
                        on:input=move |e| form.update(|f| f.edit(Field::Rating, event_target_value(&e)))
                    />
                    <span class="hint">{ "(1 = Poor, 5 = Excellent)" }</span>
                    {field_error(Field::Rating)}
                </div>

                <div class="form-field">
                    <label for="comment">{ "Your Review" }</label>
                    <textarea
                        id="comment"
                        name="comment"
                        rows="4"
                        placeholder="Share your thoughts about this product..."
                        class:invalid=invalid(Field::Comment)
                        disabled=disabled
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=move |e| form.update(|f| f.edit(Field::Comment, event_target_value(&e)))
                    />
                    {field_error(Field::Comment)}
                </div>

                {move || form.with(|f| f.submit_error().map(str::to_string)).map(|message| view! {
                    <div class="submit-error" role="alert">
                        <p>{ message }</p>
                    </div>
                })}

                {move || form.with(ReviewForm::show_success).then(|| view! {
                    <div class="submit-success" role="status">
                        <p>{ SUCCESS_MESSAGE }</p>
                    </div>
                })}

                <button
                    type="submit"
                    disabled=move || disabled() || products.is_empty()
                >
                    { move || form.with(ReviewForm::submit_label) }
                </button>
            </form>
        </div>
    }
}
