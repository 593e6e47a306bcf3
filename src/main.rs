// Client-side entry point, built with Trunk:
// `trunk serve --open` (set PRODUCT_API_URL to point at another backend)
use product_reviews::app::App;
use product_reviews::utils::panic_hook;

pub fn main() {
    panic_hook::init();
    leptos::mount_to_body(App);
}
