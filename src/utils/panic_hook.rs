use std::panic;
use leptos::logging::log;

/// Forwards panics to the browser console, adding a hint when the panic comes from
/// touching reactive state after its owner was disposed.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A response arrived after the component that issued it was unmounted");
            log!("[PANIC] 2. A timer fired after its signal was cleaned up");
        }
    }));
}

/// Call once from main before mounting.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
