//! Document-level scroll lock while the cart drawer is open.

/// `overflow` value for the page body.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        "unset"
    }
}

/// Lock or release page scrolling.
#[cfg(target_arch = "wasm32")]
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::debug!("no document body, scroll lock skipped");
        return;
    };

    if let Err(err) = body.style().set_property("overflow", overflow_value(locked)) {
        tracing::warn!(error = ?err, locked, "failed to set scroll lock");
    }
}

/// Lock or release page scrolling. There is no page off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn set_scroll_locked(locked: bool) {
    tracing::trace!(locked, "scroll lock ignored off the browser");
}
