use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use pawshop_commerce::checkout::{CheckoutDetails, CheckoutRequest, FieldError};

/// Modal form that collects contact details for a checkout request.
///
/// Submitting a valid form only logs the order and shows a confirmation;
/// nothing leaves the browser.
#[component]
pub fn CheckoutForm(request: CheckoutRequest, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let confirmation = RwSignal::new(None::<String>);

    let details = move || CheckoutDetails {
        customer_name: name.get_untracked(),
        phone: phone.get_untracked(),
        address: address.get_untracked(),
        note: Some(note.get_untracked()).filter(|n| !n.trim().is_empty()),
    };

    let error_for = move |field: &'static str| {
        errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| view! { <p class="field-error">{e.message}</p> })
        })
    };

    let product_names = request.product_names.clone();
    let total = request.total.display();
    let lines = request
        .items
        .iter()
        .map(|item| {
            view! {
                <li>{item.name.clone()} " × " {item.quantity} " @ " {item.price.display()}</li>
            }
        })
        .collect_view();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let details = details();
        match details.validate() {
            Ok(()) => {
                tracing::info!(
                    products = %request.product_names,
                    lines = request.items.len(),
                    total = %request.total.display(),
                    "checkout submitted"
                );
                errors.set(Vec::new());
                confirmation.set(Some(details.confirmation(&request)));
            }
            Err(err) => {
                tracing::debug!(error = %err, "checkout form incomplete");
                errors.set(details.errors());
            }
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal checkout-form">
                <div class="modal-header">
                    <h3>"Checkout"</h3>
                    <button aria-label="Close checkout" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <p class="checkout-products">{product_names}</p>
                <ul class="checkout-lines">{lines}</ul>
                <p class="cart-total">"Total: " {total}</p>

                <Show
                    when=move || confirmation.with(Option::is_none)
                    fallback=move || view! {
                        <p class="confirmation">{move || confirmation.get().unwrap_or_default()}</p>
                        <button class="btn" on:click=move |_| on_close.run(())>"Done"</button>
                    }
                >
                    <form on:submit=on_submit.clone()>
                        <label for="customer_name">"Name"</label>
                        <input
                            id="customer_name"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        {move || error_for("customer_name")}

                        <label for="phone">"Phone"</label>
                        <input
                            id="phone"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        {move || error_for("phone")}

                        <label for="address">"Address"</label>
                        <textarea
                            id="address"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        ></textarea>
                        {move || error_for("address")}

                        <label for="note">"Note (optional)"</label>
                        <input
                            id="note"
                            type="text"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        />

                        <button type="submit" class="btn">"Place Order"</button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
