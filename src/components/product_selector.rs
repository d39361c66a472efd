use crate::process::{ProductId, CATALOG};
use leptos::*;

#[component]
pub fn ProductSelector(product: Memo<ProductId>, on_select: Callback<ProductId>) -> impl IntoView {
    let buttons = CATALOG
        .iter()
        .map(|item| {
            let id = item.id;
            view! {
                <button
                    class=format!("product-option product--{}", item.color)
                    class:selected=move || product.get() == id
                    on:click=move |_| {
                        if product.get_untracked() != id {
                            log::debug!("Selected product: {}", id.key());
                            on_select.call(id);
                        }
                    }
                >
                    <span class="product-glyph">{item.glyph}</span>
                    <span class="product-name">{item.name}</span>
                    <span class="product-example">{item.example()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="product-selector">
            <h3>"Select Product Type"</h3>
            <div class="product-options">{buttons}</div>

            {move || {
                let selected = product.get().product();
                view! {
                    <div class="product-info">
                        <h4>
                            <span class="product-glyph">{selected.glyph}</span>
                            {selected.name}
                        </h4>
                        <p>{selected.description}</p>
                        <p class="product-examples">
                            <strong>"Examples: "</strong>
                            {selected.examples_line()}
                        </p>
                    </div>
                }
            }}
        </div>
    }
}
