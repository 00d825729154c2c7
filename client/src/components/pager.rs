//! Prev / numbered / Next pagination controls.

use leptos::prelude::*;

use crate::util::pagination::{next_page, page_numbers, prev_page};

/// Renders nothing when everything fits on one page.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pager">
                <button
                    class="pager__step"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_change.run(prev_page(page.get_untracked()))
                >
                    "Prev"
                </button>
                {move || {
                    page_numbers(total.get())
                        .into_iter()
                        .map(|n| {
                            view! {
                                <button
                                    class="pager__number"
                                    class:pager__number--active=move || page.get() == n
                                    on:click=move |_| on_change.run(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pager__step"
                    disabled=move || page.get() >= total.get()
                    on:click=move |_| on_change.run(next_page(page.get_untracked(), total.get_untracked()))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
