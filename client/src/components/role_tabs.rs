//! Role selector shared by the login and signup forms.

use leptos::prelude::*;

use crate::net::types::Role;

#[component]
pub fn RoleTabs(roles: &'static [Role], selected: RwSignal<Role>, on_select: Callback<Role>) -> impl IntoView {
    view! {
        <div class="role-tabs" role="tablist">
            {roles
                .iter()
                .map(|&role| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="role-tabs__tab"
                            class:role-tabs__tab--active=move || selected.get() == role
                            on:click=move |_| on_select.run(role)
                        >
                            {role.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
