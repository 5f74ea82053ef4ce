//! Top navigation bar with role-aware links and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserRole;
use crate::state::session::SessionState;

/// Navigation chrome shown to authenticated users. Operators see the
/// administrative sections; customers see only their portal.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let is_customer =
        move || session.get().user.is_some_and(|user| user.role == UserRole::Customer);
    let user_name = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |user| user.name)
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Server-side invalidation is best-effort; the local session is
            // torn down no matter what the backend answers.
            crate::net::api::logout().await;
            session.set(crate::state::session::teardown_session(
                &crate::state::session::BrowserStorage,
            ));
            navigate("/login", leptos_router::NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = navigate;
        }
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"Cash&Drive"</span>
            <nav class="top-bar__nav">
                <Show when=move || !is_customer()>
                    <a href="/">"Přehled"</a>
                    <a href="/leads">"Vymáhání"</a>
                    <a href="/dealers">"Dealeři"</a>
                    <a href="/reports/collection">"Report vymáhání"</a>
                    <a href="/reports/financial">"Finanční report"</a>
                    <a href="/reports/cc-activity">"Call centrum"</a>
                    <a href="/reports/it-release">"IT release"</a>
                </Show>
                <Show when=is_customer>
                    <a href="/portal">"Moje smlouva"</a>
                    <a href="/portal/invoices">"Faktury"</a>
                    <a href="/portal/documents">"Dokumenty"</a>
                </Show>
            </nav>
            <div class="top-bar__session">
                <span class="top-bar__user">{user_name}</span>
                <button class="btn top-bar__logout" on:click=on_logout>
                    "Odhlásit"
                </button>
            </div>
        </header>
    }
}
