//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::top_bar::TopBar;
use crate::pages::{
    cc_activity_report::CcActivityReportPage, collection_report::CollectionReportPage,
    dashboard::DashboardPage, dealers::DealersPage, financial_report::FinancialReportPage,
    it_release_report::ItReleaseReportPage, lead_detail::LeadDetailPage, leads::LeadsPage,
    login::LoginPage, portal::PortalPage, portal_documents::PortalDocumentsPage,
    portal_invoices::PortalInvoicesPage,
};
use crate::state::session::{BrowserStorage, SessionState, SessionStatus, hydrate_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the stored session once the browser is available; effects do
    // not run during SSR, so the server renders the loading state.
    Effect::new(move || {
        if session.get_untracked().status == SessionStatus::Loading {
            session.set(hydrate_session(&BrowserStorage));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cashdrive-portal.css"/>
        <Title text="Cash&Drive"/>

        <Router>
            <Show when=move || session.get().is_authenticated()>
                <TopBar/>
            </Show>
            <main class="app-shell">
                <Routes fallback=|| "Stránka nenalezena.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("leads") view=LeadsPage/>
                    <Route path=(StaticSegment("leads"), ParamSegment("id")) view=LeadDetailPage/>
                    <Route path=StaticSegment("dealers") view=DealersPage/>
                    <Route
                        path=(StaticSegment("reports"), StaticSegment("collection"))
                        view=CollectionReportPage
                    />
                    <Route
                        path=(StaticSegment("reports"), StaticSegment("financial"))
                        view=FinancialReportPage
                    />
                    <Route
                        path=(StaticSegment("reports"), StaticSegment("cc-activity"))
                        view=CcActivityReportPage
                    />
                    <Route
                        path=(StaticSegment("reports"), StaticSegment("it-release"))
                        view=ItReleaseReportPage
                    />
                    <Route path=StaticSegment("portal") view=PortalPage/>
                    <Route
                        path=(StaticSegment("portal"), StaticSegment("invoices"))
                        view=PortalInvoicesPage
                    />
                    <Route
                        path=(StaticSegment("portal"), StaticSegment("documents"))
                        view=PortalDocumentsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
