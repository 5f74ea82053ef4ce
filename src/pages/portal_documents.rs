//! Customer documents grouped by validated category.

#[cfg(test)]
#[path = "portal_documents_test.rs"]
mod portal_documents_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Document, DocumentCategory};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::format_date;

/// Group documents by category in declaration order (contract first,
/// `Other` last). Empty categories are omitted.
fn group_documents(documents: Vec<Document>) -> Vec<(DocumentCategory, Vec<Document>)> {
    let mut grouped = std::collections::BTreeMap::<DocumentCategory, Vec<Document>>::new();
    for document in documents {
        grouped.entry(document.category).or_default().push(document);
    }
    grouped.into_iter().collect()
}

fn document_row(document: Document) -> impl IntoView {
    let uploaded = format_date(document.uploaded_at.as_deref());
    let file = document.file.clone();
    let name = document.name.clone();
    view! {
        <li class="documents__row">
            <span class="documents__name">{document.name.clone()}</span>
            <span class="documents__uploaded">{uploaded}</span>
            <button
                class="btn btn--small"
                on:click=move |_| {
                    #[cfg(feature = "hydrate")]
                    {
                        let file = file.clone();
                        let name = name.clone();
                        leptos::task::spawn_local(async move {
                            if let Err(message) = crate::net::api::download_document(file, name).await {
                                log::warn!("document download failed: {message}");
                            }
                        });
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (&file, &name);
                    }
                }
            >
                "Stáhnout"
            </button>
        </li>
    }
}

#[component]
pub fn PortalDocumentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let documents = LocalResource::new(|| api::fetch_my_documents());

    view! {
        <div class="portal-page">
            <header class="page__header">
                <h1>"Dokumenty"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    documents
                        .get()
                        .map(|result| match result {
                            Ok(documents) if documents.is_empty() => {
                                view! { <p>"Žádné dokumenty."</p> }.into_any()
                            }
                            Ok(documents) => {
                                view! {
                                    <div class="documents">
                                        {group_documents(documents)
                                            .into_iter()
                                            .map(|(category, documents)| {
                                                view! {
                                                    <section class="documents__section">
                                                        <h2>{category.label()}</h2>
                                                        <ul class="documents__list">
                                                            {documents
                                                                .into_iter()
                                                                .map(document_row)
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                    </section>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
