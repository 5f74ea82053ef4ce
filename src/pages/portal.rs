//! Customer portal overview: own lead, lease terms, payment plan, gallery.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::schedule_table::ScheduleTable;
use crate::net::api;
use crate::net::types::GalleryImage;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::{format_date, try_format_date_time};
use crate::util::money::format_czk;

fn gallery_item(image: GalleryImage) -> impl IntoView {
    // The try formatter keeps undated photos caption-only instead of
    // rendering a dangling dash.
    let taken = try_format_date_time(image.taken_at.as_deref(), false);
    let has_taken = !taken.is_empty();
    let caption = image.caption.unwrap_or_default();
    view! {
        <figure class="gallery__item">
            <img class="gallery__photo" src=image.url alt=caption.clone()/>
            <figcaption class="gallery__caption">
                {caption}
                <Show when=move || has_taken>
                    <span class="gallery__taken">{taken.clone()}</span>
                </Show>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let detail = LocalResource::new(|| api::fetch_my_lead());
    let gallery = LocalResource::new(|| api::fetch_my_gallery());

    let lease = Signal::derive(move || {
        detail
            .get()
            .and_then(Result::ok)
            .and_then(|detail| detail.lease)
    });

    view! {
        <div class="portal-page">
            <header class="page__header">
                <h1>"Moje smlouva"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(detail) => {
                                let vehicle = detail
                                    .lease
                                    .as_ref()
                                    .map_or_else(|| "-".to_owned(), |lease| lease.vehicle.clone());
                                let monthly = detail
                                    .lease
                                    .as_ref()
                                    .map_or_else(
                                        || "-".to_owned(),
                                        |lease| format_czk(lease.monthly_payment),
                                    );
                                let starts = detail
                                    .lease
                                    .as_ref()
                                    .map_or_else(
                                        || "-".to_owned(),
                                        |lease| format_date(Some(lease.starts_at.as_str())),
                                    );
                                view! {
                                    <section class="portal-page__lease">
                                        <div class="detail__row">
                                            <span class="detail__label">"Vozidlo"</span>
                                            <span class="detail__value">{vehicle}</span>
                                        </div>
                                        <div class="detail__row">
                                            <span class="detail__label">"Měsíční splátka"</span>
                                            <span class="detail__value">{monthly}</span>
                                        </div>
                                        <div class="detail__row">
                                            <span class="detail__label">"Začátek smlouvy"</span>
                                            <span class="detail__value">{starts}</span>
                                        </div>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <section class="portal-page__schedule">
                <h2>"Splátkový kalendář"</h2>
                <ScheduleTable lease=lease/>
            </section>

            <section class="portal-page__gallery">
                <h2>"Fotogalerie vozidla"</h2>
                <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                    {move || {
                        gallery
                            .get()
                            .map(|result| match result {
                                Ok(images) if images.is_empty() => {
                                    view! { <p>"Žádné fotografie."</p> }.into_any()
                                }
                                Ok(images) => {
                                    view! {
                                        <div class="gallery">
                                            {images
                                                .into_iter()
                                                .map(gallery_item)
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
