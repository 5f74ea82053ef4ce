//! Input-filtered single-select dropdown over a fixed option list.
//!
//! DESIGN
//! ======
//! Filtering and the Enter-selects-single-match rule are pure helpers so
//! the keyboard contract tests natively. The open dropdown renders behind
//! a transparent backdrop; clicking it (or pressing Escape) closes the
//! control and clears the search term.

#[cfg(test)]
#[path = "searchable_select_test.rs"]
mod searchable_select_test;

use leptos::prelude::*;

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Case-insensitive substring filter on option labels. A blank term keeps
/// every option.
pub fn filter_options(options: &[SelectOption], term: &str) -> Vec<SelectOption> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The option Enter selects: present if and only if exactly one option
/// remains after filtering.
pub fn single_match(filtered: &[SelectOption]) -> Option<&SelectOption> {
    match filtered {
        [only] => Some(only),
        _ => None,
    }
}

#[component]
pub fn SearchableSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    selected: RwSignal<Option<SelectOption>>,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let term = RwSignal::new(String::new());
    let placeholder = if placeholder.is_empty() {
        "Vyberte...".to_owned()
    } else {
        placeholder
    };

    let filtered = Memo::new(move |_| filter_options(&options.get(), &term.get()));

    let close = move || {
        open.set(false);
        term.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            close();
        }
        "Enter" => {
            ev.prevent_default();
            let current = filtered.get_untracked();
            if let Some(only) = single_match(&current) {
                selected.set(Some(only.clone()));
                close();
            }
        }
        _ => {}
    };

    view! {
        <div class="searchable-select">
            <button
                class="searchable-select__display"
                on:click=move |_| open.update(|is_open| *is_open = !*is_open)
            >
                {move || {
                    selected
                        .get()
                        .map_or_else(|| placeholder.clone(), |option| option.label)
                }}
            </button>
            <Show when=move || open.get()>
                <div class="searchable-select__backdrop" on:click=move |_| close()></div>
                <div class="searchable-select__dropdown">
                    <input
                        class="searchable-select__search"
                        type="text"
                        placeholder="Hledat..."
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <ul class="searchable-select__options">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|option| {
                                    let label = option.label.clone();
                                    view! {
                                        <li>
                                            <button
                                                class="searchable-select__option"
                                                on:click=move |_| {
                                                    selected.set(Some(option.clone()));
                                                    close();
                                                }
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
