use leptos::prelude::*;

use crate::catalog::{Category, CategoryFilter};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Filter buttons for a category listing: "All (n)" followed by one button
/// per category with its record count.
#[must_use]
pub fn filter_options<C: Category>(counts: &[(C, usize)], icon: impl Fn(C) -> &'static str) -> Vec<FilterOption> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    std::iter::once(FilterOption {
        value: CategoryFilter::<C>::All.to_string(),
        label: format!("All ({total})"),
    })
    .chain(counts.iter().map(|(category, count)| {
        let icon = icon(*category);
        let label = if icon.is_empty() {
            format!("{} ({count})", category.label())
        } else {
            format!("{icon} {} ({count})", category.label())
        };
        FilterOption {
            value: category.to_string(),
            label,
        }
    }))
    .collect()
}

#[component]
pub fn FilterBar(
    options: Vec<FilterOption>,
    /// Value of the currently selected option
    #[prop(into)]
    selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-options">
                {options
                    .into_iter()
                    .map(|opt| {
                        let value = opt.value.clone();
                        let is_active = {
                            let value = value.clone();
                            move || selected.get() == value
                        };
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| on_select.run(value.clone())
                            >
                                {opt.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
