use leptos::prelude::*;

use crate::catalog::{artwork_counts, filter_artworks, ArtCategory, CategoryFilter};
use crate::components::{filter_options, ArtworkGrid, FilterBar};

#[component]
pub fn ArtPage() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::<ArtCategory>::All);

    let options = filter_options(&artwork_counts(), |_| "");
    let selected = Signal::derive(move || filter.get().to_string());

    let on_select = move |value: String| match value.parse() {
        Ok(next) => set_filter.set(next),
        Err(e) => tracing::warn!(error = %e, "ignoring unknown art filter"),
    };

    view! {
        <section class="art-section">
            <h2 class="section-title">"Art Gallery"</h2>
            <p class="section-subtitle">
                "Visual stories inspired by nature's palette and everyday moments"
            </p>
            <FilterBar options=options selected=selected on_select=on_select />
            {move || view! { <ArtworkGrid artworks=filter_artworks(filter.get()) /> }}
        </section>
    }
}
