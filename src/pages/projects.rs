use leptos::prelude::*;

use crate::catalog::{filter_projects, project_counts, CategoryFilter, ProjectCategory};
use crate::components::{filter_options, FilterBar, ProjectGrid, ProjectGridEmpty};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::<ProjectCategory>::All);

    let options = filter_options(&project_counts(), ProjectCategory::icon);
    let selected = Signal::derive(move || filter.get().to_string());

    let on_select = move |value: String| match value.parse() {
        Ok(next) => set_filter.set(next),
        Err(e) => tracing::warn!(error = %e, "ignoring unknown project filter"),
    };

    view! {
        <section class="projects-section">
            <h2 class="section-title">"Projects & Achievements"</h2>
            <p class="section-subtitle">
                "Python and Jupyter data analysis, machine learning, athletics and creative work"
            </p>
            <FilterBar options=options selected=selected on_select=on_select />
            {move || {
                let projects = filter_projects(filter.get());
                if projects.is_empty() {
                    view! { <ProjectGridEmpty /> }.into_any()
                } else {
                    view! { <ProjectGrid projects=projects /> }.into_any()
                }
            }}
        </section>
    }
}
