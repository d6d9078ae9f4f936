use leptos::prelude::*;

use crate::catalog::{Category, Project};

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let links = project.links();

    view! {
        <li class="project-card">
            <div class="project-image">
                <span class="project-icon" aria-hidden="true">{project.icon}</span>
            </div>
            <div class="project-content">
                <div class="project-header">
                    <h3>{project.title}</h3>
                    <span class="project-badge">{project.category.label()}</span>
                </div>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-tag">{*tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                {(!links.is_empty()).then(|| view! {
                    <div class="project-links">
                        {links
                            .into_iter()
                            .map(|(label, href)| view! {
                                <a href=href class="project-link" target="_blank" rel="noopener noreferrer">
                                    {label}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </li>
    }
}
