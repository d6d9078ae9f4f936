use leptos::prelude::*;

use super::ProjectCard;
use crate::catalog::Project;

#[component]
pub fn ProjectGrid(projects: Vec<&'static Project>) -> impl IntoView {
    view! {
        <ul class="project-list">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art">
                <defs>
                    <linearGradient id="sageGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" style="stop-color:#c8d5b9;stop-opacity:0.4" />
                        <stop offset="100%" style="stop-color:#e8b4bc;stop-opacity:0.15" />
                    </linearGradient>
                </defs>
                <circle cx="100" cy="100" r="70" fill="none" stroke="#c8d5b9" stroke-width="1"/>
                <circle cx="100" cy="100" r="45" fill="none" stroke="#e8b4bc" stroke-width="1"/>
                <circle cx="100" cy="100" r="12" fill="url(#sageGrad)"/>
            </svg>
            <p class="project-empty-text">"Nothing here yet. Check back soon!"</p>
        </div>
    }
}
