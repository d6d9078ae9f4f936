use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{SITE_OWNER, SITE_TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-section">
            <div class="hero-content">
                <h1 class="hero-title">{SITE_OWNER}</h1>
                <p class="hero-subtitle">{SITE_TAGLINE}</p>
                <p class="mission-statement">
                    "Data science graduate specialising in machine learning. I work in Python, "
                    "statistics and visualisation, turning messy datasets into clear, "
                    "actionable answers, and I paint when the notebooks are closed."
                </p>
                <div class="cta-buttons">
                    <A href="/about" attr:class="btn btn-primary">"About Me"</A>
                    <A href="/projects" attr:class="btn btn-secondary">"View My Work"</A>
                    <A href="/contact" attr:class="btn btn-secondary">"Get In Touch"</A>
                </div>
            </div>
        </section>
    }
}
