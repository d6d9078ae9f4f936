use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::Header;
use crate::pages::{AboutPage, ArtPage, ContactPage, HomePage, ProjectsPage};

pub const SITE_OWNER: &str = "Sanya Bansal";
pub const SITE_TAGLINE: &str = "data science · machine learning · art";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title text=SITE_OWNER/>
        <Meta name="description" content="Portfolio of projects, art and contact details"/>

        <Router>
            <div class="container">
                <Header />
                <main>
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("art") view=ArtPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
