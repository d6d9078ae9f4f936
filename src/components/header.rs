use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::{SITE_OWNER, SITE_TAGLINE};

/// Navigation tabs in display order: (path, label)
pub const NAV_TABS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/art", "Art"),
    ("/contact", "Contact"),
];

/// Whether the tab at `tab_path` should be highlighted for `current`
#[must_use]
pub fn is_active(tab_path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    if tab_path == "/" {
        current.is_empty()
    } else {
        current == tab_path || current.starts_with(&format!("{tab_path}/"))
    }
}

/// Class list for the nav; the open modifier shows it on narrow screens
#[must_use]
pub fn nav_class(menu_open: bool) -> &'static str {
    if menu_open {
        "header__nav header__nav--open"
    } else {
        "header__nav"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let toggle_menu = move |_| menu_open.update(|open| *open = !*open);
    let menu_label = move || if menu_open.get() { "Close menu" } else { "Open menu" };

    view! {
        <header class="header">
            <h1 class="header__name">
                <A href="/">{SITE_OWNER}</A>
            </h1>
            <span class="header__tagline">{SITE_TAGLINE}</span>
            <button
                class="header__menu-toggle"
                on:click=toggle_menu
                aria-expanded=move || menu_open.get().to_string()
                aria-label=menu_label
                title=menu_label
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <nav class=move || nav_class(menu_open.get())>
                {NAV_TABS
                    .into_iter()
                    .map(|(path, label)| {
                        let active = move || is_active(path, &pathname.get());
                        view! {
                            <A
                                href=path
                                attr:class=move || if active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| menu_open.set(false)
                            >
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
