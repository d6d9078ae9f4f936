use leptos::prelude::*;

use crate::catalog::{Artwork, Category};

/// Likes shown on a card, counting the visitor's own like
#[must_use]
pub fn like_count(likes: u32, liked: bool) -> u32 {
    if liked {
        likes.saturating_add(1)
    } else {
        likes
    }
}

#[component]
pub fn ArtworkCard(artwork: &'static Artwork) -> impl IntoView {
    let liked = RwSignal::new(false);

    let toggle = move |_| liked.update(|l| *l = !*l);

    let label = move || {
        if liked.get() {
            "Unlike"
        } else {
            "Like"
        }
    };

    view! {
        <li class="artwork-card" class:featured=artwork.featured>
            <div class=format!("artwork-canvas artwork-canvas--{}", artwork.category)>
                {artwork.featured.then(|| view! { <span class="artwork-featured">"Featured"</span> })}
            </div>
            <div class="artwork-content">
                <h3>{artwork.title}</h3>
                <p class="artwork-description">{artwork.description}</p>
                <div class="artwork-meta">
                    <span class="artwork-medium">{artwork.medium}</span>
                    <span class="artwork-year">{artwork.year}</span>
                    <span class="artwork-category">{artwork.category.label()}</span>
                    <button
                        class=move || if liked.get() { "artwork-likes artwork-likes--liked" } else { "artwork-likes" }
                        on:click=toggle
                        aria-pressed=move || liked.get().to_string()
                        aria-label=label
                        title=label
                    >
                        "♥ "{move || like_count(artwork.likes, liked.get())}
                    </button>
                </div>
            </div>
        </li>
    }
}

#[component]
pub fn ArtworkGrid(artworks: Vec<&'static Artwork>) -> impl IntoView {
    view! {
        <ul class="artwork-grid">
            {artworks
                .into_iter()
                .map(|artwork| view! { <ArtworkCard artwork=artwork /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_adds_one_while_liked() {
        assert_eq!(like_count(24, false), 24);
        assert_eq!(like_count(24, true), 25);
    }

    #[test]
    fn unliking_restores_the_count() {
        let owner = Owner::new();
        owner.with(|| {
            let liked = RwSignal::new(false);
            liked.update(|l| *l = !*l);
            assert_eq!(like_count(7, liked.get_untracked()), 8);

            liked.update(|l| *l = !*l);
            assert_eq!(like_count(7, liked.get_untracked()), 7);
        });
    }

    #[test]
    fn like_count_saturates() {
        assert_eq!(like_count(u32::MAX, true), u32::MAX);
    }
}
