mod artwork_card;
mod contact_form;
mod filter_bar;
mod header;
mod project_card;
mod project_grid;

pub use artwork_card::{like_count, ArtworkCard, ArtworkGrid};
pub use contact_form::ContactForm;
pub use filter_bar::{filter_options, FilterBar, FilterOption};
pub use header::{is_active, nav_class, Header, NAV_TABS};
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
