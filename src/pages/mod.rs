pub mod about;
pub mod art;
pub mod contact;
pub mod home;
pub mod projects;

pub use about::AboutPage;
pub use art::ArtPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use projects::ProjectsPage;
