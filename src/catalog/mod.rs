//! In-memory portfolio content and the category filters over it.

pub mod models;

pub use models::*;

static PROJECTS: [Project; 7] = [
    Project {
        id: 1,
        title: "Salary Data Analysis",
        description: "Salary analysis in Python and Jupyter Notebook covering salary distributions, career progression and compensation trends, with statistical methods and Matplotlib/Seaborn visualisations.",
        icon: "💰",
        tags: &["Python", "Jupyter", "Pandas", "Data Analysis"],
        category: ProjectCategory::Python,
        slides_url: Some("/projects/data-science/salary/salary.slides.html"),
        notebook_url: Some("/projects/data-science/salary/salary.ipynb"),
        dataset_url: Some("/projects/data-science/salary/salaries-by-college-major.csv"),
        details_url: None,
    },
    Project {
        id: 2,
        title: "Lego Dataset Analysis",
        description: "Exploration of Lego product categories, pricing trends and popularity patterns using data cleaning, transformation and visualisation techniques.",
        icon: "🧱",
        tags: &["Python", "Jupyter", "Pandas", "Data Visualization"],
        category: ProjectCategory::Python,
        slides_url: Some("/projects/data-science/lego/lego.slides.html"),
        notebook_url: Some("/projects/data-science/lego/lego.ipynb"),
        dataset_url: None,
        details_url: None,
    },
    Project {
        id: 3,
        title: "Programming Languages Study Analysis",
        description: "Comparative study of programming language popularity and usage trends over time, with visualisations and a written report.",
        icon: "💻",
        tags: &["Python", "Jupyter", "Statistics", "Research"],
        category: ProjectCategory::Python,
        slides_url: Some("/projects/data-science/languages/languages.slides.html"),
        notebook_url: Some("/projects/data-science/languages/languages.ipynb"),
        dataset_url: Some("/projects/data-science/languages/query-results.csv"),
        details_url: None,
    },
    Project {
        id: 4,
        title: "Seaborn & Linear Regression Analysis",
        description: "Statistical analysis with Seaborn and linear regression: variable relationships, correlation analysis and a predictive model of film revenue.",
        icon: "📈",
        tags: &["Python", "Seaborn", "Linear Regression", "Machine Learning"],
        category: ProjectCategory::Python,
        slides_url: Some("/projects/data-science/regression/regression.slides.html"),
        notebook_url: Some("/projects/data-science/regression/regression.ipynb"),
        dataset_url: Some("/projects/data-science/regression/cost-revenue.csv"),
        details_url: None,
    },
    Project {
        id: 5,
        title: "Customer Churn Prediction",
        description: "Predicting customer churn from telecommunications data with logistic regression and decision trees, including feature engineering and model evaluation.",
        icon: "🤖",
        tags: &[
            "Machine Learning",
            "Python",
            "Scikit-learn",
            "Predictive Analytics",
            "Classification",
        ],
        category: ProjectCategory::AiMl,
        slides_url: Some("/projects/machine-learning/churn/churn.slides.html"),
        notebook_url: Some("/projects/machine-learning/churn/churn.ipynb"),
        dataset_url: Some("/projects/machine-learning/churn/telco-customer-churn.csv"),
        details_url: None,
    },
    Project {
        id: 6,
        title: "Varsity Volleyball",
        description: "Team captain for two seasons, leading the team to regional championships through strategic planning and mentoring.",
        icon: "🏐",
        tags: &["Team Captain", "Leadership", "Athletics"],
        category: ProjectCategory::Sports,
        slides_url: None,
        notebook_url: None,
        dataset_url: None,
        details_url: None,
    },
    Project {
        id: 7,
        title: "Digital Art Portfolio",
        description: "Design work, landscapes and abstract pieces, featured in a student exhibition.",
        icon: "🎨",
        tags: &["Digital Art", "Illustration"],
        category: ProjectCategory::Art,
        slides_url: None,
        notebook_url: None,
        dataset_url: None,
        details_url: Some("/art"),
    },
];

static ARTWORKS: [Artwork; 6] = [
    Artwork {
        id: 1,
        title: "Garden Dreams",
        description: "Blooming flowers in golden hour light, painted digitally.",
        medium: "Digital Painting",
        year: 2024,
        category: ArtCategory::Digital,
        featured: true,
        likes: 234,
    },
    Artwork {
        id: 2,
        title: "Portrait in Nature",
        description: "Self-portrait series combining photography with digital art.",
        medium: "Mixed Media",
        year: 2024,
        category: ArtCategory::Photography,
        featured: true,
        likes: 189,
    },
    Artwork {
        id: 3,
        title: "Botanical Abstracts",
        description: "Abstract plant forms and natural patterns created through algorithmic design.",
        medium: "Generative Art",
        year: 2023,
        category: ArtCategory::Digital,
        featured: false,
        likes: 156,
    },
    Artwork {
        id: 4,
        title: "Seasonal Moods",
        description: "The emotional character of each season told through colour and form.",
        medium: "Digital Collage",
        year: 2023,
        category: ArtCategory::Digital,
        featured: false,
        likes: 203,
    },
    Artwork {
        id: 5,
        title: "Urban Garden",
        description: "City life set against natural elements in photographic composition.",
        medium: "Photography",
        year: 2024,
        category: ArtCategory::Photography,
        featured: true,
        likes: 178,
    },
    Artwork {
        id: 6,
        title: "Watercolor Memories",
        description: "Traditional watercolour technique carried into the digital realm.",
        medium: "Digital Watercolor",
        year: 2023,
        category: ArtCategory::Traditional,
        featured: false,
        likes: 142,
    },
];

#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[must_use]
pub fn artworks() -> &'static [Artwork] {
    &ARTWORKS
}

/// Projects matching `filter`, in declaration order
#[must_use]
pub fn filter_projects(filter: CategoryFilter<ProjectCategory>) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Artworks matching `filter`, in declaration order
#[must_use]
pub fn filter_artworks(filter: CategoryFilter<ArtCategory>) -> Vec<&'static Artwork> {
    ARTWORKS.iter().filter(|a| filter.matches(a.category)).collect()
}

/// Number of projects per category, for every category including empty ones
#[must_use]
pub fn project_counts() -> Vec<(ProjectCategory, usize)> {
    count_by(ProjectCategory::ALL, PROJECTS.iter().map(|p| p.category))
}

#[must_use]
pub fn artwork_counts() -> Vec<(ArtCategory, usize)> {
    count_by(ArtCategory::ALL, ARTWORKS.iter().map(|a| a.category))
}

fn count_by<C: Category>(all: &[C], tags: impl Iterator<Item = C> + Clone) -> Vec<(C, usize)> {
    all.iter()
        .map(|c| (*c, tags.clone().filter(|t| t == c).count()))
        .collect()
}
