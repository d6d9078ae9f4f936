use serde::{Deserialize, Serialize};

/// A portfolio project or achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub slides_url: Option<&'static str>,
    pub notebook_url: Option<&'static str>,
    pub dataset_url: Option<&'static str>,
    pub details_url: Option<&'static str>,
}

impl Project {
    /// Labelled outbound links, in display order
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("📊 View Slides", self.slides_url),
            ("📓 Jupyter Notebook", self.notebook_url),
            ("📋 Dataset (CSV)", self.dataset_url),
            ("View Details →", self.details_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

/// A piece in the art gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub medium: &'static str,
    pub year: u16,
    pub category: ArtCategory,
    pub featured: bool,
    pub likes: u32,
}

/// A closed set of tags a record can be filed under
pub trait Category: 'static + Copy + Eq + std::fmt::Display + std::str::FromStr<Err = String> {
    const ALL: &'static [Self];

    /// Human readable label for filter buttons
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Python,
    #[serde(rename = "webdev")]
    WebDev,
    AiMl,
    Sports,
    Art,
}

impl ProjectCategory {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ProjectCategory::Python => "🐍",
            ProjectCategory::WebDev => "💻",
            ProjectCategory::AiMl => "🤖",
            ProjectCategory::Sports => "🏐",
            ProjectCategory::Art => "🎨",
        }
    }
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::Python,
        ProjectCategory::WebDev,
        ProjectCategory::AiMl,
        ProjectCategory::Sports,
        ProjectCategory::Art,
    ];

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::Python => "Python",
            ProjectCategory::WebDev => "Web Dev",
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::Sports => "Sports",
            ProjectCategory::Art => "Art",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::Python => write!(f, "python"),
            ProjectCategory::WebDev => write!(f, "webdev"),
            ProjectCategory::AiMl => write!(f, "ai-ml"),
            ProjectCategory::Sports => write!(f, "sports"),
            ProjectCategory::Art => write!(f, "art"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(ProjectCategory::Python),
            "webdev" => Ok(ProjectCategory::WebDev),
            "ai-ml" => Ok(ProjectCategory::AiMl),
            "sports" => Ok(ProjectCategory::Sports),
            "art" => Ok(ProjectCategory::Art),
            _ => Err(format!("unknown project category: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtCategory {
    Digital,
    Photography,
    Traditional,
}

impl Category for ArtCategory {
    const ALL: &'static [Self] = &[
        ArtCategory::Digital,
        ArtCategory::Photography,
        ArtCategory::Traditional,
    ];

    fn label(self) -> &'static str {
        match self {
            ArtCategory::Digital => "Digital Art",
            ArtCategory::Photography => "Photography",
            ArtCategory::Traditional => "Traditional",
        }
    }
}

impl std::fmt::Display for ArtCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtCategory::Digital => write!(f, "digital"),
            ArtCategory::Photography => write!(f, "photography"),
            ArtCategory::Traditional => write!(f, "traditional"),
        }
    }
}

impl std::str::FromStr for ArtCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "digital" => Ok(ArtCategory::Digital),
            "photography" => Ok(ArtCategory::Photography),
            "traditional" => Ok(ArtCategory::Traditional),
            _ => Err(format!("unknown art category: {s}")),
        }
    }
}

/// Which records a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    #[must_use]
    pub fn matches(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl<C: Category> std::fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl<C: Category> std::str::FromStr for CategoryFilter<C> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_category_from_str_valid() {
        assert_eq!(
            "python".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::Python
        );
        assert_eq!(
            "webdev".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::WebDev
        );
        assert_eq!(
            "ai-ml".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::AiMl
        );
        assert_eq!(
            "sports".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::Sports
        );
        assert_eq!("art".parse::<ProjectCategory>().unwrap(), ProjectCategory::Art);
    }

    #[test]
    fn project_category_from_str_case_insensitive() {
        assert_eq!(
            "PYTHON".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::Python
        );
        assert_eq!(
            "AI-ML".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::AiMl
        );
    }

    #[test]
    fn project_category_from_str_invalid() {
        assert!("rust".parse::<ProjectCategory>().is_err());
        assert!("".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for category in ProjectCategory::ALL {
            assert_eq!(
                category.to_string().parse::<ProjectCategory>().unwrap(),
                *category
            );
        }
        for category in ArtCategory::ALL {
            assert_eq!(
                category.to_string().parse::<ArtCategory>().unwrap(),
                *category
            );
        }
    }

    #[test]
    fn serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&ProjectCategory::AiMl).unwrap(),
            "\"ai-ml\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectCategory::WebDev).unwrap(),
            "\"webdev\""
        );
        assert_eq!(
            serde_json::to_string(&ArtCategory::Photography).unwrap(),
            "\"photography\""
        );
    }

    #[test]
    fn category_filter_from_str() {
        assert_eq!(
            "all".parse::<CategoryFilter<ArtCategory>>().unwrap(),
            CategoryFilter::All
        );
        assert_eq!(
            "".parse::<CategoryFilter<ArtCategory>>().unwrap(),
            CategoryFilter::All
        );
        assert_eq!(
            "digital".parse::<CategoryFilter<ArtCategory>>().unwrap(),
            CategoryFilter::Only(ArtCategory::Digital)
        );
        assert!("sculpture".parse::<CategoryFilter<ArtCategory>>().is_err());
    }

    #[test]
    fn category_filter_matches() {
        let filter = CategoryFilter::Only(ProjectCategory::Art);
        assert!(filter.matches(ProjectCategory::Art));
        assert!(!filter.matches(ProjectCategory::Python));
        assert!(CategoryFilter::<ProjectCategory>::All.matches(ProjectCategory::Sports));
    }

    fn labels<C: Category>() -> Vec<&'static str> {
        C::ALL.iter().map(|c| c.label()).collect()
    }

    #[test]
    fn every_category_has_a_label() {
        assert_eq!(
            labels::<ProjectCategory>(),
            vec!["Python", "Web Dev", "AI/ML", "Sports", "Art"]
        );
        assert_eq!(
            labels::<ArtCategory>(),
            vec!["Digital Art", "Photography", "Traditional"]
        );
    }

    #[test]
    fn category_filter_default() {
        assert_eq!(
            CategoryFilter::<ProjectCategory>::default(),
            CategoryFilter::All
        );
    }
}
