use leptos::prelude::*;

struct SkillGroup {
    category: &'static str,
    items: &'static [&'static str],
}

static SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Data Science",
        items: &["Python", "Pandas", "NumPy", "Jupyter", "Statistics"],
    },
    SkillGroup {
        category: "Machine Learning",
        items: &["Scikit-learn", "Regression", "Classification", "Feature Engineering"],
    },
    SkillGroup {
        category: "Visualisation",
        items: &["Matplotlib", "Seaborn", "Plotly"],
    },
    SkillGroup {
        category: "Creative",
        items: &["Digital Painting", "Photography", "Illustration"],
    },
];

struct Milestone {
    year: u16,
    title: &'static str,
    description: &'static str,
}

static MILESTONES: [Milestone; 3] = [
    Milestone {
        year: 2025,
        title: "Customer Churn Prediction",
        description: "End-to-end classification project on telecom data",
    },
    Milestone {
        year: 2024,
        title: "Student Art Exhibition",
        description: "Digital work featured in the annual showcase",
    },
    Milestone {
        year: 2023,
        title: "Varsity Volleyball Captain",
        description: "Led the team to the regional championships",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-section">
            <h2 class="section-title">"About Me"</h2>
            <p class="section-subtitle">
                "Curious about data, patient with it, and happiest when a model finally explains something real."
            </p>

            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|group| view! {
                        <div class="skill-card">
                            <h3>{group.category}</h3>
                            <ul>
                                {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <h3 class="timeline-title">"Milestones"</h3>
            <ol class="timeline">
                {MILESTONES
                    .iter()
                    .map(|m| view! {
                        <li class="timeline-item">
                            <span class="timeline-year">{m.year}</span>
                            <strong>{m.title}</strong>
                            <p>{m.description}</p>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
