use serde::Deserialize;

use crate::content::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Commercial,
    Residential,
    International,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Residential,
        Category::Commercial,
        Category::International,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Commercial => "Commercial",
            Category::Residential => "Residential",
            Category::International => "International",
        }
    }
}

/// Narrows the portfolio grid. `All` is the initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub hero_image: String,
    pub concept: String,
    pub gallery: Vec<String>,
    pub drawings: Vec<String>,
    pub execution: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub vr_url: Option<String>,
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
}

/// Expertise entry as it appears in the catalog document, icon still unresolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExpertise {
    pub title: String,
    pub description: String,
    pub expanded_description: String,
    pub previews: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expertise {
    pub title: String,
    pub description: String,
    pub expanded_description: String,
    pub previews: Vec<String>,
    pub icon: Icon,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: Category) -> Project {
        Project {
            id: "p".into(),
            title: "P".into(),
            category,
            description: String::new(),
            hero_image: String::new(),
            concept: String::new(),
            gallery: vec![],
            drawings: vec![],
            execution: vec![],
            video_url: None,
            vr_url: None,
            testimonial: None,
        }
    }

    #[test]
    fn filter_options_start_with_all() {
        let labels: Vec<_> = CategoryFilter::options().map(CategoryFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All Projects", "Residential", "Commercial", "International"]
        );
    }

    #[test]
    fn only_filter_matches_its_category() {
        let villa = project(Category::Residential);
        assert!(CategoryFilter::All.matches(&villa));
        assert!(CategoryFilter::Only(Category::Residential).matches(&villa));
        assert!(!CategoryFilter::Only(Category::Commercial).matches(&villa));
    }

    #[test]
    fn category_deserializes_from_exact_name() {
        let category: Category = serde_json::from_str("\"International\"").unwrap();
        assert_eq!(category, Category::International);
        assert!(serde_json::from_str::<Category>("\"international\"").is_err());
    }

    #[test]
    fn project_reads_camel_case_record_without_optional_media() {
        let record = r#"{
            "id": "loft",
            "title": "Loft",
            "category": "Residential",
            "description": "d",
            "heroImage": "hero.jpg",
            "concept": "c",
            "gallery": [],
            "drawings": ["plan.jpg"],
            "execution": ["site.jpg"]
        }"#;
        let project: Project = serde_json::from_str(record).unwrap();
        assert_eq!(project.hero_image, "hero.jpg");
        assert_eq!(project.video_url, None);
        assert_eq!(project.vr_url, None);
        assert_eq!(project.testimonial, None);
    }
}
