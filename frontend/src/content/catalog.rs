use std::collections::HashSet;

use log::debug;
use serde::Deserialize;

use crate::content::error::CatalogError;
use crate::content::icons::Icon;
use crate::content::model::{CategoryFilter, Expertise, Project, RawExpertise};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

#[derive(Deserialize)]
struct CatalogDocument {
    projects: Vec<Project>,
    expertise: Vec<RawExpertise>,
}

/// The immutable set of projects and expertise entries the site renders.
///
/// A `Catalog` only exists once every record has passed validation, so the
/// view layer never has to handle a missing icon or an ambiguous project id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    expertise: Vec<Expertise>,
}

impl Catalog {
    pub fn builtin() -> Result<Catalog, CatalogError> {
        Catalog::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Catalog, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(source)?;
        let catalog = Catalog::validate(document)?;
        debug!(
            "Loaded catalog with {} projects and {} expertise entries",
            catalog.projects.len(),
            catalog.expertise.len()
        );
        Ok(catalog)
    }

    fn validate(document: CatalogDocument) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for (index, project) in document.projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyProjectId { index });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProjectId(project.id.clone()));
            }
            if let Some(testimonial) = &project.testimonial {
                let field = if testimonial.text.trim().is_empty() {
                    Some("text")
                } else if testimonial.author.trim().is_empty() {
                    Some("author")
                } else {
                    None
                };
                if let Some(field) = field {
                    return Err(CatalogError::IncompleteTestimonial {
                        project: project.id.clone(),
                        field,
                    });
                }
            }
            for (kind, images) in [("drawing", &project.drawings), ("execution", &project.execution)] {
                if images.is_empty() {
                    return Err(CatalogError::MissingImage {
                        project: project.id.clone(),
                        kind,
                    });
                }
            }
        }

        let expertise = document
            .expertise
            .into_iter()
            .map(|raw| {
                let icon = Icon::from_key(&raw.icon).ok_or_else(|| CatalogError::UnknownIcon {
                    title: raw.title.clone(),
                    key: raw.icon.clone(),
                })?;
                Ok(Expertise {
                    title: raw.title,
                    description: raw.description,
                    expanded_description: raw.expanded_description,
                    previews: raw.previews,
                    icon,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Catalog {
            projects: document.projects,
            expertise,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn expertise(&self) -> &[Expertise] {
        &self.expertise
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn expertise_at(&self, index: usize) -> Option<&Expertise> {
        self.expertise.get(index)
    }

    pub fn projects_in(&self, filter: CategoryFilter) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::Category;
    use serde_json::{json, Value};

    fn project_json(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Courtyard House",
            "category": "Residential",
            "description": "d",
            "heroImage": "hero.jpg",
            "concept": "c",
            "gallery": ["g1.jpg", "g2.jpg"],
            "drawings": ["d1.jpg"],
            "execution": ["e1.jpg"]
        })
    }

    fn expertise_json(icon: &str) -> Value {
        json!({
            "title": "Lighting Design",
            "description": "d",
            "expandedDescription": "e",
            "previews": ["p1.jpg"],
            "icon": icon
        })
    }

    fn load(projects: Vec<Value>, expertise: Vec<Value>) -> Result<Catalog, CatalogError> {
        Catalog::from_json(&json!({ "projects": projects, "expertise": expertise }).to_string())
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("embedded catalog must load");
        assert_eq!(catalog.projects().len(), 3);
        assert_eq!(catalog.expertise().len(), 5);
        assert_eq!(catalog.expertise()[4].icon, Icon::Camera);
    }

    #[test]
    fn builtin_catalog_carries_optional_media() {
        let catalog = Catalog::builtin().unwrap();
        let kuwait = catalog.project("luxe-residence-kuwait").unwrap();
        assert!(kuwait.video_url.is_some());
        assert_eq!(
            kuwait.testimonial.as_ref().map(|t| t.author.as_str()),
            Some("Ahmed Al-Sayed, Client")
        );
        let mumbai = catalog.project("minimalist-villa-mumbai").unwrap();
        assert!(mumbai.video_url.is_none());
        assert!(mumbai.testimonial.is_none());
    }

    #[test]
    fn duplicate_project_id_is_rejected() {
        let result = load(
            vec![project_json("villa"), project_json("loft"), project_json("villa")],
            vec![],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateProjectId(id)) if id == "villa"));
    }

    #[test]
    fn blank_project_id_is_rejected() {
        let result = load(vec![project_json("villa"), project_json("  ")], vec![]);
        assert!(matches!(result, Err(CatalogError::EmptyProjectId { index: 1 })));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result = load(
            vec![project_json("villa")],
            vec![expertise_json("Layout"), expertise_json("Sofa")],
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnknownIcon { key, .. }) if key == "Sofa"
        ));
    }

    #[test]
    fn testimonial_without_author_is_rejected() {
        let mut project = project_json("villa");
        project["testimonial"] = json!({ "text": "Wonderful.", "author": "" });
        let result = load(vec![project], vec![]);
        assert!(matches!(
            result,
            Err(CatalogError::IncompleteTestimonial { field: "author", .. })
        ));
    }

    #[test]
    fn testimonial_without_text_is_rejected() {
        let mut project = project_json("villa");
        project["testimonial"] = json!({ "text": " ", "author": "A. Client" });
        let result = load(vec![project], vec![]);
        assert!(matches!(
            result,
            Err(CatalogError::IncompleteTestimonial { field: "text", .. })
        ));
    }

    #[test]
    fn project_without_drawings_is_rejected() {
        let mut project = project_json("villa");
        project["drawings"] = json!([]);
        let result = load(vec![project], vec![]);
        assert!(matches!(
            result,
            Err(CatalogError::MissingImage { kind: "drawing", .. })
        ));
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let mut project = project_json("villa");
        project["category"] = json!("Hospitality");
        assert!(matches!(load(vec![project], vec![]), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn lookups_by_id_index_and_category() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.project("skyline-office-singapore").map(|p| p.category),
            Some(Category::Commercial)
        );
        assert!(catalog.project("missing").is_none());
        assert_eq!(
            catalog.expertise_at(1).map(|e| e.title.as_str()),
            Some("Concept Development")
        );
        assert!(catalog.expertise_at(5).is_none());

        let residential: Vec<_> = catalog
            .projects_in(CategoryFilter::Only(Category::Residential))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(residential, vec!["minimalist-villa-mumbai"]);
        assert_eq!(catalog.projects_in(CategoryFilter::All).count(), 3);
    }
}
