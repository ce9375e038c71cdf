// Portfolio document model and loader
//
// The portfolio is a static JSON document read once at startup. Every
// section is optional in the file and defaults to empty.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Image shown for skills without a logo
pub const PLACEHOLDER_IMAGE: &str = "img/placeholder.png";

/// Message shown in place of the sections when loading fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load portfolio data. Please try again later.";

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("cannot read portfolio data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    /// Owner's name, shown in the header
    pub name: String,
    /// One-line headline under the name
    pub tagline: String,
    pub about: String,
    pub education: Vec<Education>,
    pub journey: Vec<JourneyItem>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub date: String,
    pub description: String,
}

/// One stop on the career timeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JourneyItem {
    pub title: String,
    pub date: String,
    pub company: Option<String>,
    pub description: String,
}

impl JourneyItem {
    /// Company name, empty when unknown
    pub fn company_or_empty(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }
}

/// A project; accepts both the card shape (title/tags/details/link) and the
/// tabbed shape (name/images/tech/role/year)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(alias = "title")]
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub details: Vec<String>,
    pub link: Option<String>,
    pub images: Vec<String>,
    pub tech: Vec<String>,
    pub role: Option<String>,
    #[serde(deserialize_with = "de_year")]
    pub year: Option<String>,
}

/// Accept the year as either a string or a number
fn de_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Year>::deserialize(deserializer)?.map(|y| match y {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub img: Option<String>,
}

impl Skill {
    /// Logo path, falling back to the placeholder image
    pub fn image(&self) -> &str {
        match self.img.as_deref() {
            Some(img) if !img.is_empty() => img,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub image: String,
}

impl Portfolio {
    /// Read and parse the portfolio document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PortfolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| PortfolioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a portfolio document from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Display name for the header
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Portfolio"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Ada Example",
        "about": "Systems engineer.",
        "education": [
            {"degree": "BSc CS", "institution": "Uni", "date": "2015-2019", "description": "Graphics"}
        ],
        "journey": [
            {"title": "Engineer", "date": "2019", "company": "Acme", "description": "Built things"},
            {"title": "Freelance", "date": "2021", "description": "Consulting"}
        ],
        "projects": [
            {"title": "Tracer", "tags": ["rust"], "details": ["fast"], "link": "https://example.com"},
            {"name": "Atlas", "description": "Maps", "images": ["a.png", "b.png"],
             "tech": ["wgpu"], "role": "Lead", "year": 2023}
        ],
        "skills": [
            {"title": "Languages", "items": [{"name": "Rust", "img": "img/rust.png"}, {"name": "C"}]}
        ],
        "certifications": [
            {"name": "Cloud Cert", "issuer": "Vendor", "date": "2022", "image": "img/cert.png"}
        ]
    }"#;

    #[test]
    fn test_parse_full_document() {
        let p = Portfolio::from_json(SAMPLE).unwrap();
        assert_eq!(p.display_name(), "Ada Example");
        assert_eq!(p.about, "Systems engineer.");
        assert_eq!(p.education.len(), 1);
        assert_eq!(p.journey.len(), 2);
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.skills[0].items.len(), 2);
        assert_eq!(p.certifications[0].issuer, "Vendor");
    }

    #[test]
    fn test_both_project_shapes() {
        let p = Portfolio::from_json(SAMPLE).unwrap();
        let card = &p.projects[0];
        assert_eq!(card.name, "Tracer");
        assert_eq!(card.tags, vec!["rust"]);
        assert_eq!(card.link.as_deref(), Some("https://example.com"));
        assert!(card.images.is_empty());

        let tabbed = &p.projects[1];
        assert_eq!(tabbed.name, "Atlas");
        assert_eq!(tabbed.images.len(), 2);
        assert_eq!(tabbed.year.as_deref(), Some("2023"));
        assert_eq!(tabbed.role.as_deref(), Some("Lead"));
    }

    #[test]
    fn test_missing_company_and_image() {
        let p = Portfolio::from_json(SAMPLE).unwrap();
        assert_eq!(p.journey[0].company_or_empty(), "Acme");
        assert_eq!(p.journey[1].company_or_empty(), "");
        assert_eq!(p.skills[0].items[0].image(), "img/rust.png");
        assert_eq!(p.skills[0].items[1].image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_empty_document_defaults() {
        let p = Portfolio::from_json("{}").unwrap();
        assert_eq!(p, Portfolio::default());
        assert_eq!(p.display_name(), "Portfolio");
    }

    #[test]
    fn test_year_as_string() {
        let p = Portfolio::from_json(r#"{"projects": [{"name": "X", "year": "2020"}]}"#).unwrap();
        assert_eq!(p.projects[0].year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = Portfolio::load("/definitely/not/here/data.json").unwrap_err();
        assert!(matches!(err, PortfolioError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here/data.json"));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let path = std::env::temp_dir().join(format!("netfolio-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = Portfolio::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, PortfolioError::Parse { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join(format!("netfolio-ok-{}.json", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();
        let p = Portfolio::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(p.projects.len(), 2);
    }
}
