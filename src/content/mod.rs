//! Static site content
//!
//! The school's facts, informational pages and catalog pages are read once
//! at startup, either from the TOML document compiled into the binary or
//! from an override file, and are immutable afterwards. Every catalog is
//! validated into a `Taxonomy` here, so a broken content file stops the
//! program before anything renders.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogItem, Category, Taxonomy, TaxonomySelector};

/// Content shipped with the binary
const EMBEDDED_CONTENT: &str = include_str!("../../content/school.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog '{catalog}': {source}")]
    Catalog {
        catalog: String,
        #[source]
        source: CatalogError,
    },

    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: &'static str, id: String },
}

/// Contact details shown in the header and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hours: String,
}

/// A plain text page (about, admissions, legal, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoPage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Labelled fact shown in an entry's detail view ("Grades: K-12")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// One listed thing: a subject, an accreditation, a value, a project...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl CatalogItem for Entry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A catalog page with its validated taxonomy
#[derive(Debug, Clone)]
pub struct Catalog {
    pub id: String,
    pub title: String,
    pub section: String,
    pub intro: String,
    default_category: Option<String>,
    taxonomy: Arc<Taxonomy<Entry>>,
}

impl Catalog {
    /// Fresh selector positioned on this catalog's default category
    pub fn selector(&self) -> TaxonomySelector<Entry> {
        self.default_category
            .as_deref()
            .and_then(|id| TaxonomySelector::with_default(self.taxonomy.clone(), id).ok())
            .unwrap_or_else(|| TaxonomySelector::new(self.taxonomy.clone()))
    }

    pub fn taxonomy(&self) -> &Arc<Taxonomy<Entry>> {
        &self.taxonomy
    }
}

/// Catalog page as written in the content document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    id: String,
    title: String,
    #[serde(default)]
    section: String,
    #[serde(default)]
    intro: String,
    default_category: Option<String>,
    #[serde(default)]
    categories: Vec<Category<Entry>>,
}

/// Whole content document
#[derive(Debug, Deserialize)]
struct ContentFile {
    school: SchoolInfo,
    #[serde(default)]
    pages: Vec<InfoPage>,
    #[serde(default)]
    catalogs: Vec<CatalogFile>,
}

/// Everything the front ends render
#[derive(Debug, Clone)]
pub struct SchoolContent {
    pub school: SchoolInfo,
    pub pages: Vec<InfoPage>,
    pub catalogs: Vec<Catalog>,
}

impl SchoolContent {
    /// Load from `path` if given, otherwise the embedded document
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            catalogs = content.catalogs.len(),
            pages = content.pages.len(),
            "Loaded content override"
        );
        Ok(content)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let file: ContentFile = toml::from_str(text)?;

        let mut page_ids = HashSet::new();
        for page in &file.pages {
            if !page_ids.insert(page.id.as_str()) {
                return Err(ContentError::Duplicate {
                    kind: "page",
                    id: page.id.clone(),
                });
            }
        }

        let mut catalog_ids = HashSet::new();
        let mut catalogs = Vec::with_capacity(file.catalogs.len());
        for catalog in file.catalogs {
            if !catalog_ids.insert(catalog.id.clone()) {
                return Err(ContentError::Duplicate {
                    kind: "catalog",
                    id: catalog.id,
                });
            }
            catalogs.push(Self::build_catalog(catalog)?);
        }

        Ok(Self {
            school: file.school,
            pages: file.pages,
            catalogs,
        })
    }

    fn build_catalog(file: CatalogFile) -> Result<Catalog, ContentError> {
        let wrap = |source| ContentError::Catalog {
            catalog: file.id.clone(),
            source,
        };

        let taxonomy = Arc::new(Taxonomy::new(file.categories).map_err(wrap)?);

        // Check the default now so selector() never has to fall back silently
        if let Some(default) = &file.default_category {
            if taxonomy.position(default).is_none() {
                return Err(wrap(CatalogError::UnknownDefault(default.clone())));
            }
        }

        Ok(Catalog {
            id: file.id,
            title: file.title,
            section: file.section,
            intro: file.intro,
            default_category: file.default_category,
            taxonomy,
        })
    }

    pub fn catalog(&self, id: &str) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.id == id)
    }

    pub fn page(&self, id: &str) -> Option<&InfoPage> {
        self.pages.iter().find(|p| p.id == id)
    }
}
