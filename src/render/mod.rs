//! Markup rendering for list rows, pagination and page shells.

use serde::de::DeserializeOwned;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::list::Identified;

pub mod games;
pub mod page;
pub mod users;

#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] tera::Error);

const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("pagination.html", include_str!("../../templates/pagination.html")),
    ("list/page.html", include_str!("../../templates/list/page.html")),
    ("games/rows.html", include_str!("../../templates/games/rows.html")),
    ("games/snapshots.html", include_str!("../../templates/games/snapshots.html")),
    ("games/show.html", include_str!("../../templates/games/show.html")),
    ("users/rows.html", include_str!("../../templates/users/rows.html")),
];

/// Tera instance holding every template the front end renders.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Loads templates matching `glob`; built-ins fill in whatever is missing.
    pub fn from_glob(glob: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::new(glob)?;
        let missing: Vec<(&str, &str)> = BUILTIN_TEMPLATES
            .into_iter()
            .filter(|(name, _)| !tera.get_template_names().any(|loaded| loaded == *name))
            .collect();
        tera.add_raw_templates(missing)?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, RenderError> {
        Ok(self.tera.render(name, context)?)
    }
}

/// Maps a page of items to the markup of the list body.
///
/// Implementations are pure: the same items always give the same markup, and
/// the caller replaces the whole list body with it.
pub trait RowRenderer {
    type Item: DeserializeOwned + Identified + Clone;

    fn render(&self, items: &[Self::Item]) -> Result<String, RenderError>;
}
