//! Page controls of a list and their markup.

use serde::Serialize;
use tera::Context;

use crate::domain::list::PaginationInfo;
use crate::render::{RenderError, Templates};
use crate::surface::{Display, Surface};

const PREVIOUS_LABEL: &str = "Назад";
const NEXT_LABEL: &str = "Вперёд";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

/// One link of the pagination bar.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    /// Page requested when the control is activated.
    pub target: usize,
    pub disabled: bool,
    pub active: bool,
}

/// Result of activating a pagination link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    /// Links are inert, so the default navigation is always suppressed.
    pub default_prevented: bool,
    /// Page passed to the page-change callback, if it was called.
    pub dispatched: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationView {
    controls: Vec<PageControl>,
}

impl PaginationView {
    /// Builds the controls; a single page (or none) produces no controls.
    pub fn new(info: &PaginationInfo) -> Self {
        let total_pages = info.total_pages;
        if total_pages <= 1 {
            return Self::default();
        }

        let current = info.normalized().current_page;
        let mut controls = Vec::with_capacity(total_pages.saturating_add(2));

        controls.push(PageControl {
            kind: ControlKind::Previous,
            label: PREVIOUS_LABEL.to_string(),
            target: current.saturating_sub(1).max(1),
            disabled: current == 1,
            active: false,
        });

        controls.extend((1..=total_pages).map(|page| PageControl {
            kind: ControlKind::Page,
            label: page.to_string(),
            target: page,
            disabled: false,
            active: page == current,
        }));

        controls.push(PageControl {
            kind: ControlKind::Next,
            label: NEXT_LABEL.to_string(),
            target: current.saturating_add(1).min(total_pages),
            disabled: current == total_pages,
            active: false,
        });

        Self { controls }
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn controls(&self) -> &[PageControl] {
        &self.controls
    }

    /// Numbered page controls, without previous/next.
    pub fn pages(&self) -> impl Iterator<Item = &PageControl> {
        self.controls
            .iter()
            .filter(|control| control.kind == ControlKind::Page)
    }

    /// Handles a click on the control at `index`.
    ///
    /// `on_page_change` runs at most once, and never for disabled controls or
    /// unknown indices.
    pub fn activate<F>(&self, index: usize, on_page_change: F) -> Activation
    where
        F: FnOnce(usize),
    {
        let dispatched = self
            .controls
            .get(index)
            .filter(|control| !control.disabled)
            .map(|control| control.target);

        if let Some(page) = dispatched {
            on_page_change(page);
        }

        Activation {
            default_prevented: true,
            dispatched,
        }
    }
}

/// Element ids of the pagination surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationIds {
    pub nav: String,
    pub list: String,
}

impl Default for PaginationIds {
    fn default() -> Self {
        Self {
            nav: "paginationNav".to_string(),
            list: "pagination".to_string(),
        }
    }
}

/// Pagination markup rendered but not yet written to a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPagination {
    view: PaginationView,
    html: String,
}

impl RenderedPagination {
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Writes the bar into the surface, hiding the nav when there is nothing to show.
    pub fn apply<S>(self, surface: &S, ids: &PaginationIds) -> PaginationView
    where
        S: Surface + ?Sized,
    {
        surface.set_inner_html(&ids.list, &self.html);
        if self.view.is_empty() {
            surface.hide(&ids.nav);
        } else {
            surface.set_display(&ids.nav, Display::Block);
        }
        self.view
    }
}

/// Builds the controls for `info` and renders their markup.
pub fn build_pagination(
    info: &PaginationInfo,
    templates: &Templates,
) -> Result<RenderedPagination, RenderError> {
    let view = PaginationView::new(info);
    if view.is_empty() {
        return Ok(RenderedPagination {
            view,
            html: String::new(),
        });
    }

    let mut context = Context::new();
    context.insert("controls", view.controls());
    let html = templates.render("pagination.html", &context)?;

    Ok(RenderedPagination { view, html })
}

/// Renders the pagination bar for `info` into the surface.
///
/// The returned view maps `data-index` attributes of the rendered links back
/// to their controls. Nothing is written when rendering fails.
pub fn render_pagination<S>(
    info: &PaginationInfo,
    surface: &S,
    ids: &PaginationIds,
    templates: &Templates,
) -> Result<PaginationView, RenderError>
where
    S: Surface + ?Sized,
{
    Ok(build_pagination(info, templates)?.apply(surface, ids))
}
