//! Fetches list pages and drives the list surface through its states.
//!
//! A load moves the surface through `loading` into exactly one of: rendered
//! rows with pagination, the empty state, or an error alert. Responses that
//! arrive after a newer load has started are dropped untouched.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::{ApiClient, ClientError, ClientResult, Transport};
use crate::domain::list::{
    Identified, ListFilter, ListQuery, MAX_TOTAL_PAGES, Page, PaginationInfo,
};
use crate::list::state::{ListState, RequestTicket};
use crate::list::{ListConfig, request_path};
use crate::pagination::{Activation, PaginationView, build_pagination};
use crate::render::{RenderError, RowRenderer, Templates};
use crate::surface::{Display, Surface};

/// How a single load ended.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<T> {
    Rendered {
        items: Vec<T>,
        pagination: PaginationInfo,
    },
    Empty,
    /// The alert has been shown; the table stays hidden.
    Failed,
    /// The client already navigated to the login page.
    Unauthorized,
    /// A newer load started before this one finished.
    Superseded,
}

impl<T> LoadOutcome<T> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, LoadOutcome::Rendered { .. })
    }
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(flatten)]
    data: serde_json::Map<String, serde_json::Value>,
    pagination: PaginationInfo,
}

/// Reads `{ <data_key>: [...], pagination: {...} }`.
pub fn parse_page<T: DeserializeOwned>(body: &str, data_key: &str) -> ClientResult<Page<T>> {
    let mut raw: RawPage = serde_json::from_str(body)?;
    let items = match raw.data.remove(data_key) {
        Some(value) => serde_json::from_value(value)?,
        None => {
            return Err(ClientError::Decode(serde::de::Error::missing_field(
                "list items",
            )));
        }
    };
    if !raw.pagination.is_within_bounds() {
        return Err(ClientError::Decode(serde::de::Error::custom(format!(
            "totalPages {} exceeds {MAX_TOTAL_PAGES}",
            raw.pagination.total_pages
        ))));
    }
    Ok(Page {
        items,
        pagination: raw.pagination,
    })
}

pub struct ListController<T, S, R>
where
    R: RowRenderer,
{
    client: Rc<ApiClient<T>>,
    surface: Rc<S>,
    rows: R,
    templates: Rc<Templates>,
    config: ListConfig,
    state: RefCell<ListState>,
    pagination: RefCell<PaginationView>,
    items: RefCell<Vec<R::Item>>,
}

impl<T, S, R> ListController<T, S, R>
where
    T: Transport,
    S: Surface,
    R: RowRenderer,
{
    pub fn new(
        client: Rc<ApiClient<T>>,
        surface: Rc<S>,
        rows: R,
        templates: Rc<Templates>,
        config: ListConfig,
    ) -> Self {
        Self {
            client,
            surface,
            rows,
            templates,
            config,
            state: RefCell::new(ListState::default()),
            pagination: RefCell::new(PaginationView::default()),
            items: RefCell::new(Vec::new()),
        }
    }

    /// Starts from `query` instead of the first unfiltered page.
    pub fn with_query(self, query: ListQuery) -> Self {
        self.state.replace(ListState::new(query));
        self
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn query(&self) -> ListQuery {
        self.state.borrow().query().clone()
    }

    /// Item of the last rendered page with the given id.
    pub fn find_item(&self, id: i32) -> Option<R::Item> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Controls of the last rendered pagination bar.
    pub fn pagination(&self) -> PaginationView {
        self.pagination.borrow().clone()
    }

    pub async fn set_filter(&self, value: &str) -> LoadOutcome<R::Item> {
        self.state.borrow_mut().set_filter(ListFilter::parse(value));
        self.load().await
    }

    /// Moves to `page`; `None` when the page is below 1 and nothing happened.
    pub async fn set_page(&self, page: usize) -> Option<LoadOutcome<R::Item>> {
        self.state.borrow_mut().set_page(page)?;
        self.surface.scroll_to_top();
        Some(self.load().await)
    }

    /// Goes back to the first page under the current filter.
    pub async fn load_first_page(&self) -> LoadOutcome<R::Item> {
        self.state.borrow_mut().set_page(1);
        self.load().await
    }

    /// Routes a click on the pagination control at `index` into [`Self::set_page`].
    pub async fn activate_page_control(
        &self,
        index: usize,
    ) -> (Activation, Option<LoadOutcome<R::Item>>) {
        let activation = self.pagination.borrow().activate(index, |page| {
            debug!("pagination control {index} requests page {page}");
        });
        let outcome = match activation.dispatched {
            Some(page) => self.set_page(page).await,
            None => None,
        };
        (activation, outcome)
    }

    /// Fetches the current query and renders the result.
    pub async fn load(&self) -> LoadOutcome<R::Item> {
        let (ticket, query) = {
            let mut state = self.state.borrow_mut();
            (state.begin_request(), state.query().clone())
        };
        self.show_loading();

        let result = self.fetch(&query).await;

        if matches!(result, Err(LoadError::Client(ClientError::Unauthorized))) {
            return LoadOutcome::Unauthorized;
        }
        if !self.state.borrow().is_current(ticket) {
            debug!(
                "dropping stale response #{} for {}",
                ticket.sequence(),
                self.config.endpoint
            );
            return LoadOutcome::Superseded;
        }

        match result.and_then(|page| self.apply(ticket, page)) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("loading {} failed: {err}", self.config.endpoint);
                self.surface.hide(self.config.ids.loading);
                self.surface.show_error(self.config.error_message);
                LoadOutcome::Failed
            }
        }
    }

    async fn fetch(&self, query: &ListQuery) -> Result<Page<R::Item>, LoadError> {
        let path = request_path(&self.config, query)?;
        let response = self.client.get(path).await?.error_for_status()?;
        Ok(parse_page(&response.body, self.config.data_key)?)
    }

    fn show_loading(&self) {
        let ids = &self.config.ids;
        self.surface.set_display(ids.loading, Display::Block);
        self.surface.hide(ids.table);
        self.surface.hide(ids.empty_state);
        self.surface.hide(ids.pagination_nav);
    }

    fn apply(
        &self,
        ticket: RequestTicket,
        page: Page<R::Item>,
    ) -> Result<LoadOutcome<R::Item>, LoadError> {
        let ids = &self.config.ids;
        let pagination = page.pagination.normalized();

        if page.is_empty() {
            self.confirm(ticket, &pagination);
            info!("{} page {} is empty", self.config.endpoint, pagination.current_page);
            self.items.borrow_mut().clear();
            self.pagination.replace(PaginationView::default());
            self.surface.set_inner_html(ids.pagination, "");
            self.surface.set_display(ids.empty_state, Display::Block);
            return Ok(LoadOutcome::Empty);
        }

        // Nothing is written until both renders succeed.
        let html = self.rows.render(&page.items)?;
        let bar = build_pagination(&pagination, &self.templates)?;

        self.confirm(ticket, &pagination);
        self.surface.set_inner_html(ids.list, &html);
        self.pagination
            .replace(bar.apply(self.surface.as_ref(), &ids.pagination_ids()));
        self.items.replace(page.items.clone());

        self.surface.set_display(ids.table, Display::Table);

        Ok(LoadOutcome::Rendered {
            items: page.items,
            pagination,
        })
    }

    fn confirm(&self, ticket: RequestTicket, pagination: &PaginationInfo) {
        self.surface.hide(self.config.ids.loading);
        self.state
            .borrow_mut()
            .confirm_page(ticket, pagination.current_page);
    }
}
