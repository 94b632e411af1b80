//! Paginated, filterable lists shared by the games and users pages.

use crate::client::ClientResult;
use crate::domain::list::ListQuery;
use crate::pagination::PaginationIds;

pub mod loader;
pub mod state;

pub use loader::{ListController, LoadOutcome};
pub use state::{ListState, RequestTicket};

/// Element ids a list page is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceIds {
    pub loading: &'static str,
    pub table: &'static str,
    pub list: &'static str,
    pub empty_state: &'static str,
    pub pagination_nav: &'static str,
    pub pagination: &'static str,
}

impl SurfaceIds {
    pub fn pagination_ids(&self) -> PaginationIds {
        PaginationIds {
            nav: self.pagination_nav.to_string(),
            list: self.pagination.to_string(),
        }
    }
}

/// Everything that differs between two paginated collections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub endpoint: &'static str,
    /// Query parameter carrying the filter value.
    pub filter_param: &'static str,
    /// Response key holding the item array.
    pub data_key: &'static str,
    pub ids: SurfaceIds,
    /// Alert shown when a page fails to load.
    pub error_message: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub empty_message: &'static str,
}

impl ListConfig {
    pub fn games() -> Self {
        Self {
            endpoint: "/api/games",
            filter_param: "status",
            data_key: "games",
            ids: SurfaceIds {
                loading: "loading",
                table: "gamesTable",
                list: "gamesList",
                empty_state: "emptyState",
                pagination_nav: "paginationNav",
                pagination: "pagination",
            },
            error_message: "Не удалось загрузить партии.",
            title: "Партии",
            columns: &["Название", "Игрок 1", "Игрок 2", "Снепшоты", "Статус", "Создана"],
            empty_message: "Партий пока нет",
        }
    }

    pub fn users() -> Self {
        Self {
            endpoint: "/api/users",
            filter_param: "role",
            data_key: "users",
            ids: SurfaceIds {
                loading: "loading",
                table: "usersTable",
                list: "usersList",
                empty_state: "emptyState",
                pagination_nav: "paginationNav",
                pagination: "pagination",
            },
            error_message: "Не удалось загрузить пользователей.",
            title: "Пользователи",
            columns: &["Имя", "Email", "Роль", "Статус", "Создан", ""],
            empty_message: "Пользователей пока нет",
        }
    }
}

/// Request path for `query`: `endpoint?page=N`, plus the filter when one is set.
pub fn request_path(config: &ListConfig, query: &ListQuery) -> ClientResult<String> {
    let mut params = vec![("page", query.page.to_string())];
    if let Some(value) = query.filter.value() {
        params.push((config.filter_param, value.to_string()));
    }
    let encoded = serde_html_form::to_string(&params)?;
    Ok(format!("{}?{}", config.endpoint, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_path_has_only_page() {
        let path = request_path(&ListConfig::games(), &ListQuery::new(2, "all")).unwrap();
        assert_eq!(path, "/api/games?page=2");
    }

    #[test]
    fn filter_value_is_encoded() {
        let path = request_path(&ListConfig::users(), &ListQuery::new(1, "teacher")).unwrap();
        assert_eq!(path, "/api/users?page=1&role=teacher");

        let path = request_path(&ListConfig::games(), &ListQuery::new(1, "in progress&x")).unwrap();
        assert_eq!(path, "/api/games?page=1&status=in+progress%26x");
    }
}
