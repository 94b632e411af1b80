//! Full-page snapshots of what the surface currently shows.

use serde::Serialize;
use tera::Context;

use crate::domain::game::GameDetail;
use crate::domain::user::CurrentUser;
use crate::list::ListConfig;
use crate::render::games::{GameView, render_snapshot_cards};
use crate::render::{RenderError, Templates};
use crate::surface::DocumentSurface;

/// Enabled state of the game page buttons.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct GamePanel {
    pub delete_disabled: bool,
    pub finish_disabled: bool,
}

fn base_context(current_user: Option<&CurrentUser>, errors: &[String]) -> Context {
    let mut context = Context::new();
    context.insert("current_user", &current_user);
    context.insert("errors", errors);
    context
}

/// Renders a list page from the element state held by `surface`.
pub fn render_list_page(
    templates: &Templates,
    config: &ListConfig,
    surface: &DocumentSurface,
    current_user: Option<&CurrentUser>,
) -> Result<String, RenderError> {
    let elements = surface.elements();
    let element = |id: &str| elements.get(id).cloned().unwrap_or_default();
    let ids = &config.ids;

    let mut context = base_context(current_user, &surface.errors());
    context.insert("title", config.title);
    context.insert("columns", config.columns);
    context.insert("empty_message", config.empty_message);
    context.insert("table_id", ids.table);
    context.insert("list_id", ids.list);
    context.insert("loading", &element(ids.loading));
    context.insert("table", &element(ids.table));
    context.insert("list", &element(ids.list));
    context.insert("empty_state", &element(ids.empty_state));
    context.insert("pagination_nav", &element(ids.pagination_nav));
    context.insert("pagination", &element(ids.pagination));

    templates.render("list/page.html", &context)
}

pub fn render_game_page(
    templates: &Templates,
    game: &GameDetail,
    panel: &GamePanel,
    current_user: Option<&CurrentUser>,
    errors: &[String],
) -> Result<String, RenderError> {
    let snapshots = if game.snapshots.is_empty() {
        String::new()
    } else {
        render_snapshot_cards(templates, &game.snapshots)?
    };

    let mut context = base_context(current_user, errors);
    context.insert("game", &GameView::from(game));
    context.insert("panel", panel);
    context.insert("snapshots", &snapshots);

    templates.render("games/show.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::{GameStatus, Participant};
    use crate::domain::types::{GameId, UserId};
    use crate::domain::user::UserRole;
    use crate::surface::{Display, Surface};

    fn detail() -> GameDetail {
        GameDetail {
            id: GameId::new(7).unwrap(),
            title: "Урок 7".to_string(),
            status: GameStatus::Finished,
            player1: Participant {
                id: UserId::new(1).unwrap(),
                name: "Иван".to_string(),
            },
            player2: Participant {
                id: UserId::new(2).unwrap(),
                name: "Мария".to_string(),
            },
            snapshots: Vec::new(),
            created_at: "2025-03-01T09:15:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn list_page_reflects_surface_state() {
        let templates = Templates::builtin().unwrap();
        let surface = DocumentSurface::new();
        surface.hide("loading");
        surface.set_display("usersTable", Display::Table);
        surface.set_inner_html("usersList", "<tr data-user-id=\"3\"></tr>");
        surface.hide("emptyState");
        surface.hide("paginationNav");
        surface.show_error("Не удалось загрузить пользователей.");
        let user = CurrentUser {
            id: UserId::new(1).unwrap(),
            name: "Админ".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        };

        let html =
            render_list_page(&templates, &ListConfig::users(), &surface, Some(&user)).unwrap();

        assert!(html.contains(r#"<table id="usersTable" class="table table-hover" style="display: table">"#));
        assert!(html.contains(r#"<tbody id="usersList"><tr data-user-id="3"></tr></tbody>"#));
        assert!(html.contains(r#"id="loading" class="text-center py-5" style="display: none""#));
        assert!(html.contains("Не удалось загрузить пользователей."));
        assert!(html.contains(r#"<span id="userName" class="navbar-text">Админ</span>"#));
    }

    #[test]
    fn game_without_snapshots_shows_empty_state_and_disabled_buttons() {
        let templates = Templates::builtin().unwrap();
        let panel = GamePanel {
            delete_disabled: true,
            finish_disabled: true,
        };

        let html = render_game_page(&templates, &detail(), &panel, None, &[]).unwrap();

        assert!(html.contains("Снепшотов пока нет"));
        assert!(html.contains(r#"<button id="deleteLastSnapshotBtn" class="btn btn-outline-danger" disabled>"#));
        assert!(html.contains(r#"<button id="finishGameBtn" class="btn btn-outline-primary" disabled>"#));
        assert!(!html.contains("userName"));
    }
}
