use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tera::Context;

use crate::domain::game::{Game, GameDetail, Snapshot};
use crate::render::{RenderError, RowRenderer, Templates};

/// Display fields of a game shared by list rows and the game page header.
#[derive(Debug, Serialize)]
pub struct GameView<'a> {
    pub id: i32,
    pub title: &'a str,
    pub player1: &'a str,
    pub player2: &'a str,
    pub snapshot_count: usize,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Game> for GameView<'a> {
    fn from(game: &'a Game) -> Self {
        Self {
            id: game.id.get(),
            title: &game.title,
            player1: &game.player1.name,
            player2: &game.player2.name,
            snapshot_count: game.snapshot_count,
            status_label: game.status.label(),
            badge_class: game.status.badge_class(),
            created_at: game.created_at,
        }
    }
}

impl<'a> From<&'a GameDetail> for GameView<'a> {
    fn from(game: &'a GameDetail) -> Self {
        Self {
            id: game.id.get(),
            title: &game.title,
            player1: &game.player1.name,
            player2: &game.player2.name,
            snapshot_count: game.snapshot_count(),
            status_label: game.status.label(),
            badge_class: game.status.badge_class(),
            created_at: game.created_at,
        }
    }
}

/// Rows of the games table; each row navigates to `/games/{id}`.
pub struct GameRows {
    templates: Rc<Templates>,
}

impl GameRows {
    pub fn new(templates: Rc<Templates>) -> Self {
        Self { templates }
    }
}

impl RowRenderer for GameRows {
    type Item = Game;

    fn render(&self, items: &[Game]) -> Result<String, RenderError> {
        let games: Vec<GameView> = items.iter().map(GameView::from).collect();
        let mut context = Context::new();
        context.insert("games", &games);
        self.templates.render("games/rows.html", &context)
    }
}

/// Snapshot cards of the game page, one board placeholder per snapshot.
pub fn render_snapshot_cards(
    templates: &Templates,
    snapshots: &[Snapshot],
) -> Result<String, RenderError> {
    let mut context = Context::new();
    context.insert("snapshots", snapshots);
    templates.render("games/snapshots.html", &context)
}
