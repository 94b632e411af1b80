//! Game page services: detail, snapshot removal and status changes.

use serde::Deserialize;

use crate::client::{ApiClient, Transport};
use crate::domain::game::{GameDetail, GameStatus};
use crate::domain::types::{GameId, SnapshotId};
use crate::render::page::GamePanel;
use crate::services::{ServiceError, ServiceResult, expect_success};

#[derive(Deserialize)]
struct RemovedSnapshot {
    id: SnapshotId,
}

#[derive(Deserialize)]
struct StatusChange {
    status: GameStatus,
}

pub async fn load_game<T: Transport>(client: &ApiClient<T>, game_id: GameId) -> ServiceResult<GameDetail> {
    let response = client.get(format!("/api/games/{game_id}")).await?;

    if response.status == 404 {
        log::warn!("game {game_id} not found");
        return Err(ServiceError::NotFound);
    }

    let response = expect_success(response, "Не удалось загрузить партию.")?;
    Ok(response.json()?)
}

/// Deletes the newest snapshot of a game and returns its id.
pub async fn delete_last_snapshot<T: Transport>(
    client: &ApiClient<T>,
    game_id: GameId,
) -> ServiceResult<SnapshotId> {
    let response = client
        .delete(format!("/api/games/{game_id}/snapshots/last"))
        .await?;
    let response = expect_success(response, "Не удалось удалить снепшот")?;

    let removed: RemovedSnapshot = response.json()?;
    log::info!("removed snapshot {} of game {game_id}", removed.id);
    Ok(removed.id)
}

/// Flips a game between in progress and finished; returns the new status.
pub async fn toggle_status<T: Transport>(
    client: &ApiClient<T>,
    game_id: GameId,
) -> ServiceResult<GameStatus> {
    let response = client
        .patch(format!("/api/games/{game_id}/status"))
        .await?;
    let response = expect_success(response, "Не удалось изменить статус партии")?;

    let change: StatusChange = response.json()?;
    Ok(change.status)
}

pub fn game_panel(game: &GameDetail) -> GamePanel {
    GamePanel {
        delete_disabled: game.snapshots.is_empty(),
        finish_disabled: game.status == GameStatus::Finished,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::{ApiRequest, ApiResponse, Method};
    use crate::surface::DocumentSurface;

    fn client(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, Rc::new(DocumentSurface::new()))
    }

    fn detail_body(status: &str, snapshots: usize) -> String {
        let snapshots: Vec<_> = (1..=snapshots)
            .map(|n| {
                json!({
                    "id": n,
                    "moveNumber": n,
                    "position": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
                    "createdAt": "2025-01-23T10:31:00"
                })
            })
            .collect();
        json!({
            "id": 1,
            "title": "Партия Иван vs Мария",
            "status": status,
            "player1": {"id": 1, "name": "Иван Петров"},
            "player2": {"id": 2, "name": "Мария Сидорова"},
            "createdAt": "2025-01-23T10:30:00",
            "snapshots": snapshots
        })
        .to_string()
    }

    #[tokio::test]
    async fn load_game_reads_snapshots() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request: &ApiRequest| request.path == "/api/games/1")
            .returning(|_| Ok(ApiResponse::new(200, detail_body("in_progress", 3))));

        let game = load_game(&client(transport), GameId::new(1).unwrap())
            .await
            .unwrap();

        assert_eq!(game.snapshot_count(), 3);
        assert_eq!(game.snapshots[2].move_number, 3);
        assert_eq!(
            game_panel(&game),
            GamePanel {
                delete_disabled: false,
                finish_disabled: false
            }
        );
    }

    #[tokio::test]
    async fn missing_game_is_not_found() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(ApiResponse::new(404, r#"{"detail": "Партия не найдена"}"#)));

        let err = load_game(&client(transport), GameId::new(99).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound));
    }

    #[tokio::test]
    async fn delete_last_snapshot_returns_removed_id() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request: &ApiRequest| {
                request.method == Method::Delete && request.path == "/api/games/1/snapshots/last"
            })
            .returning(|_| Ok(ApiResponse::new(200, r#"{"message": "Снепшот удалён", "id": 5}"#)));

        let removed = delete_last_snapshot(&client(transport), GameId::new(1).unwrap())
            .await
            .unwrap();

        assert_eq!(removed.get(), 5);
    }

    #[tokio::test]
    async fn deleting_without_snapshots_reports_detail() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(ApiResponse::new(404, r#"{"detail": "Снепшотов нет"}"#)));

        let err = delete_last_snapshot(&client(transport), GameId::new(1).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Api(message) if message == "Снепшотов нет"));
    }

    #[tokio::test]
    async fn toggle_status_returns_new_status() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request: &ApiRequest| {
                request.method == Method::Patch && request.path == "/api/games/1/status"
            })
            .returning(|_| Ok(ApiResponse::new(200, r#"{"status": "finished"}"#)));

        let status = toggle_status(&client(transport), GameId::new(1).unwrap())
            .await
            .unwrap();

        assert_eq!(status, GameStatus::Finished);
    }

    #[test]
    fn finished_game_without_snapshots_disables_both_buttons() {
        let game: GameDetail = serde_json::from_str(&detail_body("finished", 0)).unwrap();

        assert_eq!(
            game_panel(&game),
            GamePanel {
                delete_disabled: true,
                finish_disabled: true
            }
        );
    }
}
