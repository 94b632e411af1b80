//! Command-line front end: runs a page flow against the backend and prints
//! the resulting page as HTML.

use std::env;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use thiserror::Error;

use chess_desk::client::http::HttpTransport;
use chess_desk::client::{ApiClient, TransportError};
use chess_desk::domain::list::ListQuery;
use chess_desk::domain::types::GameId;
use chess_desk::domain::user::CurrentUser;
use chess_desk::forms::auth::LoginForm;
use chess_desk::list::{ListConfig, ListController, LoadOutcome};
use chess_desk::models::config::{DeskConfig, load_config};
use chess_desk::render::games::GameRows;
use chess_desk::render::page::{render_game_page, render_list_page};
use chess_desk::render::users::UserRows;
use chess_desk::render::{RenderError, RowRenderer, Templates};
use chess_desk::services::{ServiceError, auth, games};
use chess_desk::surface::DocumentSurface;

#[derive(Parser)]
#[command(name = "chess-desk")]
#[command(about = "Staff front end of the chess lesson tracker")]
#[command(version)]
struct Cli {
    /// Directory holding `default.yaml` and profile overrides
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a page of the games list
    Games {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// `in_progress`, `finished` or `all`
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Render a page of the users list
    Users {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// `student`, `teacher`, `admin` or `all`
        #[arg(long, default_value = "all")]
        role: String,
    },
    /// Render a game with its snapshots
    Game { id: i32 },
    /// Print the logged-in user
    Whoami,
}

#[derive(Debug, Error)]
enum DeskError {
    #[error("not authorized, redirected to {0}")]
    Unauthorized(String),
    #[error("{0}")]
    LoadFailed(String),
    #[error(transparent)]
    Service(ServiceError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cannot set up HTTP client: {0}")]
    Transport(#[from] TransportError),
}

/// Shared state of one command run.
struct Desk {
    client: Rc<ApiClient<HttpTransport>>,
    surface: Rc<DocumentSurface>,
    templates: Rc<Templates>,
}

impl Desk {
    fn new(config: &DeskConfig) -> Result<Self, DeskError> {
        let templates = match &config.templates_dir {
            Some(glob) => Templates::from_glob(glob)?,
            None => Templates::builtin()?,
        };
        let surface = Rc::new(DocumentSurface::new());
        let transport = HttpTransport::new(config)?;
        let client = ApiClient::new(transport, surface.clone()).login_path(config.login_path.clone());

        Ok(Self {
            client: Rc::new(client),
            surface,
            templates: Rc::new(templates),
        })
    }

    fn service_error(&self, err: ServiceError) -> DeskError {
        match err {
            ServiceError::Unauthorized => {
                DeskError::Unauthorized(self.client.login_location().to_string())
            }
            err => DeskError::Service(err),
        }
    }

    async fn current_user(&self) -> Result<Option<CurrentUser>, DeskError> {
        auth::current_user(&self.client)
            .await
            .map_err(|err| self.service_error(err))
    }

    async fn list_page<R: RowRenderer>(
        &self,
        rows: R,
        config: ListConfig,
        query: ListQuery,
    ) -> Result<String, DeskError> {
        let user = self.current_user().await?;
        let controller = ListController::new(
            self.client.clone(),
            self.surface.clone(),
            rows,
            self.templates.clone(),
            config,
        )
        .with_query(query);

        match controller.load().await {
            LoadOutcome::Unauthorized => {
                return Err(DeskError::Unauthorized(
                    self.client.login_location().to_string(),
                ));
            }
            LoadOutcome::Failed => {
                return Err(DeskError::LoadFailed(self.surface.errors().join("; ")));
            }
            LoadOutcome::Rendered { items, pagination } => log::info!(
                "rendered {} rows, page {} of {}",
                items.len(),
                pagination.current_page,
                pagination.total_pages
            ),
            LoadOutcome::Empty | LoadOutcome::Superseded => {}
        }

        Ok(render_list_page(
            &self.templates,
            controller.config(),
            &self.surface,
            user.as_ref(),
        )?)
    }

    async fn game_page(&self, id: i32) -> Result<String, DeskError> {
        let game_id = GameId::new(id).map_err(|err| self.service_error(err.into()))?;
        let user = self.current_user().await?;
        let game = games::load_game(&self.client, game_id)
            .await
            .map_err(|err| self.service_error(err))?;
        let panel = games::game_panel(&game);

        Ok(render_game_page(
            &self.templates,
            &game,
            &panel,
            user.as_ref(),
            &self.surface.errors(),
        )?)
    }
}

async fn run(command: Command, config: DeskConfig) -> Result<String, DeskError> {
    let desk = Desk::new(&config)?;

    if let Some(credentials) = &config.credentials {
        let form = LoginForm::new(&credentials.email, &credentials.password);
        auth::login(&desk.client, form)
            .await
            .map_err(|err| desk.service_error(err))?;
    }

    match command {
        Command::Games { page, status } => {
            let rows = GameRows::new(desk.templates.clone());
            let query = ListQuery::new(page, status.as_str());
            desk.list_page(rows, ListConfig::games(), query).await
        }
        Command::Users { page, role } => {
            let rows = UserRows::new(desk.templates.clone());
            let query = ListQuery::new(page, role.as_str());
            desk.list_page(rows, ListConfig::users(), query).await
        }
        Command::Game { id } => desk.game_page(id).await,
        Command::Whoami => Ok(match desk.current_user().await? {
            Some(user) => format!("{} <{}>, {}", user.name, user.email, user.role.label()),
            None => "not logged in".to_string(),
        }),
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match load_config(&cli.config_dir, &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading desk config: {err}");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("Failed to start tokio runtime: {err}");
            std::process::exit(1);
        }
    };

    match runtime.block_on(run(cli.command, config)) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
