//! Single binary web server for the shared badminton board.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! BOARD_BACKUP_PATH (local backup file), BOARD_DEBOUNCE_MS (tap debounce window).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_board::{
    fixed_members, Board, BoardError, Config, FileBackup, MoveOutcome, SharedDocument, ZoneId,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Instant;

/// The one board this server hosts, connected to the in-process shared document.
type AppState = Data<RwLock<Board<SharedDocument, FileBackup>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct RemovePlayersBody {
    names: Vec<String>,
}

#[derive(Deserialize)]
struct MoveBody {
    from: ZoneId,
    to: ZoneId,
}

/// Path segment: player name (e.g. /api/board/players/{name}/tap)
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// Path segment: court id (e.g. /api/board/courts/{court}/end-match)
#[derive(Deserialize)]
struct CourtPath {
    court: String,
}

/// Response for an operation: what happened plus the board to redraw.
#[derive(Serialize)]
struct OperationResponse<T: Serialize> {
    outcome: T,
    board: badminton_board::BoardView,
}

fn error_response(e: &BoardError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        BoardError::ZoneFull { .. } | BoardError::NoCourtAvailable => {
            HttpResponse::Conflict().json(body)
        }
        BoardError::UnknownPlayer(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn move_response(
    board: &Board<SharedDocument, FileBackup>,
    result: Result<MoveOutcome, BoardError>,
) -> HttpResponse {
    match result {
        Ok(outcome) => HttpResponse::Ok().json(OperationResponse {
            outcome,
            board: board.view(),
        }),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-board",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full board for redraw (applies pending remote updates first).
#[get("/api/board")]
async fn api_get_board(state: AppState) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    board.refresh();
    HttpResponse::Ok().json(board.view())
}

/// Season member list.
#[get("/api/members")]
async fn api_members() -> HttpResponse {
    HttpResponse::Ok().json(fixed_members())
}

/// Tap shortcut: rest -> first open court, court -> rest, waiting -> nothing.
#[post("/api/board/players/{name}/tap")]
async fn api_tap_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = board.tap(&path.name, Instant::now());
    move_response(&board, result)
}

/// Drag a player from one zone to another.
#[post("/api/board/players/{name}/move")]
async fn api_move_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<MoveBody>,
) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = board.move_player(&path.name, body.from, body.to);
    move_response(&board, result)
}

/// End the match on a court and shift the waiting queues.
#[post("/api/board/courts/{court}/end-match")]
async fn api_end_match(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    board.end_match(&path.court);
    HttpResponse::Ok().json(board.view())
}

/// Add an ad-hoc player to the rest area.
#[post("/api/board/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match board.add_player(&body.name) {
        Ok(name) => HttpResponse::Ok().json(OperationResponse {
            outcome: name,
            board: board.view(),
        }),
        Err(e) => error_response(&e),
    }
}

/// Delete selected players.
#[delete("/api/board/players")]
async fn api_remove_players(state: AppState, body: Json<RemovePlayersBody>) -> HttpResponse {
    if body.names.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Select at least one player" }));
    }
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let removed = board.remove_players(&body.names);
    HttpResponse::Ok().json(OperationResponse {
        outcome: removed,
        board: board.view(),
    })
}

/// Reset the board for everybody.
#[post("/api/board/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut board = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    board.reset();
    HttpResponse::Ok().json(board.view())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);
    log::info!("Shared board at {}", config.document_path.display());
    log::info!("Local backup at {}", config.backup_path.display());

    let document = SharedDocument::open(config.document_path.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let mut board = Board::new(
        document,
        FileBackup::new(config.backup_path.clone()),
        config.debounce,
    );
    board.connect();
    let state = Data::new(RwLock::new(board));

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_get_board)
            .service(api_members)
            .service(api_tap_player)
            .service(api_move_player)
            .service(api_end_match)
            .service(api_add_player)
            .service(api_remove_players)
            .service(api_reset)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    match state.write() {
        Ok(mut board) => board.shutdown(),
        Err(_) => log::warn!("Board lock poisoned during shutdown"),
    }
    Ok(())
}
