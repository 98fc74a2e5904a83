//! HTTP layer: HTML page and REST API over the session store.

use crate::logic::{export_text, generate_teams, return_to_edit};
use crate::models::{PlayerId, Session, SessionError, SessionId, Side, SkillTier};
use crate::store::{SessionStore, StoreError};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Deserialize;

type AppState = Data<SessionStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    skill: SkillTier,
}

#[derive(Deserialize)]
struct FormatBody {
    players_per_team: usize,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(default)]
    query: String,
}

#[derive(Deserialize)]
struct ScoreBody {
    team: Side,
    delta: i32,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and player id (e.g. /api/sessions/{id}/players/{player_id})
#[derive(Deserialize)]
struct SessionPlayerPath {
    id: SessionId,
    player_id: PlayerId,
}

fn error_json(msg: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": msg.to_string() })
}

fn store_error_response(e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound => HttpResponse::NotFound().json(error_json(e)),
        StoreError::Poisoned => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Apply `action` to a session; 200 with the snapshot, or 400 with the error message.
fn session_response<F>(store: &SessionStore, id: SessionId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Session) -> Result<(), SessionError>,
{
    let result = store.with_session(id, |s| match action(s) {
        Ok(()) => HttpResponse::Ok().json(s.snapshot()),
        Err(e) => {
            log::debug!("Session {}: rejected: {}", id, e);
            HttpResponse::BadRequest().json(error_json(e))
        }
    });
    result.unwrap_or_else(store_error_response)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "volley-draft-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new empty session (client stores the id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState) -> HttpResponse {
    let id = match state.insert(Session::new()) {
        Ok(id) => id,
        Err(e) => return store_error_response(e),
    };
    log::info!("Created session {}", id);
    session_response(&state, id, |_| Ok(()))
}

/// Get a session by id (404 if not found). Touching it refreshes its activity time.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    session_response(&state, path.id, |_| Ok(()))
}

/// Add a player (Edit view only). Blank names are rejected.
#[post("/api/sessions/{id}/players")]
async fn api_add_player(state: AppState, path: Path<SessionPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    session_response(&state, path.id, |s| s.add_player(&body.name, body.skill).map(|_| ()))
}

/// Remove a player by id (Edit view only).
#[delete("/api/sessions/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    session_response(&state, path.id, |s| s.remove_player(path.player_id))
}

/// Remove every player (Edit view only).
#[delete("/api/sessions/{id}/players")]
async fn api_clear_players(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    session_response(&state, path.id, Session::clear_all)
}

/// Choose the format by players per team: 2, 3 or 5 (Edit view only).
#[put("/api/sessions/{id}/format")]
async fn api_set_format(state: AppState, path: Path<SessionPath>, body: Json<FormatBody>) -> HttpResponse {
    session_response(&state, path.id, |s| s.set_format(body.players_per_team))
}

/// Update the roster search box.
#[put("/api/sessions/{id}/search")]
async fn api_set_search(state: AppState, path: Path<SessionPath>, body: Json<SearchBody>) -> HttpResponse {
    let query = body.into_inner().query;
    session_response(&state, path.id, |s| {
        s.set_search_query(query);
        Ok(())
    })
}

/// Draft (or redraw) teams from the current roster and format.
#[post("/api/sessions/{id}/draft")]
async fn api_generate_teams(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    session_response(&state, path.id, |s| generate_teams(s, &mut rand::thread_rng()))
}

/// Back to the Edit view: discard teams and score, keep the roster.
#[delete("/api/sessions/{id}/draft")]
async fn api_return_to_edit(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    session_response(&state, path.id, return_to_edit)
}

/// Add `delta` points to one team (clamped at zero).
#[put("/api/sessions/{id}/score")]
async fn api_adjust_score(state: AppState, path: Path<SessionPath>, body: Json<ScoreBody>) -> HttpResponse {
    session_response(&state, path.id, |s| s.adjust_score(body.team, body.delta).map(|_| ()))
}

/// Reset the scoreboard to 0 x 0.
#[post("/api/sessions/{id}/score/reset")]
async fn api_reset_score(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    session_response(&state, path.id, Session::reset_score)
}

/// Share text for the current draft (plain text; the page hands it to share/clipboard).
#[get("/api/sessions/{id}/export")]
async fn api_export(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let result = state.with_session(path.id, |s| match export_text(s) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    });
    result.unwrap_or_else(store_error_response)
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Register the page and every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_create_session)
        .service(api_get_session)
        .service(api_add_player)
        .service(api_remove_player)
        .service(api_clear_players)
        .service(api_set_format)
        .service(api_set_search)
        .service(api_generate_teams)
        .service(api_return_to_edit)
        .service(api_adjust_score)
        .service(api_reset_score)
        .service(api_export);
}
