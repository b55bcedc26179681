//! Read-only JSON API over the bracket engine, for the presentation layer.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Data is loaded once at startup from TOURNAMENTS_JSON and MEMBERSHIPS_CSV.

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use gameweek_knockout::{
    calculate_bracket_preview, get_next_opponent_for_participant, get_participant_matchup,
    get_round_name, get_tournament_friends, get_tournament_matchups, participant_standings,
    EntryId, InMemoryStore, MatchupOptions, StoreError, Tournament, TournamentId, TournamentStore,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Tournaments and league memberships, read-only after startup.
type AppState = Data<InMemoryStore>;

/// Session key holding the viewer's entry id.
const SESSION_USER_KEY: &str = "user_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct RoundNameResponse {
    name: String,
}

#[derive(Deserialize)]
struct BracketPreviewQuery {
    participants: usize,
    #[serde(default = "default_match_size")]
    match_size: usize,
}

fn default_match_size() -> usize {
    2
}

#[derive(Deserialize)]
struct RoundNameQuery {
    round: u32,
    total: u32,
}

#[derive(Deserialize)]
struct MatchupsQuery {
    round: Option<u32>,
    #[serde(default)]
    friends_only: bool,
    user_id: Option<EntryId>,
}

#[derive(Deserialize)]
struct FriendsQuery {
    user_id: Option<EntryId>,
}

#[derive(Deserialize)]
struct SessionUserBody {
    user_id: EntryId,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and entry id (e.g. /api/tournaments/{id}/participants/{entry_id})
#[derive(Deserialize)]
struct TournamentParticipantPath {
    id: TournamentId,
    entry_id: EntryId,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

fn store_error_response(e: &StoreError) -> HttpResponse {
    match e {
        StoreError::TournamentNotFound(_) => HttpResponse::NotFound().json(error_json(e)),
        _ => {
            log::error!("Store read failed: {}", e);
            HttpResponse::InternalServerError().json(error_json(e))
        }
    }
}

async fn load_tournament(state: &AppState, id: TournamentId) -> Result<Tournament, HttpResponse> {
    state
        .load_tournament(id)
        .await
        .map_err(|e| store_error_response(&e))
}

/// Explicit query parameter first, then the session.
fn resolve_user(session: &Session, explicit: Option<EntryId>) -> Option<EntryId> {
    explicit.or_else(|| session.get::<EntryId>(SESSION_USER_KEY).ok().flatten())
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "gameweek-knockout",
    })
}

/// Bracket shape for an as-yet-uncreated tournament.
#[get("/api/bracket-preview")]
async fn api_bracket_preview(query: Query<BracketPreviewQuery>) -> HttpResponse {
    if query.match_size < 2 {
        return HttpResponse::BadRequest().json(error_json("match_size must be at least 2"));
    }
    HttpResponse::Ok().json(calculate_bracket_preview(query.participants, query.match_size))
}

#[get("/api/round-name")]
async fn api_round_name(query: Query<RoundNameQuery>) -> HttpResponse {
    if query.round == 0 || query.total == 0 {
        return HttpResponse::BadRequest().json(error_json("round and total must be at least 1"));
    }
    HttpResponse::Ok().json(RoundNameResponse {
        name: get_round_name(query.round, query.total),
    })
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    match state.tournament_ids() {
        Ok(ids) => HttpResponse::Ok().json(ids),
        Err(e) => store_error_response(&e),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match load_tournament(&state, path.id).await {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(resp) => resp,
    }
}

/// Matchups for a round, or each participant's latest. Friend tagging when a user is known.
#[get("/api/tournaments/{id}/matchups")]
async fn api_tournament_matchups(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    query: Query<MatchupsQuery>,
) -> HttpResponse {
    let t = match load_tournament(&state, path.id).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let user_id = resolve_user(&session, query.user_id);
    let options = MatchupOptions {
        round: query.round,
        friends_only: query.friends_only,
        user_id,
        league_id: user_id.map(|_| t.league_id),
    };
    match get_tournament_matchups(&t, &options, state.get_ref()).await {
        Ok(matchups) => HttpResponse::Ok().json(matchups),
        Err(e) => store_error_response(&e),
    }
}

#[get("/api/tournaments/{id}/participants/{entry_id}/matchup")]
async fn api_participant_matchup(
    state: AppState,
    path: Path<TournamentParticipantPath>,
) -> HttpResponse {
    let t = match load_tournament(&state, path.id).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    match get_participant_matchup(&t, path.entry_id) {
        Some(matchup) => HttpResponse::Ok().json(matchup),
        None => HttpResponse::NotFound().json(error_json("No matchup for this entry")),
    }
}

/// Next-opponent preview; `null` when there is nobody further to meet.
#[get("/api/tournaments/{id}/participants/{entry_id}/next-opponent")]
async fn api_next_opponent(state: AppState, path: Path<TournamentParticipantPath>) -> HttpResponse {
    let t = match load_tournament(&state, path.id).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    if t.participant(path.entry_id).is_none() {
        return HttpResponse::NotFound().json(error_json("Entry is not in this tournament"));
    }
    HttpResponse::Ok().json(get_next_opponent_for_participant(&t, path.entry_id))
}

#[get("/api/tournaments/{id}/friends")]
async fn api_tournament_friends(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    query: Query<FriendsQuery>,
) -> HttpResponse {
    let Some(user_id) = resolve_user(&session, query.user_id) else {
        return HttpResponse::BadRequest().json(error_json("user_id is required"));
    };
    let t = match load_tournament(&state, path.id).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let standings = participant_standings(&t);
    match get_tournament_friends(state.get_ref(), t.id, t.league_id, user_id, &standings).await {
        Ok(friends) => HttpResponse::Ok().json(friends),
        Err(e) => store_error_response(&e),
    }
}

/// Remember which entry is viewing, so friend queries can omit user_id.
#[put("/api/session/user")]
async fn api_set_session_user(session: Session, body: Json<SessionUserBody>) -> HttpResponse {
    match session.insert(SESSION_USER_KEY, body.user_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().json(error_json(e)),
    }
}

#[delete("/api/session/user")]
async fn api_clear_session_user(session: Session) -> HttpResponse {
    session.remove(SESSION_USER_KEY);
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Settings read from the environment, with defaults.
struct Config {
    host: String,
    port: u16,
    tournaments_json: PathBuf,
    memberships_csv: PathBuf,
    session_key: Key,
    cookie_secure: bool,
}

impl Config {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let tournaments_json = std::env::var("TOURNAMENTS_JSON")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/tournaments.json"));
        let memberships_csv = std::env::var("MEMBERSHIPS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/memberships.csv"));
        // Key needs at least 64 bytes; anything shorter falls back to a per-process key.
        let session_key = std::env::var("SESSION_KEY")
            .ok()
            .and_then(|k| Key::try_from(k.as_bytes()).ok())
            .unwrap_or_else(|| {
                log::warn!("SESSION_KEY unset or shorter than 64 bytes; sessions reset on restart");
                Key::generate()
            });
        let cookie_secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            host,
            port,
            tournaments_json,
            memberships_csv,
            session_key,
            cookie_secure,
        }
    }
}

fn invalid_data(e: StoreError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

/// Fill the store from the configured files. Missing files leave it empty.
fn load_store(config: &Config) -> std::io::Result<InMemoryStore> {
    let store = InMemoryStore::new();
    if config.tournaments_json.exists() {
        let n = store
            .load_tournaments_json(&config.tournaments_json)
            .map_err(invalid_data)?;
        log::info!("Loaded {} tournament(s) from {}", n, config.tournaments_json.display());
    } else {
        log::warn!("No tournaments file at {}", config.tournaments_json.display());
    }
    if config.memberships_csv.exists() {
        let n = store
            .load_memberships_csv(&config.memberships_csv)
            .map_err(invalid_data)?;
        log::info!(
            "Loaded {} league membership row(s) from {}",
            n,
            config.memberships_csv.display()
        );
    } else {
        log::warn!("No memberships file at {}", config.memberships_csv.display());
    }
    Ok(store)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state = Data::new(load_store(&config)?);

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let session_key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;
    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .app_data(state.clone())
            .service(api_health)
            .service(api_bracket_preview)
            .service(api_round_name)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_tournament_matchups)
            .service(api_participant_matchup)
            .service(api_next_opponent)
            .service(api_tournament_friends)
            .service(api_set_session_user)
            .service(api_clear_session_user)
    })
    .bind(bind)?
    .run()
    .await
}
