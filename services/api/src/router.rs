use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use holocron_core::error::fallback;
use holocron_core::health::{healthz, readyz};
use holocron_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    character::{get_character, get_characters, update_character},
    favorite::{
        create_character_favorite, create_planet_favorite, create_user_favorite,
        delete_character_favorite, delete_planet_favorite, delete_user_favorite,
        get_user_favorites,
    },
    planet::{get_planet, get_planets, update_planet},
    token::create_token,
    user::{create_user, get_user, get_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/token", post(create_token))
        // Users
        .route("/users", get(get_users))
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        // Favorites of a user
        .route("/users/{id}/favorites", get(get_user_favorites))
        .route("/users/{id}/favorites", post(create_user_favorite))
        .route("/users/{id}/favorites", delete(delete_user_favorite))
        // Characters
        .route("/characters", get(get_characters))
        .route("/characters/{id}", get(get_character))
        .route("/characters/{id}", put(update_character))
        // Planets
        .route("/planets", get(get_planets))
        .route("/planets/{id}", get(get_planet))
        .route("/planets/{id}", put(update_planet))
        // Favorites of the caller
        .route("/favorite/characters/{id}", post(create_character_favorite))
        .route("/favorite/characters/{id}", delete(delete_character_favorite))
        .route("/favorite/planets/{id}", post(create_planet_favorite))
        .route("/favorite/planets/{id}", delete(delete_planet_favorite))
        .fallback(fallback)
        // Outermost last: the request id is set before tracing sees the request.
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
