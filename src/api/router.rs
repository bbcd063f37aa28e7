use super::*;

pub(super) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_actors).post(update_position))
        .route("/containers", get(get_containers))
        .route("/coins", get(get_coins))
        .with_state(state)
}
