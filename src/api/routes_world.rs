use super::*;

pub(super) async fn get_containers(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Vec<EntityPoint>>>, StatusCode> {
    entity_snapshot(&state, EntityKind::Container)
}

pub(super) async fn get_coins(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Vec<EntityPoint>>>, StatusCode> {
    entity_snapshot(&state, EntityKind::Coin)
}

fn entity_snapshot(
    state: &AppState,
    kind: EntityKind,
) -> Result<Json<HashMap<String, Vec<EntityPoint>>>, StatusCode> {
    let grid = state
        .grid
        .read()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(
        grid.snapshot(kind)
            .into_iter()
            .map(|(key, points)| (chunk::key_label(key), points))
            .collect(),
    ))
}
