use super::*;

pub(super) async fn update_position(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let req: UpdateRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid JSON"),
    };
    if !(req.x.is_finite() && req.y.is_finite() && req.z.is_finite()) {
        return (StatusCode::BAD_REQUEST, "non-finite position");
    }

    let id = req
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| client_origin(&headers, addr));
    let pos = Position {
        x: req.x,
        y: req.y,
        z: req.z,
    };
    match state.registry.write() {
        Ok(mut registry) => {
            registry.upsert(id, pos, Instant::now());
            (StatusCode::OK, "position updated")
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "registry unavailable"),
    }
}

pub(super) async fn get_actors(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Position>>, StatusCode> {
    match state.registry.read() {
        Ok(registry) => Ok(Json(registry.snapshot())),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Identity for clients that don't name themselves: the first forwarding
/// hop if a proxy recorded one, otherwise the peer address with any
/// IPv4-mapping prefix stripped.
fn client_origin(headers: &HeaderMap, addr: SocketAddr) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }
    let ip = addr.ip().to_string();
    ip.trim_start_matches("::ffff:").to_string()
}
