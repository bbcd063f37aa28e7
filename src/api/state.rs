use super::*;

#[derive(Clone)]
pub(super) struct AppState {
    pub(super) registry: Arc<RwLock<ActorRegistry>>,
    pub(super) grid: Arc<RwLock<EntityGrid>>,
}
