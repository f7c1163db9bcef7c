use crate::catalog::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
}
