// Application state for HTTP handlers
use crate::application::river_service::RiverService;

pub struct AppState {
    pub river_service: RiverService,
}
