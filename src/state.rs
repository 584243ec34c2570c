use crate::config::AppConfig;
use crate::service::WidgetService;

#[derive(Clone)]
pub struct AppState {
    pub widgets: WidgetService,
    pub config: AppConfig,
}
