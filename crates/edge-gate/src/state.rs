use axum::extract::FromRef;
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::AllowList;
use crate::config::Settings;
use crate::session::SessionCodec;

/// Resolved locations of the static files the gate serves.
#[derive(Debug, Clone)]
pub struct StaticPages {
    pub login: PathBuf,
    pub app: PathBuf,
    pub admin: PathBuf,
    pub assets_dir: PathBuf,
}

impl StaticPages {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            login: settings.login_page(),
            app: settings.app_page(),
            admin: settings.admin_page(),
            assets_dir: settings.assets_dir(),
        }
    }
}

/// Application state shared across handlers. Everything in here is
/// immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub codec: Arc<SessionCodec>,
    pub allow_list: Arc<AllowList>,
    pub pages: Arc<StaticPages>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_allow_list(settings, AllowList::default())
    }

    pub fn with_allow_list(settings: Settings, allow_list: AllowList) -> Self {
        Self {
            codec: Arc::new(SessionCodec::new(&settings.session)),
            pages: Arc::new(StaticPages::from_settings(&settings)),
            allow_list: Arc::new(allow_list),
            settings: Arc::new(settings),
        }
    }
}

impl FromRef<AppState> for Arc<SessionCodec> {
    fn from_ref(state: &AppState) -> Self {
        state.codec.clone()
    }
}

impl FromRef<AppState> for Arc<AllowList> {
    fn from_ref(state: &AppState) -> Self {
        state.allow_list.clone()
    }
}

impl FromRef<AppState> for Arc<StaticPages> {
    fn from_ref(state: &AppState) -> Self {
        state.pages.clone()
    }
}
