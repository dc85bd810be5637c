//! Shared router state

use crate::settings::ServerSettings;
use form_renderer::{FieldPolicy, FormConfig};

/// Layout and field policy every request renders with
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: FormConfig,
    pub policy: FieldPolicy,
}

impl AppState {
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            config: settings.form_config(),
            policy: settings.field_policy(),
        }
    }
}
