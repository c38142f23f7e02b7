//! Everything a map view needs to run the polygon drawing workflow.

use crate::channel::AreaSink;
use crate::config::AppConfig;
use crate::lifecycle::PolygonLifecycle;
use crate::model::DrawingModeController;
use crate::panel::AreaPanel;

/// Drawing tool mode, polygon lifecycle and the area panel of one map view.
#[derive(Debug)]
pub struct DrawingView {
    pub controller: DrawingModeController,
    pub lifecycle: PolygonLifecycle,
    pub panel: AreaPanel,
    /// Whether the host map surface is mounted and can take listeners.
    pub surface_mounted: bool,
    /// Last user-facing status line.
    pub status_message: Option<String>,
}

impl DrawingView {
    /// Create a view using the preferences from `config`.
    pub fn new(config: &AppConfig) -> Self {
        let preferences = &config.preferences;
        log::debug!(
            "Drawing view using {} area model",
            preferences.area_model.name()
        );
        Self {
            controller: DrawingModeController::new(),
            lifecycle: PolygonLifecycle::with_model(preferences.area_model),
            panel: AreaPanel::new(preferences.auto_open_panel),
            surface_mounted: true,
            status_message: None,
        }
    }

    /// Run a lifecycle operation and forward its report, if any, to the panel.
    pub fn with_lifecycle<R>(&mut self, op: impl FnOnce(&mut PolygonLifecycle) -> R) -> R {
        let before = self.lifecycle.channel().emissions();
        let result = op(&mut self.lifecycle);
        if self.lifecycle.channel().emissions() != before {
            self.panel.report(self.lifecycle.channel().last_reported());
        }
        result
    }
}

impl Default for DrawingView {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
