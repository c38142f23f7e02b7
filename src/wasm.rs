//! Browser binding: a drawing session driven by the host map's JS event listeners.

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::handlers::handle_draw;
use crate::message::DrawMessage;
use crate::model::{MapMode, PolygonHandle};
use crate::state::DrawingView;
use wildmap_geo::{LatLng, Ring, RingEdit};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    if let Err(e) = console_log::init_with_level(config.preferences.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already initialized: {}", e).into());
    }
}

/// A drawing session for one map view. Rings are flat `[lat, lng, lat, lng, ...]`
/// arrays, handles are plain numbers.
#[wasm_bindgen]
pub struct WasmDrawingSession {
    config: AppConfig,
    view: DrawingView,
    on_area: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl WasmDrawingSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = AppConfig::load_from_local_storage().unwrap_or_default();
        Self {
            view: DrawingView::new(&config),
            config,
            on_area: None,
        }
    }

    /// Whether positive area reports open the panel. Persisted by `saveConfig`.
    #[wasm_bindgen(js_name = setAutoOpenPanel)]
    pub fn set_auto_open_panel(&mut self, auto_open: bool) {
        self.config.preferences.auto_open_panel = auto_open;
        self.view.panel.set_auto_open(auto_open);
    }

    /// Persist the current preferences to localStorage.
    #[wasm_bindgen(js_name = saveConfig)]
    pub fn save_config(&self) -> Result<(), JsValue> {
        self.config
            .save_to_local_storage()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register `callback(areaKm2)`, invoked on every area report.
    #[wasm_bindgen(js_name = setAreaCallback)]
    pub fn set_area_callback(&mut self, callback: js_sys::Function) {
        self.on_area = Some(callback);
    }

    #[wasm_bindgen(js_name = setSurfaceMounted)]
    pub fn set_surface_mounted(&mut self, mounted: bool) {
        self.dispatch(DrawMessage::SurfaceMounted { mounted });
    }

    /// Switch the map mode: `"default"`, `"overlay"`, `"draw"` or `"park"`.
    #[wasm_bindgen(js_name = setMapMode)]
    pub fn set_map_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: MapMode = serde_json::from_value(serde_json::Value::String(mode.to_string()))
            .map_err(|e| JsValue::from_str(&format!("Unknown map mode '{}': {}", mode, e)))?;
        self.dispatch(DrawMessage::SetMapMode { mode });
        Ok(())
    }

    #[wasm_bindgen(js_name = activateTool)]
    pub fn activate_tool(&mut self) {
        self.dispatch(DrawMessage::ActivateTool);
    }

    #[wasm_bindgen(js_name = deactivateTool)]
    pub fn deactivate_tool(&mut self) {
        self.dispatch(DrawMessage::DeactivateTool);
    }

    /// Returns the new polygon's handle, or `undefined` if the tool is disarmed.
    #[wasm_bindgen(js_name = polygonCompleted)]
    pub fn polygon_completed(&mut self, ring: Vec<f64>) -> Option<u32> {
        let before = self.view.lifecycle.session().len();
        self.dispatch(DrawMessage::PolygonCompleted {
            ring: ring_from_flat(&ring),
        });
        if self.view.lifecycle.session().len() == before {
            return None;
        }
        self.view
            .lifecycle
            .last_edited()
            .and_then(|handle| u32::try_from(handle.0).ok())
    }

    #[wasm_bindgen(js_name = vertexInserted)]
    pub fn vertex_inserted(&mut self, handle: u32, ring: Vec<f64>) {
        self.dispatch(DrawMessage::VertexInserted {
            handle: PolygonHandle(handle.into()),
            ring: ring_from_flat(&ring),
        });
    }

    #[wasm_bindgen(js_name = vertexUpdated)]
    pub fn vertex_updated(&mut self, handle: u32, ring: Vec<f64>) {
        self.dispatch(DrawMessage::VertexUpdated {
            handle: PolygonHandle(handle.into()),
            ring: ring_from_flat(&ring),
        });
    }

    #[wasm_bindgen(js_name = vertexRemoved)]
    pub fn vertex_removed(&mut self, handle: u32, ring: Vec<f64>) {
        self.dispatch(DrawMessage::VertexRemoved {
            handle: PolygonHandle(handle.into()),
            ring: ring_from_flat(&ring),
        });
    }

    /// Apply a single edit given as JSON, e.g. `{"op": "remove", "index": 2}`.
    #[wasm_bindgen(js_name = vertexEdited)]
    pub fn vertex_edited(&mut self, handle: u32, edit: &str) -> Result<(), JsValue> {
        let edit: RingEdit = serde_json::from_str(edit)
            .map_err(|e| JsValue::from_str(&format!("Invalid ring edit: {}", e)))?;
        self.dispatch(DrawMessage::VertexEdited {
            handle: PolygonHandle(handle.into()),
            edit,
        });
        Ok(())
    }

    #[wasm_bindgen(js_name = rightClick)]
    pub fn right_click(&mut self, handle: u32) {
        self.dispatch(DrawMessage::RightClick {
            handle: PolygonHandle(handle.into()),
        });
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.dispatch(DrawMessage::ClearAll);
    }

    #[wasm_bindgen(js_name = closePanel)]
    pub fn close_panel(&mut self) {
        self.dispatch(DrawMessage::ClosePanel);
    }

    /// Last reported area in km².
    pub fn area(&self) -> f64 {
        self.view.lifecycle.channel().last_reported()
    }

    #[wasm_bindgen(js_name = panelVisible)]
    pub fn panel_visible(&self) -> bool {
        self.view.panel.is_visible()
    }

    /// The estimate table for the current area as JSON.
    #[wasm_bindgen(js_name = estimateSections)]
    pub fn estimate_sections(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.view.panel.sections())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn dispatch(&mut self, msg: DrawMessage) {
        let before = self.view.lifecycle.channel().emissions();
        handle_draw(msg, &mut self.view);

        let channel = self.view.lifecycle.channel();
        if channel.emissions() == before {
            return;
        }
        if let Some(callback) = &self.on_area {
            let area = JsValue::from_f64(channel.last_reported());
            if let Err(e) = callback.call1(&JsValue::NULL, &area) {
                log::error!("Area callback failed: {:?}", e);
            }
        }
    }
}

impl Default for WasmDrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

fn ring_from_flat(values: &[f64]) -> Ring {
    Ring::new(LatLng::from_flat(values))
}
