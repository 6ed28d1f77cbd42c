#![cfg(target_arch = "wasm32")]
use globe_core::{Animator, LoopHandle, Preset, Rasterizer};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod raf;

use raf::RafScheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");
    Ok(())
}

/// A mounted globe. Call `unmount()` (or `free()`) when the host element
/// goes away; either stops the animation loop for good.
#[wasm_bindgen]
pub struct GlobeHandle {
    inner: LoopHandle<RafScheduler>,
}

#[wasm_bindgen]
impl GlobeHandle {
    pub fn unmount(&self) {
        self.inner.stop();
    }

    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.inner.frames() as f64
    }
}

/// Start a globe inside the element with id `element_id`.
///
/// `preset` is `"point-cloud"` (default) or `"wireframe"`.
#[wasm_bindgen]
pub fn mount(element_id: &str, preset: Option<String>) -> Result<GlobeHandle, JsValue> {
    mount_inner(element_id, preset.as_deref()).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn mount_inner(element_id: &str, preset: Option<&str>) -> anyhow::Result<GlobeHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = dom::element_by_id(&document, element_id)?;

    let preset: Preset = match preset {
        Some(name) => name.parse()?,
        None => Preset::default(),
    };
    let raster = Rasterizer::new(preset.config())?;

    dom::prepare_host(&el);
    let scheduler = RafScheduler::new()?;
    let inner = globe_core::start(scheduler, Animator::new(raster), dom::text_sink(el));
    log::info!("mounted {} globe on #{}", preset.name(), element_id);
    Ok(GlobeHandle { inner })
}
