//! # Utopia
//!
//! Headless runner and browser facade around the `utopia_core` engine.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;

use utopia_core::World;

/// Advances `world` by `steps` ticks; zero does nothing.
pub fn advance(world: &mut World, steps: u32) {
    for _ in 0..steps {
        world.update();
    }
}

#[cfg(target_arch = "wasm32")]
use utopia_core::{AppConfig, SeededRng};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Simulation {
    world: World,
}

#[cfg(target_arch = "wasm32")]
fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Simulation {
    /// `config_toml` may be empty for defaults. `temperature` is whatever
    /// ambient reading the page could get, if any.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_toml: &str,
        seed: Option<u32>,
        temperature: Option<f64>,
    ) -> Result<Simulation, JsValue> {
        console_error_panic_hook::set_once();

        let config = AppConfig::from_toml(config_toml).map_err(to_js)?;
        let (width, height) = (config.world.width, config.world.height);
        let mut rng = match seed.map(u64::from).or(config.world.seed) {
            Some(s) => SeededRng::new(s, width, height),
            None => SeededRng::from_time(width, height),
        };
        if let Some(t) = temperature {
            rng.set_environmental_factor(t);
        }
        let world = World::new(config, rng).map_err(to_js)?;
        Ok(Simulation { world })
    }

    /// Advances `steps` ticks; zero does nothing.
    pub fn tick(&mut self, steps: u32) {
        advance(&mut self.world, steps);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.world.set_viewport(width, height);
    }

    pub fn restart(&mut self) {
        self.world.restart();
    }

    pub fn stats_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.world.stats()).map_err(to_js)
    }

    pub fn agents_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.world.agents()).map_err(to_js)
    }

    pub fn resources_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.world.resources()).map_err(to_js)
    }

    /// Drains the birth and death log. The engine keeps at most
    /// `utopia_core::world::EVENT_LOG_CAPACITY` undrained events.
    pub fn events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.world.drain_events()).map_err(to_js)
    }
}
