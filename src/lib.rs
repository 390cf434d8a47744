//! # Lifegrid
//!
//! Hosts for the [`lifegrid_core`] engine: a WebAssembly binding that hands
//! the browser a pointer into the live cell buffer, and (natively) a terminal
//! driver with start/pause/reset lifecycle.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;

pub use lifegrid_core::{AppConfig, Grid, GridView, HEIGHT, SIZE, WIDTH};

use wasm_bindgen::prelude::*;

/// One engine instance exported to JavaScript.
///
/// The host reads cells directly from linear memory:
///
/// ```js
/// const universe = new Universe();
/// universe.initRandom(Date.now());
/// universe.update();
/// const cells = new Uint8Array(memory.buffer, universe.getGridPtr(), universe.getSize());
/// ```
///
/// `getGridPtr` must be called again after every `update`/`initRandom`,
/// because the engine swaps its two buffers each generation.
#[wasm_bindgen]
pub struct Universe {
    grid: Grid,
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Universe {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            web_sys::console::log_1(&JsValue::from_str(&format!(
                "lifegrid universe {WIDTH}x{HEIGHT}"
            )));
        }

        Universe { grid: Grid::new() }
    }

    #[wasm_bindgen(js_name = getGridPtr)]
    pub fn grid_ptr(&self) -> *const u8 {
        self.grid.as_ptr()
    }

    #[wasm_bindgen(js_name = getWidth)]
    pub fn width(&self) -> u32 {
        self.grid.width() as u32
    }

    #[wasm_bindgen(js_name = getHeight)]
    pub fn height(&self) -> u32 {
        self.grid.height() as u32
    }

    #[wasm_bindgen(js_name = getSize)]
    pub fn size(&self) -> u32 {
        self.grid.size() as u32
    }

    /// Advances one generation.
    pub fn update(&mut self) {
        self.grid.step();
    }

    /// Alias of [`update`](Self::update).
    pub fn step(&mut self) {
        self.grid.step();
    }

    #[wasm_bindgen(js_name = initRandom)]
    pub fn init_random(&mut self, seed: u32) {
        self.grid.init_random(seed);
    }

    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, x: i32, y: i32, value: u8) {
        self.grid.set_cell(x, y, value);
    }

    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.grid.get_cell(x, y)
    }

    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.grid.toggle_cell(x, y);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn population(&self) -> u32 {
        self.grid.population() as u32
    }
}

impl Universe {
    /// Borrowed view for Rust-side hosts.
    pub fn view(&self) -> GridView<'_> {
        self.grid.view()
    }
}
