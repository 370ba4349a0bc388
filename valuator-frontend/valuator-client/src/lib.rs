use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("hydrate mode - mounting charts and help tooltips");

    if let Err(e) = valuator_app::mount() {
        log::error!("unable to mount page behaviour {e}");
    }
}
