#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use studio_core::{BookingFlow, HandoffConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod catalog;
mod constants;
mod dom;
mod events;
mod modal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Module scripts run after parsing, so the catalog markup is already here.
    let catalog = Rc::new(RefCell::new(catalog::scan(&document)));
    catalog::wire_cards(&document, &catalog);

    let flow = Rc::new(RefCell::new(BookingFlow::new()));
    events::wire_booking_handlers(
        &document,
        events::BookingWiring {
            flow,
            catalog: catalog.clone(),
            handoff: Rc::new(HandoffConfig::default()),
        },
    );

    catalog::open_from_location(&document, &catalog);
    events::wire_welcome_popup(&document);

    Ok(())
}
