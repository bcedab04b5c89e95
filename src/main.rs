//! Kiosk front page: a looping drag carousel of tiles above a set of panels.
//! Wires the catalog, hooks and view components together.

use kiosk_carousel::{logging, Catalog, CarouselConfig};
use log::warn;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_strip, Indicators, NavButtons, PanelView};
use hooks::{use_carousel, use_panel_switcher, use_tap_pulse};

const ITEMS_CSV: &str = include_str!("items.csv");
const PANELS_CSV: &str = include_str!("panels.csv");
const FALLBACK_HOME: &str = "home";

/// Lock page scrolling for the kiosk; the carousel handles its own panning.
fn lock_page_scroll() {
    if let Err(e) = gloo_utils::body().set_attribute("data-scroll-lock", "") {
        warn!("Could not lock page scroll: {:?}", e);
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| {
        Catalog::from_csv(ITEMS_CSV, PANELS_CSV).unwrap_or_else(|e| {
            warn!("Catalog unavailable, showing an empty kiosk: {}", e);
            Catalog::default()
        })
    });
    let config = CarouselConfig::default();

    // Home falls back to a fixed id when the panel list is empty

    let home = catalog.home().unwrap_or(FALLBACK_HOME).to_string();
    let switcher = use_panel_switcher(catalog.panel_ids(), home);
    let carousel = use_carousel(config.clone(), catalog.items.len());
    let pulse = use_tap_pulse(switcher.show.clone());

    use_effect_with((), |_| lock_page_scroll());

    // Taps on a tile open its panel; the end of a drag lands here too and
    // is ignored.
    let on_activate = {
        let carousel = carousel.clone();
        let catalog = catalog.clone();
        let activate = pulse.activate.clone();
        Callback::from(move |slot: usize| {
            if !carousel.allows_activation() || catalog.items.is_empty() {
                return;
            }
            let item = &catalog.items[slot % catalog.items.len()];
            activate.emit((slot, item.target.clone()));
        })
    };

    let on_home = {
        let show = switcher.show.clone();
        let home = switcher.home.clone();
        Callback::from(move |_: MouseEvent| show.emit(home.clone()))
    };

    html! {
        <div class="kiosk">
            <main class="panels">
                { catalog.panels.iter().map(|panel| {
                    html! {
                        <PanelView
                            key={panel.id.clone()}
                            panel={panel.clone()}
                            active={switcher.active.as_deref() == Some(panel.id.as_str())}
                            is_home={panel.id == switcher.home}
                            onhome={on_home.clone()}
                        />
                    }
                }).collect::<Html>() }
            </main>

            <div class="carousel">
                <div class="carousel-viewport"
                    onpointerdown={carousel.on_pointer_down.clone()}
                    onpointermove={carousel.on_pointer_move.clone()}
                    onpointerup={carousel.on_pointer_up.clone()}
                    onpointercancel={carousel.on_pointer_up.clone()}
                    onpointerenter={carousel.on_pointer_enter.clone()}
                    onpointerleave={carousel.on_pointer_leave.clone()}
                >
                    { render_strip(&catalog.items, &config, carousel.frame, pulse.pulsing, &on_activate) }
                </div>
                <NavButtons onnavigate={carousel.navigate.clone()} />
                <Indicators
                    count={catalog.items.len()}
                    active={carousel.current_index}
                    onselect={carousel.navigate_to.clone()}
                />
            </div>
        </div>
    }
}

/// Entry point: installs logging and renders the kiosk.
fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
