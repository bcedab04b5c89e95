//! Pure Yew view components for the kiosk.
//!
//! Everything here renders from props; state lives in the hooks.

use kiosk_carousel::{CarouselConfig, Direction, Item, Panel, StripFrame};
use yew::prelude::*;

/// Inline style positioning the strip for one frame.
pub fn strip_style(frame: StripFrame) -> String {
    // A teleport frame must jump, never slide across the wrap.
    let transition = if frame.animate {
        "transform 60ms linear"
    } else {
        "none"
    };
    format!(
        "transform: translate3d({:.2}px, 0, 0); transition: {};",
        frame.offset, transition
    )
}

#[derive(Properties, PartialEq)]
pub struct ItemTileProps {
    pub item: Item,
    /// Position in the replicated strip, not the logical index.
    pub slot: usize,
    pub width: f64,
    pub gap: f64,
    pub pulsing: bool,
    pub onactivate: Callback<usize>,
}

#[function_component(ItemTile)]
pub fn item_tile(props: &ItemTileProps) -> Html {
    let onclick = {
        let onactivate = props.onactivate.clone();
        let slot = props.slot;
        Callback::from(move |_: MouseEvent| onactivate.emit(slot))
    };
    let class = classes!("carousel-item", props.pulsing.then_some("pulse"));
    // Accent colour comes from the catalog row
    let style = format!(
        "width: {}px; margin-right: {}px; --accent: {};",
        props.width, props.gap, props.item.accent
    );

    html! {
        <div {class} {style} {onclick} data-target={props.item.target.clone()}>
            <span class="carousel-item-label">{ &props.item.label }</span>
        </div>
    }
}

/// Renders `replicas` copies of `items` laid out left to right.
pub fn render_strip(
    items: &[Item],
    config: &CarouselConfig,
    frame: StripFrame,
    pulsing: Option<usize>,
    onactivate: &Callback<usize>,
) -> Html {
    if items.is_empty() {
        return html! {
            <div class="carousel-strip">
                <p class="no-items-message">{ "Nothing to show" }</p>
            </div>
        };
    }

    // Every replica is rendered; the engine keeps the viewport on the home copy.
    let slots = items.len() * config.replicas;
    html! {
        <div class="carousel-strip" style={strip_style(frame)}>
            { (0..slots).map(|slot| {
                let item = &items[slot % items.len()];
                html! {
                    <ItemTile
                        key={slot}
                        item={item.clone()}
                        {slot}
                        width={config.item_width}
                        gap={config.gap}
                        pulsing={pulsing == Some(slot)}
                        onactivate={onactivate.clone()}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavButtonsProps {
    pub onnavigate: Callback<Direction>,
}

#[function_component(NavButtons)]
pub fn nav_buttons(props: &NavButtonsProps) -> Html {
    // "Previous" moves the strip right, revealing the item to the left.
    let prev = {
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |_: MouseEvent| onnavigate.emit(Direction::Right))
    };
    let next = {
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |_: MouseEvent| onnavigate.emit(Direction::Left))
    };

    html! {
        <div class="carousel-nav">
            <button class="carousel-prev" onclick={prev}>{ "‹" }</button>
            <button class="carousel-next" onclick={next}>{ "›" }</button>
        </div>
    }
}

/// Classes for one indicator dot.
pub fn indicator_class(index: usize, active: usize) -> Classes {
    classes!("indicator", (index == active).then_some("active"))
}

#[derive(Properties, PartialEq)]
pub struct IndicatorsProps {
    /// Number of logical items, one dot each.
    pub count: usize,
    pub active: usize,
    pub onselect: Callback<usize>,
}

/// Row of dots under the strip; clicking one jumps to that item.
#[function_component(Indicators)]
pub fn indicators(props: &IndicatorsProps) -> Html {
    if props.count == 0 {
        return html! {};
    }

    html! {
        <div class="carousel-indicators">
            { (0..props.count).map(|index| {
                let onclick = {
                    let onselect = props.onselect.clone();
                    Callback::from(move |_: MouseEvent| onselect.emit(index))
                };
                html! {
                    <button
                        key={index}
                        class={indicator_class(index, props.active)}
                        aria-label={format!("Go to item {}", index + 1)}
                        {onclick}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelViewProps {
    pub panel: Panel,
    pub active: bool,
    pub is_home: bool,
    pub onhome: Callback<MouseEvent>,
}

#[function_component(PanelView)]
pub fn panel_view(props: &PanelViewProps) -> Html {
    // Inactive panels stay in the DOM and are hidden by CSS.
    let class = classes!("panel", props.active.then_some("active"));

    html! {
        <section id={props.panel.id.clone()} {class}>
            <h1>{ &props.panel.title }</h1>
            <p>{ &props.panel.body }</p>
            if !props.is_home {
                <button class="panel-home" onclick={props.onhome.clone()}>{ "Back" }</button>
            }
        </section>
    }
}
