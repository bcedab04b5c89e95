use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use kiosk_carousel::config::{SwitcherConfig, AUTO_SCROLL_PERIOD_MS, PULSE_MS};
use kiosk_carousel::{now_ms, Carousel, CarouselConfig, Direction, PanelSwitcher, StripFrame};
use std::cell::RefCell;
use std::rc::Rc;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Render-time view of the carousel plus the callbacks that feed it input.
#[derive(Clone)]
pub struct CarouselHandle {
    /// Offset and transition flag for this render.
    pub frame: StripFrame,
    /// Logical item nearest the left edge, for the indicator dots.
    pub current_index: usize,
    pub on_pointer_down: Callback<PointerEvent>,
    pub on_pointer_move: Callback<PointerEvent>,
    /// Also wired to `pointercancel`.
    pub on_pointer_up: Callback<PointerEvent>,
    /// Hover pause, mouse pointers only.
    pub on_pointer_enter: Callback<PointerEvent>,
    /// Ends any drag and lets auto-scroll resume.
    pub on_pointer_leave: Callback<PointerEvent>,
    pub navigate: Callback<Direction>,
    /// Jump to a logical item index (indicator click).
    pub navigate_to: Callback<usize>,
    engine: Rc<RefCell<Carousel>>,
}

impl CarouselHandle {
    pub fn allows_activation(&self) -> bool {
        self.engine.borrow().allows_activation()
    }
}

/// Only a mouse hovers. Touch and pen report enter on contact, and touch
/// leaves only when something else is touched.
fn hovers(pointer_type: &str) -> bool {
    pointer_type == "mouse"
}

/// Request an animation frame that ticks the engine, re-requesting itself
/// until the engine has nothing left to animate. At most one frame is
/// pending at a time.
fn schedule_frame(engine: Rc<RefCell<Carousel>>, slot: FrameSlot, redraw: UseForceUpdateHandle) {
    if slot.borrow().is_some() || !engine.borrow().needs_frame() {
        return;
    }
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_| {
        // This frame has fired; clear the slot so the next one can be queued.
        next_slot.borrow_mut().take();
        let changed = engine.borrow_mut().tick(now_ms());
        if changed {
            redraw.force_update();
        }
        schedule_frame(engine, next_slot, redraw);
    });
    *slot.borrow_mut() = Some(handle);
}

/// Owns a [`Carousel`] for the component's lifetime. Momentum and easing run
/// on animation frames requested only while something moves; idle drift runs
/// on a fixed interval.
#[hook]
pub fn use_carousel(config: CarouselConfig, item_count: usize) -> CarouselHandle {
    let engine = use_mut_ref(move || Carousel::new(config, item_count));
    let frame_slot: FrameSlot = use_mut_ref(|| None);
    let redraw = use_force_update();

    // Wakes the frame loop after any input that may have started motion.
    let kick = {
        let engine = engine.clone();
        let frame_slot = frame_slot.clone();
        let redraw = redraw.clone();
        Rc::new(move || schedule_frame(engine.clone(), frame_slot.clone(), redraw.clone()))
    };

    // Auto-scroll interval, plus cleanup of any pending frame on unmount
    {
        let engine = engine.clone();
        let frame_slot = frame_slot.clone();
        let redraw = redraw.clone();
        let kick = kick.clone();
        use_effect_with((), move |_| {
            let drift = Interval::new(AUTO_SCROLL_PERIOD_MS, move || {
                let moved = engine.borrow_mut().auto_scroll_tick(now_ms());
                if moved {
                    redraw.force_update();
                    // A wrap during drift leaves a teleport frame to finish.
                    kick();
                }
            });
            move || {
                drop(drift);
                frame_slot.borrow_mut().take();
            }
        });
    }

    let on_pointer_down = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: PointerEvent| {
            engine
                .borrow_mut()
                .pointer_down(e.client_x() as f64, now_ms());
            // Re-render so the strip drops its transition while dragging.
            redraw.force_update();
        })
    };

    let on_pointer_move = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: PointerEvent| {
            let moved = engine
                .borrow_mut()
                .pointer_move(e.client_x() as f64, now_ms());
            if moved {
                redraw.force_update();
            }
        })
    };

    let on_pointer_up = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let kick = kick.clone();
        Callback::from(move |_: PointerEvent| {
            let gesture = engine.borrow_mut().pointer_up(now_ms());
            if gesture.is_some() {
                redraw.force_update();
                // Momentum or a snap may have started.
                kick();
            }
        })
    };

    let on_pointer_enter = {
        let engine = engine.clone();
        Callback::from(move |e: PointerEvent| {
            if hovers(&e.pointer_type()) {
                engine.borrow_mut().set_hovered(true, now_ms());
            }
        })
    };

    let on_pointer_leave = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let kick = kick.clone();
        Callback::from(move |e: PointerEvent| {
            let gesture = {
                let mut engine = engine.borrow_mut();
                let now = now_ms();
                if hovers(&e.pointer_type()) {
                    engine.set_hovered(false, now);
                }
                // Any pointer leaving mid-drag ends the drag.
                engine.pointer_cancel(now)
            };
            if gesture.is_some() {
                redraw.force_update();
                kick();
            }
        })
    };

    let navigate = {
        let engine = engine.clone();
        let kick = kick.clone();
        Callback::from(move |direction: Direction| {
            engine.borrow_mut().navigate(direction, now_ms());
            kick();
        })
    };

    let navigate_to = {
        let engine = engine.clone();
        let kick = kick.clone();
        Callback::from(move |index: usize| {
            engine.borrow_mut().navigate_to(index, now_ms());
            kick();
        })
    };

    // Snapshot for this render; the borrow ends before returning.
    let (frame, current_index) = {
        let engine = engine.borrow();
        (engine.frame(), engine.current_index())
    };
    CarouselHandle {
        frame,
        current_index,
        on_pointer_down,
        on_pointer_move,
        on_pointer_up,
        on_pointer_enter,
        on_pointer_leave,
        navigate,
        navigate_to,
        engine,
    }
}

#[derive(Clone)]
pub struct PanelSwitcherHandle {
    pub active: Option<String>,
    pub home: String,
    pub show: Callback<String>,
}

/// Panel switcher with its reversion timeout. Replacing the stored
/// [`Timeout`] cancels the previous one.
#[hook]
pub fn use_panel_switcher(panels: Vec<String>, home: String) -> PanelSwitcherHandle {
    let switcher = use_mut_ref(move || {
        PanelSwitcher::new(panels, home, SwitcherConfig::default(), rand::rng())
    });
    // The single pending reversion timeout for the whole panel set
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let redraw = use_force_update();

    // Cancel a pending reversion when the kiosk unmounts
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let show = {
        let switcher = switcher.clone();
        let timer = timer.clone();
        let redraw = redraw.clone();
        Callback::from(move |id: String| {
            let scheduled = switcher.borrow_mut().show_panel(&id, now_ms());
            // Home arms nothing; anything else gets a fresh timeout.
            let next = scheduled.map(|reversion| {
                let switcher = switcher.clone();
                let redraw = redraw.clone();
                Timeout::new(reversion.delay_ms, move || {
                    // The switcher ignores the firing if a newer visit superseded it.
                    let reverted = switcher
                        .borrow_mut()
                        .on_reversion_timer(reversion.generation);
                    if reverted {
                        redraw.force_update();
                    }
                })
            });
            // Replacing the handle cancels the previous timeout.
            *timer.borrow_mut() = next;
            redraw.force_update();
        })
    };

    let (active, home) = {
        let switcher = switcher.borrow();
        (
            switcher.active().map(str::to_string),
            switcher.home().to_string(),
        )
    };
    PanelSwitcherHandle { active, home, show }
}

#[derive(Clone)]
pub struct TapPulseHandle {
    /// Strip slot currently playing the pulse.
    pub pulsing: Option<usize>,
    /// `(slot, panel id)`: pulse the slot, then show the panel.
    pub activate: Callback<(usize, String)>,
}

/// Scale pulse on a tapped tile followed by navigation once it completes.
#[hook]
pub fn use_tap_pulse(show: Callback<String>) -> TapPulseHandle {
    let pulsing = use_state(|| None::<usize>);
    // Pulse release and delayed navigation for the latest tap
    let timers: Rc<RefCell<Vec<Timeout>>> = use_mut_ref(Vec::new);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                timers.borrow_mut().clear();
            }
        });
    }

    let activate = {
        let pulsing = pulsing.clone();
        Callback::from(move |(slot, target): (usize, String)| {
            pulsing.set(Some(slot));
            // Scale back up after one pulse length...
            let release = {
                let pulsing = pulsing.clone();
                Timeout::new(PULSE_MS, move || pulsing.set(None))
            };
            // ...and open the panel once the pulse has finished.
            let navigate = {
                let show = show.clone();
                Timeout::new(PULSE_MS * 2, move || show.emit(target))
            };
            // Dropping the old pair cancels a pulse still in flight.
            *timers.borrow_mut() = vec![release, navigate];
        })
    };

    TapPulseHandle {
        pulsing: *pulsing,
        activate,
    }
}
