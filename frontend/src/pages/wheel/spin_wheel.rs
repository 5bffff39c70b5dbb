use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, info};
use shared::{Entry, SpinConfig, SpinContext, SpinOutcome, SpinRequest, WheelController};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::wheel_canvas::WheelCanvas;
use super::wheel_utils::SpinButton;
use crate::audio::TickSound;
use crate::config::now_ms;

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub entries: Rc<Vec<Entry>>,
    /// Winning label, emitted once per finished spin.
    pub on_result: Callback<String>,
    #[prop_or_default]
    pub on_spin_start: Callback<()>,
    /// Emitted when an in-flight spin is dropped because the entries changed.
    #[prop_or_default]
    pub on_cancel: Callback<()>,
    /// Bumping this counter requests a spin.
    #[prop_or_default]
    pub spin: u32,
    #[prop_or(crate::config::DEFAULT_WHEEL_SIZE)]
    pub size: f64,
    #[prop_or_default]
    pub config: SpinConfig,
    #[prop_or(true)]
    pub sound: bool,
}

/// Per-frame driver. Holds the pending frame handle; dropping the handle
/// cancels the frame.
#[derive(Clone)]
struct FrameLoop {
    controller: Rc<RefCell<WheelController>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    sound: Rc<RefCell<TickSound>>,
    rotation: UseStateHandle<f64>,
    spinning: UseStateHandle<bool>,
    on_finish: Callback<SpinOutcome>,
}

impl FrameLoop {
    fn schedule(&self) {
        let this = self.clone();
        let handle = request_animation_frame(move |timestamp| this.step(timestamp));
        *self.pending.borrow_mut() = Some(handle);
    }

    fn step(&self, timestamp: f64) {
        let frame = self.controller.borrow_mut().tick(timestamp);
        self.rotation.set(frame.rotation);
        if frame.crossed_segment {
            self.sound.borrow().click();
        }

        if let Some(outcome) = frame.outcome {
            self.stop();
            self.on_finish.emit(outcome);
        } else if self.controller.borrow().is_spinning() {
            self.schedule();
        } else {
            self.stop();
        }
    }

    fn stop(&self) {
        self.pending.borrow_mut().take();
        self.spinning.set(false);
    }
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let controller = use_mut_ref(|| {
        let seed = js_sys::Date::now() as u64;
        WheelController::new(SpinContext::secure(seed, props.config))
    });
    let pending = use_mut_ref(|| None::<AnimationFrame>);
    let sound = use_mut_ref(|| TickSound::new(props.sound));
    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);

    {
        let controller = controller.clone();
        use_effect_with(props.config, move |config| {
            controller.borrow_mut().context_mut().set_config(*config);
            || ()
        });
    }

    {
        let sound = sound.clone();
        use_effect_with(props.sound, move |enabled| {
            sound.borrow_mut().set_enabled(*enabled);
            || ()
        });
    }

    // Cancel any pending frame when the widget goes away.
    {
        let controller = controller.clone();
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
                controller.borrow_mut().cancel();
            }
        });
    }

    // A new entry list invalidates the spin in flight.
    {
        let controller = controller.clone();
        let pending = pending.clone();
        let spinning = spinning.clone();
        let on_cancel = props.on_cancel.clone();
        use_effect_with(props.entries.clone(), move |_| {
            if controller.borrow().is_spinning() {
                debug!("Entries changed mid-spin, cancelling");
                pending.borrow_mut().take();
                controller.borrow_mut().cancel();
                spinning.set(false);
                on_cancel.emit(());
            }
            || ()
        });
    }

    let start_spin = {
        let frame_loop = FrameLoop {
            controller: controller.clone(),
            pending: pending.clone(),
            sound: sound.clone(),
            rotation: rotation.clone(),
            spinning: spinning.clone(),
            on_finish: {
                let on_result = props.on_result.clone();
                Callback::from(move |outcome: SpinOutcome| {
                    info!("Wheel landed on \"{}\"", outcome.label);
                    on_result.emit(outcome.label);
                })
            },
        };
        let entries = props.entries.clone();
        let on_spin_start = props.on_spin_start.clone();
        let spinning = spinning.clone();
        let sound = sound.clone();

        Callback::from(move |_: ()| {
            let request = frame_loop.controller.borrow_mut().request_spin(&entries, now_ms());
            match request {
                SpinRequest::Started { .. } => {
                    sound.borrow_mut().prime();
                    spinning.set(true);
                    on_spin_start.emit(());
                    frame_loop.schedule();
                }
                SpinRequest::NoEntries | SpinRequest::AlreadySpinning => {
                    debug!("Spin request not started: {:?}", request);
                }
            }
        })
    };

    // Listeners registered once call whatever spin callback is current.
    let latest_spin = use_mut_ref(Callback::<()>::noop);
    *latest_spin.borrow_mut() = start_spin.clone();

    {
        let latest_spin = latest_spin.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.repeat() || !matches!(event.key().as_str(), " " | "Enter") {
                        return;
                    }
                    let from_control = event
                        .target()
                        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "BUTTON" | "SELECT"))
                        .unwrap_or(false);
                    if from_control {
                        return;
                    }
                    event.prevent_default();
                    latest_spin.borrow().emit(());
                })
            });
            move || drop(listener)
        });
    }

    {
        let latest_spin = latest_spin.clone();
        use_effect_with(props.spin, move |count| {
            if *count > 0 {
                latest_spin.borrow().emit(());
            }
            || ()
        });
    }

    let onclick = {
        let start_spin = start_spin.clone();
        Callback::from(move |_: MouseEvent| start_spin.emit(()))
    };

    html! {
        <div class="flex flex-col items-center gap-6">
            <WheelCanvas
                entries={props.entries.clone()}
                rotation={*rotation}
                size={props.size}
                is_spinning={*spinning}
            />
            <div class="w-full max-w-[300px]">
                <SpinButton
                    is_spinning={*spinning}
                    disabled={props.entries.is_empty()}
                    onclick={onclick}
                />
            </div>
        </div>
    }
}
