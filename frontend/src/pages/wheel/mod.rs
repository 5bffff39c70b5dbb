mod spin_wheel;
mod wheel_canvas;
mod wheel_utils;

use shared::Preset;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{EntryEditor, ShareButton, TallyBoard};
use crate::config::WidgetSettings;
use crate::hooks::{use_entries, use_tally, TallyAction};
use crate::styles;

pub use spin_wheel::SpinWheel;
pub use wheel_canvas::WheelCanvas;
pub use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub preset: Preset,
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let preset = props.preset;
    let entries = use_entries(preset);
    let tally = use_tally();
    let settings = use_state(WidgetSettings::load);
    let result = use_state(|| None::<String>);
    let spinning = use_state(|| false);

    let on_spin_start = {
        let result = result.clone();
        let spinning = spinning.clone();
        Callback::from(move |_| {
            result.set(None);
            spinning.set(true);
        })
    };

    let on_cancel = {
        let spinning = spinning.clone();
        Callback::from(move |_| spinning.set(false))
    };

    let on_result = {
        let result = result.clone();
        let spinning = spinning.clone();
        let tally = tally.clone();
        Callback::from(move |label: String| {
            spinning.set(false);
            tally.dispatch(TallyAction::Record(label.clone()));
            result.set(Some(label));
        })
    };

    let on_sound = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let next = WidgetSettings {
                sound: input.checked(),
                ..(*settings).clone()
            };
            next.save();
            settings.set(next);
        })
    };

    let on_tally_reset = {
        let tally = tally.clone();
        Callback::from(move |_| tally.dispatch(TallyAction::Reset))
    };

    // Entries may be edited after a result; show the color only while it still matches.
    let result_color = (*result).as_ref().and_then(|label| {
        entries
            .entries
            .iter()
            .find(|e| e.label() == label.as_str())
            .map(|e| e.color().to_string())
    });

    let preset_links = Preset::ALL.iter().map(|p| {
        let class = if *p == preset { styles::TEXT_H3 } else { styles::LINK };
        html! {
            <a key={p.slug()} href={format!("?preset={}", p.slug())} class={classes!(class, "text-sm")}>
                {p.title()}
            </a>
        }
    });

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <div class="text-center mb-8">
                    <h1 class={styles::TEXT_H1}>{preset.title()}</h1>
                    <nav class="mt-4 flex flex-wrap justify-center gap-4">
                        { for preset_links }
                    </nav>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="flex flex-col items-center">
                        <SpinWheel
                            entries={entries.entries.clone()}
                            on_result={on_result}
                            on_spin_start={on_spin_start}
                            on_cancel={on_cancel}
                            size={settings.wheel_size}
                            config={settings.spin}
                            sound={settings.sound}
                        />
                        <ResultDisplay label={(*result).clone()} color={result_color} />
                        <label class={classes!(styles::TEXT_SMALL, "flex", "items-center", "gap-2")}>
                            <input type="checkbox" checked={settings.sound} onchange={on_sound} />
                            {"Tick sound"}
                        </label>
                        <p class={classes!(styles::TEXT_HINT, "mt-2")}>{"Press Space or Enter to spin."}</p>
                    </div>

                    <div class="space-y-6">
                        <EntryEditor
                            entries={entries.entries.clone()}
                            on_change={entries.set_entries.clone()}
                            on_reset={entries.reset.clone()}
                            disabled={*spinning}
                        />
                        <TallyBoard tally={tally.tally.clone()} on_reset={on_tally_reset} />
                        <ShareButton entries={entries.entries.clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}
