use log::info;
use shared::Preset;
use yew::prelude::*;

use crate::config::query_param;
use crate::pages::wheel::WheelPage;

pub const PRESET_PARAM: &str = "preset";

#[function_component(App)]
pub fn app() -> Html {
    let preset = use_memo((), |_| {
        let preset = query_param(PRESET_PARAM)
            .and_then(|slug| Preset::from_slug(&slug))
            .unwrap_or_default();
        info!("Wheel preset: {}", preset.slug());
        preset
    });

    html! {
        <WheelPage preset={*preset} />
    }
}
