use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use shared::share::SHARE_PARAM;
use shared::{encode_entries, Entry};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::config::get_share_base_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ShareButtonProps {
    pub entries: Rc<Vec<Entry>>,
}

pub fn share_url(base: &str, code: &str) -> String {
    format!("{}?{}={}", base, SHARE_PARAM, code)
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

#[function_component(ShareButton)]
pub fn share_button(props: &ShareButtonProps) -> Html {
    let link = use_state(|| None::<String>);
    let copied = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onclick = {
        let entries = props.entries.clone();
        let link = link.clone();
        let copied = copied.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let code = match encode_entries(&entries) {
                Ok(code) => code,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let url = share_url(&get_share_base_url(), &code);
            error.set(None);
            link.set(Some(url.clone()));

            let copied = copied.clone();
            spawn_local(async move {
                match copy_to_clipboard(&url).await {
                    Ok(()) => {
                        info!("Share link copied");
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(2000, move || copied.set(false)).forget();
                    }
                    // The link stays visible for manual copying.
                    Err(err) => error!("Failed to copy share link: {:?}", err),
                }
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h3 class={styles::TEXT_H3}>{"Share"}</h3>
                <button
                    type="button"
                    onclick={onclick}
                    disabled={props.entries.is_empty()}
                    class={styles::BUTTON_PRIMARY}
                >
                    { if *copied { "Copied!" } else { "Copy link" } }
                </button>
            </div>
            if let Some(url) = &*link {
                <input
                    type="text"
                    readonly=true
                    aria-label="Share link"
                    value={url.clone()}
                    class={styles::INPUT}
                />
            }
            if let Some(message) = &*error {
                <p class={styles::TEXT_ERROR}>{message}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url_appends_code() {
        assert_eq!(share_url("https://example.com/wheel", "abc"), "https://example.com/wheel?w=abc");
    }
}
