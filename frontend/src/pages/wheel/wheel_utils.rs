use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub label: Option<String>,
    #[prop_or_default]
    pub color: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(label) = &props.label else {
        return html! { <div aria-live="polite" class="mt-6 h-16"></div> };
    };

    let swatch_style = props
        .color
        .as_ref()
        .map(|c| format!("background-color: {};", c))
        .unwrap_or_default();

    html! {
        <div aria-live="polite" class="mt-6 mb-4 flex flex-col items-center justify-center">
            <div class={styles::RESULT_BADGE}>
                <span class={styles::COLOR_SWATCH} style={swatch_style}></span>
                <span>{label}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else if props.disabled {
        "Add entries to spin"
    } else {
        "Spin"
    };

    let is_disabled = props.is_spinning || props.disabled;

    let button_class = if is_disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_IDLE
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(
                    "relative",
                    "w-full",
                    "px-8",
                    "py-4",
                    "font-bold",
                    "text-lg",
                    "transition-all",
                    "duration-300",
                    "border-2",
                    "border-transparent",
                    "hover:border-white",
                    "focus:outline-none",
                    "focus:ring-4",
                    "focus:ring-yellow-300",
                    "bg-transparent",
                )}
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
