use shared::SpinTally;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TallyBoardProps {
    pub tally: SpinTally,
    #[prop_or_default]
    pub on_reset: Callback<()>,
}

#[function_component(TallyBoard)]
pub fn tally_board(props: &TallyBoardProps) -> Html {
    let total = props.tally.total();
    let onclick = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let mut rows: Vec<(&str, u32)> = props.tally.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between mb-4">
                <h3 class={styles::TEXT_H3}>{format!("Results ({} spins)", total)}</h3>
                if !props.tally.is_empty() {
                    <button type="button" onclick={onclick} class={styles::BUTTON_SECONDARY}>{"Clear"}</button>
                }
            </div>

            if props.tally.is_empty() {
                <p class={styles::TEXT_SMALL}>{"No spins yet."}</p>
            } else {
                <table class="w-full text-left">
                    <thead>
                        <tr class={styles::TEXT_SMALL}>
                            <th class="py-1">{"Entry"}</th>
                            <th class="py-1 text-right">{"Wins"}</th>
                            <th class="py-1 text-right">{"Share"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|(label, count)| {
                            let share = count as f64 * 100.0 / total.max(1) as f64;
                            html! {
                                <tr key={label.to_string()} class={styles::TEXT_BODY}>
                                    <td class="py-1">{label}</td>
                                    <td class="py-1 text-right">{count}</td>
                                    <td class="py-1 text-right">{format!("{:.0}%", share)}</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
