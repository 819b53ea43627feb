use leptos::prelude::*;
use thaw::*;

/// Adds or removes `value`, keeping the result in option order
pub fn toggle_value(options: &[String], selected: &[String], value: &str) -> Vec<String> {
    let currently = selected.iter().any(|s| s == value);
    options
        .iter()
        .filter(|option| {
            if option.as_str() == value {
                !currently
            } else {
                selected.contains(*option)
            }
        })
        .cloned()
        .collect()
}

/// Text for an option; the empty category needs something visible
pub fn option_caption(value: &str) -> &str {
    if value.is_empty() {
        "(blank)"
    } else {
        value
    }
}

/// Checkbox list with "All" / "None" shortcuts. Only the given options can
/// ever be selected.
#[component]
pub fn MultiSelect(
    #[prop(into)] label: String,
    options: Vec<String>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let options = StoredValue::new(options);

    let summary = move || {
        let count = selected.get().len();
        let total = options.with_value(|o| o.len());
        format!("{} of {}", count, total)
    };

    view! {
        <div class="multi-select">
            <div class="multi-select__header">
                <span class="multi-select__label">{label}</span>
                <span class="multi-select__summary">{summary}</span>
            </div>
            <Flex gap=FlexGap::Small>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run(options.get_value())
                >
                    "All"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run(Vec::new())
                >
                    "None"
                </Button>
            </Flex>
            <div class="multi-select__options">
                {options
                    .get_value()
                    .into_iter()
                    .map(|option| {
                        let value = option.clone();
                        let checked_value = option.clone();
                        let is_checked = move || selected.with(|s| s.contains(&checked_value));
                        view! {
                            <label class="multi-select__option">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change=move |_| {
                                        let next = options
                                            .with_value(|o| selected.with(|s| toggle_value(o, s, &value)));
                                        on_change.run(next);
                                    }
                                />
                                <span>{option_caption(&option).to_string()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
