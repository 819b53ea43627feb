use contracts::dashboards::d400_insurance_analytics::{FilterOptionSet, SelectionRequest};
use leptos::prelude::*;

use crate::shared::components::MultiSelect;

/// Default selection: every option of every filter
pub fn initial_selection(filters: &[FilterOptionSet]) -> SelectionRequest {
    let mut selection = SelectionRequest::default();
    for filter in filters {
        selection.set(filter.column, Some(filter.options.clone()));
    }
    selection
}

#[component]
pub fn Sidebar(
    caption: String,
    logo: Option<String>,
    filters: Vec<FilterOptionSet>,
    selection: RwSignal<Option<SelectionRequest>>,
) -> impl IntoView {
    let logo_view = logo.map(|src| {
        let alt = caption.clone();
        view! { <img class="sidebar__logo" src=src alt=alt /> }
    });

    view! {
        <div class="sidebar">
            {logo_view}
            <div class="sidebar__caption">{caption}</div>
            <h3 class="sidebar__header">"Please filter"</h3>
            {filters
                .into_iter()
                .map(|filter| {
                    let column = filter.column;
                    let selected = Signal::derive(move || {
                        selection.with(|s| {
                            s.as_ref()
                                .and_then(|s| s.get(column))
                                .map(|values| values.to_vec())
                                .unwrap_or_default()
                        })
                    });
                    let on_change = Callback::new(move |values: Vec<String>| {
                        selection.update(|s| {
                            if let Some(s) = s {
                                s.set(column, Some(values));
                            }
                        });
                    });
                    view! {
                        <MultiSelect
                            label=filter.label
                            options=filter.options
                            selected=selected
                            on_change=on_change
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_insurance_analytics::FilterColumn;

    #[test]
    fn test_initial_selection_takes_every_option() {
        let filters = vec![
            FilterOptionSet {
                column: FilterColumn::Region,
                label: "Select region".to_string(),
                options: vec!["East".to_string(), "West".to_string()],
            },
            FilterOptionSet {
                column: FilterColumn::Construction,
                label: "Select construction".to_string(),
                options: vec![],
            },
        ];
        let selection = initial_selection(&filters);
        assert_eq!(
            selection.region,
            Some(vec!["East".to_string(), "West".to_string()])
        );
        assert_eq!(selection.construction, Some(vec![]));
        assert_eq!(selection.location, None);
    }
}
