use contracts::dashboards::d400_insurance_analytics::{SelectionRequest, TabularView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_insurance_analytics::api;
use crate::shared::components::MultiSelect;

/// Columns to request, or None when the table must stay empty
pub fn columns_to_fetch(is_open: bool, picked: Vec<String>) -> Option<Vec<String>> {
    if is_open && !picked.is_empty() {
        Some(picked)
    } else {
        None
    }
}

/// Collapsible "Tabular" section: the filtered rows, projected onto the
/// columns the user picks. Nothing is fetched until a column is picked.
#[component]
pub fn TabularSection(
    columns: Vec<String>,
    #[prop(into)] selection: Signal<Option<SelectionRequest>>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let chosen = RwSignal::new(Vec::<String>::new());
    let (table, set_table) = signal(None::<TabularView>);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let is_open = expanded.get();
        let picked = chosen.get();
        let Some(current) = selection.get() else {
            return;
        };

        // Any change invalidates a request still in flight, including a clear
        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();

        let Some(picked) = columns_to_fetch(is_open, picked) else {
            set_table.set(None);
            return;
        };

        spawn_local(async move {
            let result = api::get_table(current, picked).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(view) => {
                    set_error.set(None);
                    set_table.set(Some(view));
                }
                Err(e) => {
                    log::error!("Failed to load D400 table: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="tabular">
            <div class="tabular__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "▾ Tabular" } else { "▸ Tabular" }}
            </div>
            <Show when=move || expanded.get()>
                <MultiSelect
                    label="Filter: "
                    options=columns.clone()
                    selected=chosen
                    on_change=Callback::new(move |values: Vec<String>| chosen.set(values))
                />
                {move || error.get().map(|e| view! { <div class="dashboard-error">{e}</div> })}
                {move || table.get().map(|data| view! { <TabularTable data=data /> })}
            </Show>
        </div>
    }
}

#[component]
fn TabularTable(data: TabularView) -> impl IntoView {
    let headers = data.columns.clone();

    view! {
        <div class="tabular__caption">{format!("{} rows", data.row_count)}</div>
        <div class="tabular__scroll">
            <Table>
                <TableHeader>
                    <TableRow>
                        {headers
                            .into_iter()
                            .map(|h| view! { <TableHeaderCell>{h}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {data
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <TableRow>
                                    {row
                                        .into_iter()
                                        .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                        .collect_view()}
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
