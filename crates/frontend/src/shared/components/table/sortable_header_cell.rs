//! Clickable table header that drives a `SortState`.
//!
//! ```ignore
//! <SortableHeaderCell label="Nombre" field="name" sort=sort />
//! <SortableHeaderCell label="Precio" field="price" sort=sort align="right" />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortState};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column key passed to `Sortable::compare_by_field`
    field: &'static str,

    sort: RwSignal<SortState>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(&s.field, field))>
                    {move || sort.with(|s| get_sort_indicator(&s.field, field, s.ascending))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
