use leptos::prelude::*;
use thaw::*;

/// Full-width row shown instead of data while loading or when nothing matched.
#[component]
pub fn StateRow(
    colspan: u32,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(optional)]
    empty_text: Option<&'static str>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or("No hay registros");

    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                <div class="table__state">
                    {move || if loading.get() { "Cargando..." } else { empty_text }}
                </div>
            </TableCell>
        </TableRow>
    }
}
