use crate::shared::components::ui::{CheckField, IdSelect, SelectOption, TextAreaField, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::domain::a001_category::{flatten_for_select, CategoryDto, CategoryNode};
use contracts::shared::Resource;
use leptos::prelude::*;

/// Parent selector entries for the category being edited.
pub fn parent_options(forest: &[CategoryNode], editing_id: Option<i64>) -> Vec<SelectOption> {
    flatten_for_select(forest, editing_id)
        .into_iter()
        .map(|o| SelectOption {
            id: o.id,
            label: o.label,
            disabled: o.disabled,
        })
        .collect()
}

#[component]
pub fn CategoryForm(
    vm: FormViewModel<CategoryDto>,
    #[prop(into)]
    forest: Signal<Vec<CategoryNode>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        let editing_id = vm.form.with(|f| f.id);
        forest.with(|f| parent_options(f, editing_id))
    });

    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::Categories.element_name()))
                can_submit=Signal::derive(move || vm.can_submit())
                saving=vm.saving
                hint=Signal::derive(move || vm.validation_message())
                error=vm.error
                on_submit=Callback::new(move |_| vm.save_command(on_saved))
                on_cancel=Callback::new(move |_| vm.close())
            >
                <TextField
                    label="Nombre"
                    required=true
                    value=vm.field(|f| f.name.clone())
                    on_input=vm.setter(|f, v| f.name = v)
                />
                <TextAreaField
                    label="Descripción"
                    value=vm.field(|f| f.description.clone())
                    on_input=vm.setter(|f, v| f.description = v)
                />
                <IdSelect
                    label="Categoría padre"
                    placeholder="(Raíz)"
                    value=vm.field(|f| f.parent_id)
                    options=options
                    on_change=vm.setter(|f, v| f.parent_id = v)
                />
                <TextField
                    label="URL de imagen"
                    input_type="url"
                    value=vm.field(|f| f.image_url.clone())
                    on_input=vm.setter(|f, v| f.image_url = v)
                />
                <CheckField
                    label="Activa"
                    checked=vm.field(|f| f.active)
                    on_change=vm.setter(|f, v| f.active = v)
                />
            </FormDialog>
        </Show>
    }
}
