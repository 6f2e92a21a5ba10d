use crate::shared::components::ui::{CheckField, IdSelect, SelectOption, TextAreaField, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::domain::a002_product_type::ProductTypeDto;
use contracts::shared::Resource;
use leptos::prelude::*;

#[component]
pub fn ProductTypeForm(
    vm: FormViewModel<ProductTypeDto>,
    #[prop(into)]
    categories: Signal<Vec<SelectOption>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::ProductTypes.element_name()))
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
                    label="Categoría"
                    required=true
                    value=vm.field(|f| f.category_id)
                    options=categories
                    on_change=vm.setter(|f, v| f.category_id = v)
                />
                <TextField
                    label="URL de imagen"
                    input_type="url"
                    value=vm.field(|f| f.image_url.clone())
                    on_input=vm.setter(|f, v| f.image_url = v)
                />
                <CheckField
                    label="Activo"
                    checked=vm.field(|f| f.active)
                    on_change=vm.setter(|f, v| f.active = v)
                />
            </FormDialog>
        </Show>
    }
}
