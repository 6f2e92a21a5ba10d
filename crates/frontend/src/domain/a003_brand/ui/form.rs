use crate::shared::components::ui::{CheckField, TextAreaField, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::domain::a003_brand::BrandDto;
use contracts::shared::Resource;
use leptos::prelude::*;

#[component]
pub fn BrandForm(vm: FormViewModel<BrandDto>, on_saved: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::Brands.element_name()))
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
                <TextField
                    label="Sitio web"
                    input_type="url"
                    placeholder="https://"
                    value=vm.field(|f| f.website.clone())
                    on_input=vm.setter(|f, v| f.website = v)
                />
                <TextField
                    label="URL del logo"
                    input_type="url"
                    value=vm.field(|f| f.logo_url.clone())
                    on_input=vm.setter(|f, v| f.logo_url = v)
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
