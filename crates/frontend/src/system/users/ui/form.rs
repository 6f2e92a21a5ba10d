use crate::shared::components::ui::{CheckField, IdSelect, SelectOption, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::shared::Resource;
use contracts::system::AdminUserDto;
use leptos::prelude::*;

#[component]
pub fn UserForm(
    vm: FormViewModel<AdminUserDto>,
    #[prop(into)]
    genders: Signal<Vec<SelectOption>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            {move || {
                // an empty password keeps the current one
                let editing = vm.form.with_untracked(|f| f.id.is_some());
                let password_hint = if editing { "dejar vacío para no cambiar" } else { "" };
                view! {
                    <FormDialog
                        title=Signal::derive(move || vm.title(Resource::Users.element_name()))
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
                        <TextField
                            label="Correo electrónico"
                            input_type="email"
                            required=true
                            value=vm.field(|f| f.email.clone())
                            on_input=vm.setter(|f, v| f.email = v)
                        />
                        <TextField
                            label="Contraseña"
                            input_type="password"
                            placeholder=password_hint
                            required=!editing
                            value=vm.field(|f| f.password.clone())
                            on_input=vm.setter(|f, v| f.password = v)
                        />
                        <IdSelect
                            label="Género"
                            placeholder="(Sin especificar)"
                            value=vm.field(|f| f.gender_id)
                            options=genders
                            on_change=vm.setter(|f, v| f.gender_id = v)
                        />
                        <CheckField
                            label="Activo"
                            checked=vm.field(|f| f.active)
                            on_change=vm.setter(|f, v| f.active = v)
                        />
                    </FormDialog>
                }
            }}
        </Show>
    }
}
