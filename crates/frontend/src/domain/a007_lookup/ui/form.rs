use crate::shared::components::ui::{TextAreaField, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::domain::a007_lookup::{LookupDto, LookupKind};
use leptos::prelude::*;

#[component]
pub fn LookupForm(kind: LookupKind, vm: FormViewModel<LookupDto>, on_saved: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(kind.element_name()))
                can_submit=Signal::derive(move || vm.can_submit())
                saving=vm.saving
                hint=Signal::derive(move || vm.validation_message())
                error=vm.error
                on_submit=Callback::new(move |_| vm.save_command(on_saved))
                on_cancel=Callback::new(move |_| vm.close())
            >
                <TextField
                    label="Valor"
                    required=true
                    value=vm.field(|f| f.value.clone())
                    on_input=vm.setter(|f, v| f.value = v)
                />
                <TextAreaField
                    label="Descripción"
                    required=true
                    rows=3
                    value=vm.field(|f| f.description.clone())
                    on_input=vm.setter(|f, v| f.description = v)
                />
            </FormDialog>
        </Show>
    }
}
