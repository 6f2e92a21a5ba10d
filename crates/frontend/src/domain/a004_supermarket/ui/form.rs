use crate::shared::components::ui::{
    CheckField, IdSelect, NumberField, SelectOption, TextAreaField, TextField,
};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use contracts::domain::a004_supermarket::SupermarketDto;
use contracts::shared::Resource;
use leptos::prelude::*;

/// Whole hours from the number input; negative input clears the field.
pub fn hours_from_input(value: Option<f64>) -> Option<u32> {
    value.filter(|h| *h >= 0.0).map(|h| h.round() as u32)
}

#[component]
pub fn SupermarketForm(
    vm: FormViewModel<SupermarketDto>,
    #[prop(into)]
    acquisition_methods: Signal<Vec<SelectOption>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::Supermarkets.element_name()))
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
                <IdSelect
                    label="Método de obtención"
                    placeholder="(Sin definir)"
                    value=vm.field(|f| f.acquisition_method_id)
                    options=acquisition_methods
                    on_change=vm.setter(|f, v| f.acquisition_method_id = v)
                />
                <NumberField
                    label="Frecuencia de actualización (horas)"
                    step="1"
                    value=vm.field(|f| f.update_frequency_hours.map(f64::from))
                    on_change=vm.setter(|f, v| f.update_frequency_hours = hours_from_input(v))
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

#[cfg(test)]
mod tests {
    use super::hours_from_input;

    #[test]
    fn hours_are_whole_and_non_negative() {
        assert_eq!(hours_from_input(Some(24.0)), Some(24));
        assert_eq!(hours_from_input(Some(1.6)), Some(2));
        assert_eq!(hours_from_input(Some(-3.0)), None);
        assert_eq!(hours_from_input(None), None);
    }
}
