use crate::shared::components::ui::{
    CheckField, IdSelect, NumberField, SelectOption, TextAreaField, TextField,
};
use crate::shared::components::FormDialog;
use crate::shared::crud::{use_options, FormViewModel};
use contracts::domain::a002_product_type::ProductType;
use contracts::domain::a003_brand::Brand;
use contracts::domain::a005_product::ProductDto;
use contracts::domain::a007_lookup::LookupValue;
use contracts::shared::Resource;
use leptos::prelude::*;

/// Options shared by the product list and detail pages.
#[derive(Clone, Copy)]
pub struct ProductOptions {
    pub brands: Signal<Vec<SelectOption>>,
    pub product_types: Signal<Vec<SelectOption>>,
    pub units: Signal<Vec<SelectOption>>,
}

impl ProductOptions {
    pub fn load() -> Self {
        Self {
            brands: use_options::<Brand>(Resource::Brands),
            product_types: use_options::<ProductType>(Resource::ProductTypes),
            units: use_options::<LookupValue>(Resource::Units),
        }
    }
}

#[component]
pub fn ProductForm(
    vm: FormViewModel<ProductDto>,
    options: ProductOptions,
    on_saved: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::Products.element_name()))
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
                    label="Marca"
                    required=true
                    value=vm.field(|f| f.brand_id)
                    options=options.brands
                    on_change=vm.setter(|f, v| f.brand_id = v)
                />
                <IdSelect
                    label="Tipo de producto"
                    required=true
                    value=vm.field(|f| f.product_type_id)
                    options=options.product_types
                    on_change=vm.setter(|f, v| f.product_type_id = v)
                />
                <div class="form__row">
                    <NumberField
                        label="Cantidad"
                        required=true
                        step="0.001"
                        value=vm.field(|f| (f.quantity > 0.0).then_some(f.quantity))
                        on_change=vm.setter(|f, v| f.quantity = v.unwrap_or(0.0))
                    />
                    <IdSelect
                        label="Unidad"
                        required=true
                        value=vm.field(|f| f.unit_id)
                        options=options.units
                        on_change=vm.setter(|f, v| f.unit_id = v)
                    />
                </div>
                <TextField
                    label="URL de la foto"
                    input_type="url"
                    value=vm.field(|f| f.photo_url.clone())
                    on_input=vm.setter(|f, v| f.photo_url = v)
                />
                <CheckField
                    label="Descatalogado"
                    checked=vm.field(|f| f.discontinued)
                    on_change=vm.setter(|f, v| f.discontinued = v)
                />
            </FormDialog>
        </Show>
    }
}
