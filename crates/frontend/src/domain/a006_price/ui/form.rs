use crate::shared::components::ui::{IdSelect, NumberField, SelectOption, TextField};
use crate::shared::components::FormDialog;
use crate::shared::crud::FormViewModel;
use crate::shared::date_utils::{format_money, from_date_input, to_date_input};
use chrono::Utc;
use contracts::domain::a006_price::PriceDto;
use contracts::shared::Resource;
use leptos::prelude::*;

/// Price dialog, used by the price list and by the product detail page.
#[component]
pub fn PriceForm(
    vm: FormViewModel<PriceDto>,
    #[prop(into)]
    products: Signal<Vec<SelectOption>>,
    #[prop(into)]
    supermarkets: Signal<Vec<SelectOption>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let preview = move || {
        vm.form.with(|f| {
            if f.price <= 0.0 {
                return String::new();
            }
            let effective = f.effective_price(Utc::now());
            if effective < f.price {
                format!("Precio vigente: {} (promoción)", format_money(effective))
            } else {
                format!("Precio vigente: {}", format_money(effective))
            }
        })
    };

    view! {
        <Show when=move || vm.open.get()>
            <FormDialog
                title=Signal::derive(move || vm.title(Resource::Prices.element_name()))
                can_submit=Signal::derive(move || vm.can_submit())
                saving=vm.saving
                hint=Signal::derive(move || vm.validation_message())
                error=vm.error
                on_submit=Callback::new(move |_| vm.save_command(on_saved))
                on_cancel=Callback::new(move |_| vm.close())
            >
                <IdSelect
                    label="Producto"
                    required=true
                    value=vm.field(|f| f.product_id)
                    options=products
                    on_change=vm.setter(|f, v| f.product_id = v)
                />
                <IdSelect
                    label="Supermercado"
                    required=true
                    value=vm.field(|f| f.supermarket_id)
                    options=supermarkets
                    on_change=vm.setter(|f, v| f.supermarket_id = v)
                />
                <NumberField
                    label="Precio"
                    required=true
                    value=vm.field(|f| (f.price > 0.0).then_some(f.price))
                    on_change=vm.setter(|f, v| f.price = v.unwrap_or(0.0))
                />
                <NumberField
                    label="Precio promocional"
                    value=vm.field(|f| f.promo_price)
                    on_change=vm.setter(|f, v| f.promo_price = v)
                />
                <TextField
                    label="Fin de la promoción"
                    input_type="date"
                    value=vm.field(|f| to_date_input(&f.promo_ends_at))
                    on_input=vm.setter(|f, v| f.promo_ends_at = from_date_input(&v))
                />
                <p class="form__hint">{preview}</p>
            </FormDialog>
        </Show>
    }
}
