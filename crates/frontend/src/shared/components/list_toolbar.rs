use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Page header of a list: title, record count, search box and actions.
///
/// Extra filters (selects) go in `children`, between search and buttons.
#[component]
pub fn ListToolbar(
    #[prop(into)]
    title: String,
    #[prop(into)]
    count: Signal<usize>,
    search: RwSignal<String>,
    #[prop(into)]
    loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)]
    on_create: Option<Callback<()>>,
    #[prop(optional)]
    search_placeholder: Option<&'static str>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let placeholder = search_placeholder.unwrap_or("Buscar...");

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || count.get()}
                </Badge>
            </div>
            <div class="page__header-right">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div style="width: 260px;">
                        <Input value=search placeholder=placeholder />
                    </div>
                    {children.map(|c| c())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=loading
                        on_click=move |_| on_refresh.run(())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                    {on_create.map(|create| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| create.run(())
                        >
                            {icon("plus")}
                            " Nuevo"
                        </Button>
                    })}
                </Flex>
            </div>
        </div>
    }
}
