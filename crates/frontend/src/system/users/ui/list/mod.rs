use super::form::UserForm;
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::{ActiveBadge, CountBadge};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, use_options, FormViewModel, ListState};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use contracts::domain::a007_lookup::LookupValue;
use contracts::domain::common::ref_value;
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use contracts::system::{AdminUser, AdminUserDto};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for AdminUser {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "email" => cmp_text(&self.email, &other.email),
            "gender" => cmp_text(&ref_value(&self.gender), &ref_value(&other.gender)),
            "lists" => self.counts.get("lists").cmp(&other.counts.get("lists")),
            "active" => self.active.cmp(&other.active),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let toast = use_toast();
    let list = ListState::<AdminUser>::new(Resource::Users);
    let vm = FormViewModel::<AdminUserDto>::new(Resource::Users);
    let genders = use_options::<LookupValue>(Resource::Genders);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new("name"));

    let reload = move || list.load(ListQuery::new());
    Effect::new(move |_| reload());
    let on_saved = Callback::new(move |_: ()| reload());

    let visible = Signal::derive(move || {
        let mut items = list.items.with(|items| filter_items(items, &search.get()));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|user| {
                let name = user.name.clone();
                let email = user.email.clone();
                let gender = ref_value(&user.gender);
                let lists = user.counts.get("lists");
                let active = user.active;
                let created = format_date(&user.created_at);
                let usage = user.usage_total();
                let for_edit = AdminUserDto::from(&user);
                let for_delete = user;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{email}</TableCellLayout>
                        </TableCell>
                        <TableCell>{gender}</TableCell>
                        <TableCell><CountBadge count=lists /></TableCell>
                        <TableCell><ActiveBadge active=active /></TableCell>
                        <TableCell>{created}</TableCell>
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    attr:title="Editar"
                                    on_click=move |_| vm.show(for_edit.clone())
                                >
                                    {icon("edit")}
                                </Button>
                                <DeleteButton
                                    usage_total=usage
                                    on_delete=Callback::new(move |_| {
                                        delete_record(&for_delete, toast, on_saved)
                                    })
                                />
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <ListToolbar
                title=Resource::Users.list_name()
                count=Signal::derive(move || visible.with(|v| v.len()))
                search=search
                loading=list.loading
                search_placeholder="Nombre o correo..."
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            />

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Nombre" field="name" sort=sort min_width=160.0 />
                            <SortableHeaderCell label="Correo electrónico" field="email" sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Género" field="gender" sort=sort />
                            <SortableHeaderCell label="Listas" field="lists" sort=sort />
                            <SortableHeaderCell label="Estado" field="active" sort=sort />
                            <SortableHeaderCell label="Alta" field="created_at" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=7 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <UserForm vm=vm genders=genders on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::shared::UsageCounts;

    fn user(name: &str, day: u32) -> AdminUser {
        AdminUser {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            gender_id: None,
            gender: None,
            active: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn newest_last_by_creation_date() {
        let mut items = vec![user("Luis", 20), user("Ana", 2), user("Marta", 11)];
        SortState::new("created_at").apply(&mut items);
        let names: Vec<_> = items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Marta", "Luis"]);
    }
}
