//! Category hierarchy page.
//!
//! The flat list from the API is built into a forest on every change; search
//! keeps a root when any descendant matches and expands the path down to each
//! hit. Rows are produced by walking the forest, indented by depth.

use super::form::CategoryForm;
use crate::shared::components::table::StateRow;
use crate::shared::components::ui::{ActiveBadge, CountBadge};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TREE;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::{
    build_tree, expanded_ids, orphans, search_tree, Category, CategoryDto, CategoryNode,
};
use contracts::domain::common::AdminRecord;
use contracts::shared::{fold_case, HasUsage, ListQuery, Resource};
use leptos::ev;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Split `text` into plain and matching parts for highlighting.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle = fold_case(query.trim());
    if needle.is_empty() {
        return vec![(text, false)];
    }
    // Byte range in `text` of the char each folded byte came from.
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
        }
    }

    let mut parts = Vec::new();
    let mut last = 0;
    for (at, hit) in folded.match_indices(needle.as_str()) {
        let start = origin[at].0;
        let end = origin[at + hit.len() - 1].1;
        if start < last {
            continue;
        }
        if start > last {
            parts.push((&text[last..start], false));
        }
        parts.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        parts.push((&text[last..], false));
    }
    parts
}

fn highlight(text: &str, query: &str) -> AnyView {
    split_matches(text, query)
        .into_iter()
        .map(|(part, hit)| {
            let part = part.to_string();
            if hit {
                view! { <mark class="tree__match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Open and closed nodes chosen by hand, applied over the search expansion.
#[derive(Clone, Debug, Default, PartialEq)]
struct ExpandOverrides {
    opened: HashSet<i64>,
    collapsed: HashSet<i64>,
}

impl ExpandOverrides {
    fn resolve(&self, auto: HashSet<i64>) -> HashSet<i64> {
        auto.into_iter()
            .filter(|id| !self.collapsed.contains(id))
            .chain(self.opened.iter().copied())
            .collect()
    }

    fn toggle(&mut self, id: i64, is_open: bool) {
        if is_open {
            self.opened.remove(&id);
            self.collapsed.insert(id);
        } else {
            self.collapsed.remove(&id);
            self.opened.insert(id);
        }
    }

    fn expand_all(&mut self, ids: HashSet<i64>) {
        self.opened = ids;
        self.collapsed.clear();
    }

    fn collapse_all(&mut self, ids: HashSet<i64>) {
        self.opened.clear();
        self.collapsed = ids;
    }
}

#[derive(Clone, Copy)]
struct RowActions {
    toggle: Callback<(i64, bool)>,
    add_child: Callback<i64>,
    edit: Callback<Category>,
    delete: Callback<Category>,
}

fn render_rows(
    node: &CategoryNode,
    level: usize,
    expanded: &HashSet<i64>,
    query: &str,
    actions: RowActions,
) -> Vec<AnyView> {
    let mut rows = Vec::new();
    let category = node.category.clone();
    let id = category.id;
    let is_open = expanded.contains(&id);

    let toggle = if node.has_children() {
        view! {
            <button class="tree-toggle" on:click=move |_| actions.toggle.run((id, is_open))>
                {if is_open { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="tree-toggle tree-toggle--leaf"></span> }.into_any()
    };
    let folder_icon = if is_open { icon("folder-open") } else { icon("folder") };

    let description = category.description.clone().unwrap_or_default();
    let name_view = highlight(&category.name, query);
    let description_view = highlight(&description, query);
    let children_count = category.children_count();
    let types_count = category.product_types_count();
    let active = category.active;
    let usage = category.usage_total();
    let for_dblclick = category.clone();
    let for_edit = category.clone();
    let for_delete = category;

    rows.push(
        view! {
            <TableRow>
                <TableCell>
                    <div class="tree__name" style=format!("padding-left: {}px;", level * 16)>
                        {toggle}
                        <span class="tree__icon">{folder_icon}</span>
                        <span class="tree-label" on:dblclick=move |_| actions.edit.run(for_dblclick.clone())>
                            {name_view}
                        </span>
                    </div>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{description_view}</TableCellLayout>
                </TableCell>
                <TableCell><CountBadge count=children_count /></TableCell>
                <TableCell><CountBadge count=types_count /></TableCell>
                <TableCell><ActiveBadge active=active inactive_label="Inactiva" /></TableCell>
                <TableCell>
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            attr:title="Agregar subcategoría"
                            on_click=move |e: ev::MouseEvent| {
                                e.stop_propagation();
                                actions.add_child.run(id);
                            }
                        >
                            {icon("plus")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            attr:title="Editar"
                            on_click=move |_| actions.edit.run(for_edit.clone())
                        >
                            {icon("edit")}
                        </Button>
                        <DeleteButton
                            usage_total=usage
                            on_delete=Callback::new(move |_| actions.delete.run(for_delete.clone()))
                        />
                    </Flex>
                </TableCell>
            </TableRow>
        }
        .into_any(),
    );

    if is_open {
        for child in &node.children {
            rows.extend(render_rows(child, level + 1, expanded, query, actions));
        }
    }
    rows
}

#[component]
pub fn CategoryTree() -> impl IntoView {
    let toast = use_toast();
    let list = ListState::<Category>::new(Resource::Categories);
    let vm = FormViewModel::<CategoryDto>::new(Resource::Categories);
    let search = RwSignal::new(String::new());
    let overrides = RwSignal::new(ExpandOverrides::default());

    let reload = move || list.load(ListQuery::new());
    Effect::new(move |_| reload());
    let on_saved = Callback::new(move |_: ()| reload());

    let forest = Signal::derive(move || list.items.with(|items| build_tree(items)));
    let all_ids = move || -> HashSet<i64> {
        list.items.with(|items| items.iter().map(|c| c.id()).collect())
    };

    // A new search starts from its own expansion.
    Effect::new(move |_| {
        search.track();
        overrides.set(ExpandOverrides::default());
    });

    Effect::new(move |_| {
        list.items.with(|items| {
            for orphan in orphans(items) {
                log::warn!(
                    "category {} '{}' references missing parent {:?}, not shown",
                    orphan.id,
                    orphan.name,
                    orphan.parent_id
                );
            }
        })
    });

    let actions = RowActions {
        toggle: Callback::new(move |(id, is_open): (i64, bool)| {
            overrides.update(|o| o.toggle(id, is_open))
        }),
        add_child: Callback::new(move |parent_id: i64| vm.show(CategoryDto::child_of(parent_id))),
        edit: Callback::new(move |c: Category| vm.show(CategoryDto::from(&c))),
        delete: Callback::new(move |c: Category| {
            delete_record(&c, toast, on_saved)
        }),
    };

    let rows = move || {
        let query = search.get();
        let chosen = overrides.get();
        forest.with(|forest| {
            let expanded = chosen.resolve(expanded_ids(forest, &query));
            search_tree(forest, &query)
                .into_iter()
                .flat_map(|root| render_rows(root, 0, &expanded, &query, actions))
                .collect::<Vec<_>>()
        })
    };

    let expand_all = move |_: ev::MouseEvent| {
        let ids = all_ids();
        overrides.update(|o| o.expand_all(ids));
    };
    let collapse_all = move |_: ev::MouseEvent| {
        let ids = all_ids();
        overrides.update(|o| o.collapse_all(ids));
    };

    view! {
        <PageFrame page_id="a001_category--tree" category=PAGE_CAT_TREE>
            <ListToolbar
                title=Resource::Categories.list_name()
                count=Signal::derive(move || list.items.with(|i| i.len()))
                search=search
                loading=list.loading
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            >
                <Button appearance=ButtonAppearance::Subtle on_click=expand_all>
                    "Expandir todo"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=collapse_all>
                    "Contraer"
                </Button>
            </ListToolbar>

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Nombre"</TableHeaderCell>
                            <TableHeaderCell>"Descripción"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 110px;">"Subcategorías"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 110px;">"Tipos"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 100px;">"Estado"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 140px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                view! { <StateRow colspan=6 loading=list.loading /> }.into_any()
                            } else {
                                rows.into_view().into_any()
                            }
                        }}
                    </TableBody>
                </Table>
            </div>

            <CategoryForm vm=vm forest=forest on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::{split_matches, ExpandOverrides};
    use std::collections::HashSet;
    use contracts::shared::matches_query;

    #[test]
    fn splits_around_matches() {
        assert_eq!(
            split_matches("Aguas minerales", "agua"),
            vec![("Agua", true), ("s minerales", false)]
        );
        assert_eq!(
            split_matches("Lácteos y más lácteos", "LÁCTEOS"),
            vec![("Lácteos", true), (" y más ", false), ("lácteos", true)]
        );
    }

    #[test]
    fn highlights_multi_char_lowercase() {
        assert_eq!(
            split_matches("İzmir", "İz"),
            vec![("İz", true), ("mir", false)]
        );
        assert_eq!(
            split_matches("Café İSTANBUL", "istanbul"),
            vec![("Café İSTANBUL", false)]
        );
        assert!(!matches_query(&["Café İSTANBUL"], "istanbul"));
    }

    #[test]
    fn blank_query_keeps_text() {
        assert_eq!(split_matches("Bebidas", " "), vec![("Bebidas", false)]);
        assert_eq!(split_matches("Bebidas", "zz"), vec![("Bebidas", false)]);
    }

    fn ids(list: &[i64]) -> HashSet<i64> {
        list.iter().copied().collect()
    }

    #[test]
    fn toggle_closes_a_node_the_search_opened() {
        let mut overrides = ExpandOverrides::default();
        overrides.toggle(2, true);
        assert_eq!(overrides.resolve(ids(&[1, 2])), ids(&[1]));

        overrides.toggle(2, false);
        assert_eq!(overrides.resolve(ids(&[1, 2])), ids(&[1, 2]));
    }

    #[test]
    fn toggle_opens_a_node_outside_the_search() {
        let mut overrides = ExpandOverrides::default();
        overrides.toggle(7, false);
        assert_eq!(overrides.resolve(ids(&[1])), ids(&[1, 7]));
    }

    #[test]
    fn collapse_all_wins_over_search() {
        let mut overrides = ExpandOverrides::default();
        overrides.expand_all(ids(&[1, 2, 3]));
        assert_eq!(overrides.resolve(HashSet::new()), ids(&[1, 2, 3]));

        overrides.collapse_all(ids(&[1, 2, 3]));
        assert_eq!(overrides.resolve(ids(&[1, 2])), HashSet::new());
    }
}
