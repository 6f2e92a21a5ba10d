//! State and commands shared by every CRUD page.
//!
//! - `ListState`: fetched records plus loading flag, re-fetched after each mutation
//! - `DetailState`: one record shown on a detail tab
//! - `FormViewModel`: create / edit dialog bound to a DTO
//! - `delete_record` / `delete_record_in`: guarded, confirmed delete

use super::components::ui::SelectOption;
use super::confirm::confirm;
use super::http;
use super::toast::{use_toast, ToastService};
use contracts::domain::common::{AdminRecord, EditForm};
use contracts::shared::{ListQuery, Resource};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// Records of one list page.
pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    resource: Resource,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(resource: Resource) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            resource,
            toast: use_toast(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Fetch the collection. On failure the list is emptied and a toast shown.
    pub fn load(&self, query: ListQuery) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match http::get_list::<T>(this.resource, &query).await {
                Ok(items) => {
                    log::debug!("{}: {} records", this.resource.segment(), items.len());
                    this.items.set(items);
                }
                Err(e) => {
                    this.items.set(Vec::new());
                    this.toast.api_error(&e);
                }
            }
            this.loading.set(false);
        });
    }
}

/// Select entries for every record of `resource`, fetched once.
pub fn use_options<T>(resource: Resource) -> Signal<Vec<SelectOption>>
where
    T: AdminRecord + DeserializeOwned + Send + Sync + 'static,
{
    let state = ListState::<T>::new(resource);
    Effect::new(move |_| state.load(ListQuery::new()));
    Signal::derive(move || state.items.with(|items| SelectOption::from_records(items)))
}

/// Record of a detail tab.
pub struct DetailState<T: Send + Sync + 'static> {
    pub record: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    /// Set when the server answered 404; the page then closes its tab.
    pub missing: RwSignal<bool>,
    resource: Resource,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for DetailState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DetailState<T> {}

impl<T> DetailState<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(resource: Resource) -> Self {
        Self {
            record: RwSignal::new(None),
            loading: RwSignal::new(false),
            missing: RwSignal::new(false),
            resource,
            toast: use_toast(),
        }
    }

    pub fn load(&self, id: i64) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match http::get_one::<T>(this.resource, id).await {
                Ok(record) => this.record.set(Some(record)),
                Err(e) if e.is_not_found() => {
                    log::warn!("{} {} not found", this.resource.segment(), id);
                    this.toast.error(format!(
                        "{} #{} ya no existe",
                        this.resource.element_name(),
                        id
                    ));
                    this.missing.set(true);
                }
                Err(e) => {
                    this.toast.api_error(&e);
                }
            }
            this.loading.set(false);
        });
    }
}

/// Create / edit dialog state for one DTO type.
pub struct FormViewModel<D: Send + Sync + 'static> {
    pub form: RwSignal<D>,
    pub open: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    resource: Resource,
    toast: ToastService,
}

impl<D: Send + Sync + 'static> Clone for FormViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormViewModel<D> {}

impl<D> FormViewModel<D>
where
    D: EditForm + Default + Send + Sync + 'static,
{
    pub fn new(resource: Resource) -> Self {
        Self {
            form: RwSignal::new(D::default()),
            open: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            resource,
            toast: use_toast(),
        }
    }

    /// Open the dialog with the given initial values.
    pub fn show(&self, dto: D) {
        self.form.set(dto);
        self.error.set(None);
        self.saving.set(false);
        self.open.set(true);
    }

    pub fn show_new(&self) {
        self.show(D::default());
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Reactive read of one form field.
    pub fn field<V>(&self, get: fn(&D) -> V) -> Signal<V>
    where
        V: Send + Sync + 'static,
    {
        let form = self.form;
        Signal::derive(move || form.with(get))
    }

    /// Input handler writing one form field.
    pub fn setter<V: 'static>(&self, set: fn(&mut D, V)) -> Callback<V> {
        let form = self.form;
        Callback::new(move |value: V| form.update(|f| set(f, value)))
    }

    pub fn is_edit(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    /// First failing validation rule, for the hint under the form.
    pub fn validation_message(&self) -> Option<String> {
        self.form.with(|f| f.validate().err().map(|e| e.to_string()))
    }

    pub fn can_submit(&self) -> bool {
        !self.saving.get() && self.form.with(|f| f.is_valid())
    }

    pub fn title(&self, element_name: &str) -> String {
        let element = element_name.to_lowercase();
        if self.is_edit() {
            format!("Editar {}", element)
        } else {
            format!("Crear {}", element)
        }
    }

    /// Validate, send and report. `on_saved` runs only after the server accepted.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match http::save(this.resource, dto.record_id(), &dto).await {
                Ok(ack) => {
                    let fallback = if dto.is_edit() {
                        "Cambios guardados"
                    } else {
                        "Registro creado"
                    };
                    this.toast
                        .success(ack.message.unwrap_or_else(|| fallback.to_string()));
                    this.saving.set(false);
                    this.open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    this.toast.api_error(&e);
                    this.error.set(Some(e.to_string()));
                    this.saving.set(false);
                }
            }
        });
    }
}

/// Delete `record` from the resource its type belongs to.
pub fn delete_record<T: AdminRecord>(record: &T, toast: ToastService, on_deleted: Callback<()>) {
    match T::resource() {
        Some(resource) => delete_record_in(resource, record, toast, on_deleted),
        None => log::error!(
            "\"{}\" has no fixed resource, delete it with delete_record_in",
            record.display_name()
        ),
    }
}

/// Delete `record` after the usage guard and an explicit confirmation.
///
/// Takes the resource explicitly for lookup values, which share one type.
pub fn delete_record_in<T: AdminRecord>(
    resource: Resource,
    record: &T,
    toast: ToastService,
    on_deleted: Callback<()>,
) {
    if !record.can_delete() {
        toast.error(format!(
            "\"{}\" está en uso ({} registros relacionados)",
            record.display_name(),
            record.usage_total()
        ));
        return;
    }
    if !confirm(&record.delete_confirmation()) {
        return;
    }
    let id = record.id();
    let name = record.display_name();
    spawn_local(async move {
        match http::delete(resource, id).await {
            Ok(ack) => {
                toast.success(
                    ack.message
                        .unwrap_or_else(|| format!("\"{}\" eliminado", name)),
                );
                on_deleted.run(());
            }
            Err(e) => {
                toast.api_error(&e);
            }
        }
    });
}
