//! Универсальный CRUD-паттерн для страниц-списков:
//! коллекция записей, поиск/фильтры, сортировка и контроллер формы.

pub mod actions;
pub mod collection;
pub mod filter;
pub mod form;
pub mod sort;

pub use actions::{delete_entity, toggle_status};
pub use collection::ResourceCollection;
pub use filter::{filter_list, FilterState, Searchable, ALL};
pub use form::{EntityForm, FieldChecker, FormController, FormMode};
pub use sort::{sort_list, SortState, Sortable};
