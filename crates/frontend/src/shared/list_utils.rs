/// Утилиты страниц-списков: поиск, фильтры, сортируемые заголовки, подтверждение
use contracts::domain::common::Choice;
use contracts::shared::list::{FilterState, SortState, ALL};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Поле поиска: фильтр применяется на каждый ввод
#[component]
pub fn SearchInput(
    filter: RwSignal<FilterState>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Введенный текст как есть; в FilterState хранится в нижнем регистре
    let input_value = RwSignal::new(String::new());

    // Сброс фильтров снаружи очищает и поле
    Effect::new(move |_| {
        if filter.with(|f| f.search_term.is_empty()) {
            input_value.set(String::new());
        }
    });

    let clear = move |_| {
        input_value.set(String::new());
        filter.update(|f| f.set_search_term(""));
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    input_value.set(value.clone());
                    filter.update(|f| f.set_search_term(value));
                }
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

/// Варианты выпадающего фильтра: (значение, подпись)
pub type FilterOptions = Vec<(String, String)>;

/// Все значения перечисления; значение фильтра совпадает с подписью
pub fn choice_options<C: Choice>() -> FilterOptions {
    C::all()
        .iter()
        .map(|c| (c.label().to_string(), c.label().to_string()))
        .collect()
}

/// Категориальный фильтр с вариантом "All".
///
/// Варианты реактивные: список перестраивается при изменении коллекции.
#[component]
pub fn FilterSelect(
    label: &'static str,
    field: &'static str,
    #[prop(into)]
    options: Signal<FilterOptions>,
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    let is_selected = move |value: &str| filter.with(|f| f.selected(field) == value);

    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                prop:value=move || filter.with(|f| f.selected(field).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.set_filter(field, value));
                }
            >
                <option value=ALL selected=move || is_selected(ALL)>{ALL}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, label)| {
                            let current = value.clone();
                            view! {
                                <option value=value selected=move || is_selected(&current)>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Кнопка сброса поиска и фильтров
#[component]
pub fn ResetFiltersButton(filter: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| filter.update(FilterState::clear)
            disabled=Signal::derive(move || !filter.with(FilterState::is_active))
        >
            {icon("refresh")}
            " Reset"
        </Button>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        if sort.ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Заголовок столбца с переключением сортировки
#[component]
pub fn SortHeader(label: &'static str, field: &'static str, sort: RwSignal<SortState>) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor:pointer;"
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, field))>
                    {move || sort.with(|s| get_sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Строка-заглушка для пустого результата ("No users found.")
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! { <p class="table__empty">{message}</p> }
}

/// Подтверждение браузера перед удалением; без `window` - отказ
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
