//! Поля модальных форм, привязанные к `FormController`.

use contracts::domain::common::Choice;
use contracts::shared::list::{EntityForm, FormController};
use leptos::prelude::*;

/// Значение текстового поля буфера формы
pub fn form_text<F: EntityForm>(form: RwSignal<FormController<F>>, get: fn(&F) -> String) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f.buffer())))
}

/// Значение поля-перечисления буфера формы
pub fn form_choice<F: EntityForm, C: Choice>(form: RwSignal<FormController<F>>, get: fn(&F) -> C) -> Signal<C> {
    Signal::derive(move || form.with(|f| get(f.buffer())))
}

/// Ошибка проверки для поля (после неудачного сохранения)
pub fn form_error<F: EntityForm>(form: RwSignal<FormController<F>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || form.with(|f| f.errors().for_field(field).map(str::to_string)))
}

/// Запись значения в буфер формы
pub fn form_setter<F: EntityForm, V: 'static>(form: RwSignal<FormController<F>>, set: fn(&mut F, V)) -> Callback<V> {
    Callback::new(move |value: V| {
        form.update(|f| {
            f.edit(|buffer| set(buffer, value));
        });
    })
}

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <div class="form-group__error">{m}</div> })
}

#[component]
pub fn TextField(
    label: &'static str,
    id: &'static str,
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:form-group--invalid=move || error.with(Option::is_some)>
            <label for=id>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError message=error />
        </div>
    }
}

#[component]
pub fn ChoiceField<C: Choice>(
    label: &'static str,
    id: &'static str,
    #[prop(into)]
    value: Signal<C>,
    on_change: Callback<C>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || value.get().label()
                on:change=move |ev| {
                    if let Some(choice) = C::parse(&event_target_value(&ev)) {
                        on_change.run(choice);
                    }
                }
            >
                {C::all()
                    .iter()
                    .map(|&choice| {
                        let label = choice.label();
                        view! { <option value=label selected=move || value.get() == choice>{label}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Выбор ссылки на другую запись: (значение, подпись)
#[component]
pub fn OptionField(
    label: &'static str,
    id: &'static str,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Подпись пустого варианта (например, "None")
    empty_label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into, optional)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:form-group--invalid=move || error.with(Option::is_some)>
            <label for=id>{label}</label>
            <select id=id on:change=move |ev| on_change.run(event_target_value(&ev))>
                <option value="" selected=move || value.with(String::is_empty)>{empty_label}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let current = option_value.clone();
                            view! {
                                <option value=option_value selected=move || value.with(|v| *v == current)>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError message=error />
        </div>
    }
}
