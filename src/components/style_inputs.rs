//! Leaf controls for schema-declared style values.
//!
//! Each control edits exactly one declared path. Values of an unexpected
//! type are shown as-is and only replaced when the user commits; nothing
//! here coerces what is already in the tree.

#[cfg(test)]
#[path = "style_inputs_test.rs"]
mod style_inputs_test;

use leptos::prelude::*;

use crate::app::StoreHandle;
use crate::schema::catalog::StyleControl;
use crate::schema::reconcile::StyleRow;
use crate::store::dispatch;
use crate::util::prop_paths::{display_scalar, number_scalar, overlay_with_value};

const SIZE_UNITS: &[&str] = &["px", "em", "rem", "%", "pt", "vh", "vw"];

const SWATCHES: &[&str] = &[
    "#ffffff", "#f5f7fa", "#d3dce6", "#1f2933", "#d94b4b", "#e8a13c", "#3c9d6e", "#3b82c4",
    "#8a63d2",
];

/// One schema row: set/unset checkbox, label, and the declared control.
#[component]
pub fn StyleRowView(row: StyleRow) -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let is_set = row.is_set;

    let on_toggle = {
        let path = row.declaration.path.clone();
        let overlay = row.overlay.clone();
        move |ev: leptos::ev::Event| {
            dispatch::toggle_style(store, &path, overlay.clone(), event_target_checked(&ev));
        }
    };

    let commit_value = Callback::new({
        let path = row.declaration.path.clone();
        move |value: serde_json::Value| {
            dispatch::change_option(store, overlay_with_value(&path, value));
        }
    });

    let control = match row.declaration.control {
        StyleControl::Number => {
            view! { <StyleNumberInput value=row.effective.clone() on_commit=commit_value/> }
                .into_any()
        }
        StyleControl::Size => {
            view! { <StyleSizeInput value=display_scalar(&row.effective) on_commit=commit_value/> }
                .into_any()
        }
        StyleControl::Select => view! {
            <StyleSelectInput
                value=display_scalar(&row.effective)
                options=row.declaration.options.clone()
                on_commit=commit_value
            />
        }
        .into_any(),
        StyleControl::Color => view! {
            <StyleSwatchesInput value=display_scalar(&row.effective) on_commit=commit_value/>
        }
        .into_any(),
    };

    view! {
        <div class="style-row" class:style-row--set=is_set>
            <input
                type="checkbox"
                class="style-row__toggle"
                prop:checked=is_set
                on:change=on_toggle
                title="Set or clear this property"
            />
            <span class="style-row__label">{row.declaration.label.clone()}</span>
            <div class="style-row__control">{control}</div>
        </div>
    }
}

/// Numeric field with stepper buttons. Text that fails to parse reverts to
/// the last committed value instead of writing junk into the tree.
#[component]
pub fn StyleNumberInput(
    value: serde_json::Value,
    on_commit: Callback<serde_json::Value>,
) -> impl IntoView {
    let shown = display_scalar(&value);
    let draft = RwSignal::new(shown.clone());

    let commit_text = {
        let shown = shown.clone();
        move || {
            let text = draft.get();
            if text == shown {
                return;
            }
            match parse_finite(&text) {
                Some(parsed) => on_commit.run(number_scalar(parsed)),
                None => draft.set(shown.clone()),
            }
        }
    };
    let commit_blur = commit_text.clone();

    let step = move |delta: f64| {
        let current = parse_finite(&draft.get()).unwrap_or(0.0);
        on_commit.run(number_scalar(current + delta));
    };

    view! {
        <div class="style-number">
            <button class="style-number__step" on:click=move |_| step(-1.0)>"-"</button>
            <input
                class="style-number__input"
                inputmode="numeric"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit_blur()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit_text();
                    }
                }
            />
            <button class="style-number__step" on:click=move |_| step(1.0)>"+"</button>
        </div>
    }
}

/// Length field: numeric magnitude plus a unit select, committed together
/// as one string like `"16px"`.
#[component]
pub fn StyleSizeInput(value: String, on_commit: Callback<serde_json::Value>) -> impl IntoView {
    let (magnitude, unit) = split_size(&value);
    let shown = join_size(magnitude, unit);
    let draft_number = RwSignal::new(format_magnitude(magnitude));
    let draft_unit = RwSignal::new(unit.to_owned());

    let commit = move || {
        if let Some(next) = size_commit(&shown, &draft_number.get(), &draft_unit.get()) {
            on_commit.run(serde_json::Value::String(next));
        }
    };
    let commit_blur = commit.clone();
    let commit_change = commit.clone();

    view! {
        <div class="style-size">
            <input
                class="style-size__input"
                inputmode="decimal"
                prop:value=move || draft_number.get()
                on:input=move |ev| draft_number.set(event_target_value(&ev))
                on:blur=move |_| commit_blur()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
            <select
                class="style-size__unit"
                prop:value=move || draft_unit.get()
                on:change=move |ev| {
                    draft_unit.set(event_target_value(&ev));
                    commit_change();
                }
            >
                {SIZE_UNITS
                    .iter()
                    .map(|&candidate| {
                        view! {
                            <option value=candidate selected=candidate == unit>
                                {candidate}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

/// Dropdown over the declared options.
#[component]
pub fn StyleSelectInput(
    value: String,
    options: Vec<String>,
    on_commit: Callback<serde_json::Value>,
) -> impl IntoView {
    let current = value.clone();
    view! {
        <select
            class="style-select"
            prop:value=value
            on:change=move |ev| on_commit.run(serde_json::Value::String(event_target_value(&ev)))
        >
            {options
                .into_iter()
                .map(|option| {
                    let selected = option == current;
                    let label = option.clone();
                    view! {
                        <option value=option selected=selected>
                            {label}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

/// Fixed swatch palette plus a free hex field.
#[component]
pub fn StyleSwatchesInput(value: String, on_commit: Callback<serde_json::Value>) -> impl IntoView {
    let normalized = normalize_hex_color(&value, "#ffffff");
    let draft = RwSignal::new(normalized.clone());

    let commit_hex = {
        let fallback = normalized.clone();
        move || {
            let next = normalize_hex_color(&draft.get(), &fallback);
            draft.set(next.clone());
            if next != fallback {
                on_commit.run(serde_json::Value::String(next));
            }
        }
    };
    let commit_blur = commit_hex.clone();

    view! {
        <div class="style-swatches">
            <div class="style-swatches__grid">
                {SWATCHES
                    .iter()
                    .map(|&swatch| {
                        let active = swatch == normalized.as_str();
                        view! {
                            <button
                                class="style-swatches__swatch"
                                class:style-swatches__swatch--active=active
                                style:background-color=swatch
                                title=swatch
                                on:click=move |_| {
                                    on_commit.run(serde_json::Value::String(swatch.to_owned()))
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <input
                class="style-swatches__hex"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit_blur()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit_hex();
                    }
                }
            />
        </div>
    }
}

fn split_size(raw: &str) -> (f64, &'static str) {
    let trimmed = raw.trim();
    let boundary = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(boundary);
    let magnitude = parse_finite(number).unwrap_or(0.0);
    let unit = SIZE_UNITS
        .iter()
        .copied()
        .find(|candidate| *candidate == suffix.trim())
        .unwrap_or("px");
    (magnitude, unit)
}

fn join_size(magnitude: f64, unit: &str) -> String {
    format!("{}{unit}", format_magnitude(magnitude))
}

/// Composes the drafts into the committed size string; `None` when the
/// result matches what the row already shows.
fn size_commit(shown: &str, number_text: &str, unit: &str) -> Option<String> {
    let next = join_size(parse_finite(number_text).unwrap_or(0.0), unit);
    (next != shown).then_some(next)
}

/// Parses user text as a number. Overflow and `NaN` count as parse
/// failures; JSON has no representation for them.
fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn format_magnitude(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn normalize_hex_color(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 4 && trimmed.starts_with('#') {
        let chars: Vec<char> = trimmed[1..].chars().collect();
        if chars.len() == 3 && chars.iter().all(|c| c.is_ascii_hexdigit()) {
            return format!(
                "#{}{}{}{}{}{}",
                chars[0], chars[0], chars[1], chars[1], chars[2], chars[2]
            )
            .to_lowercase();
        }
    }

    if trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit())
    {
        return trimmed.to_lowercase();
    }

    fallback.to_owned()
}
