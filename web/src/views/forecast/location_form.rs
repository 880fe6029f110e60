use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::forecast::{query::FormField, ForecastSession};

#[component]
fn FieldInput(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] min: Option<String>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<ForecastSession>>();

    view! {
        <label class="forecast-field">
            <span class="forecast-field-label">{label}</span>
            <input
                type=input_type
                class="forecast-field-input"
                placeholder=placeholder
                min=min
                step=(input_type == "number").then_some("any")
                prop:value=move || session.with(|s| s.form.field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| *s.form.field_mut(field) = value);
                }
            />
        </label>
    }
}

/// Geolocation button plus the manual latitude/longitude/date/time entry.
#[component]
pub fn LocationFormPanel<L, M>(today: String, on_locate: L, on_manual_query: M) -> impl IntoView
where
    L: Fn() + Copy + Send + Sync + 'static,
    M: Fn() + Copy + Send + Sync + 'static,
{
    view! {
        <div class="forecast-form">
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_locate()>
                "📍 Use my location"
            </Button>

            <div class="forecast-form-divider">"or enter a location manually"</div>

            <div class="forecast-form-grid">
                <FieldInput
                    field=FormField::Latitude
                    label="Latitude"
                    input_type="number"
                    placeholder="-12.046374"
                />
                <FieldInput
                    field=FormField::Longitude
                    label="Longitude"
                    input_type="number"
                    placeholder="-77.042793"
                />
                <FieldInput field=FormField::Date label="Date" input_type="date" min=today />
                <FieldInput field=FormField::Time label="Time" input_type="time" />
            </div>

            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_manual_query()>
                "Query forecast"
            </Button>
            <p class="forecast-form-hint">"Tip: click anywhere on the map to fill in the coordinates."</p>
        </div>
    }
}
