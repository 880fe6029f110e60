use leptos::prelude::*;

use crate::{
    components::{error::ErrorView, loading::LoadingView},
    forecast::{
        report::{ForecastReport, ResultPanel, TROUBLESHOOTING},
        ForecastSession,
    },
};

#[component]
fn ReportView(report: ForecastReport) -> impl IntoView {
    view! {
        <div class="forecast-report">
            <h3>"Weather Forecast"</h3>
            <p class="location">{report.place}</p>
            <p class="location">{report.coordinates}</p>
            <p class="location">{report.moment}</p>

            <div class="weather-info">
                <div class="weather-card">
                    <h4>"Model Forecast"</h4>
                    <p class="weather-card-headline">{report.model_prediction}</p>
                </div>
                <div class="weather-card">
                    <h4>"Historical Real Temperature"</h4>
                    <p>{report.real_temperature}</p>
                </div>
            </div>
        </div>
    }
}

/// The results region. Each state fully replaces the previous one.
#[component]
pub fn ForecastResults(session: RwSignal<ForecastSession>) -> impl IntoView {
    let panel = Memo::new(move |_| session.with(|s| s.panel().clone()));

    view! {
        <section class="forecast-results" class:hidden=move || panel.get() == ResultPanel::Idle>
            {move || match panel.get() {
                ResultPanel::Idle => view! { <></> }.into_any(),
                ResultPanel::Loading => view! { <LoadingView message=None /> }.into_any(),
                ResultPanel::Success(report) => view! { <ReportView report=report /> }.into_any(),
                ResultPanel::Error(message) => view! {
                    <ErrorView message=Some(message) hints=TROUBLESHOOTING.to_vec() />
                }
                .into_any(),
            }}
        </section>
    }
}
