use chrono::Local;
use leptos::{logging::log, prelude::*, task::spawn_local};

use crate::{
    forecast::{query::DATE_FORMAT, Dispatch, ForecastSession, HttpForecastApi},
    views::forecast::{
        forecast_map::ForecastMap, forecast_results::ForecastResults,
        location_form::LocationFormPanel,
    },
};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ForecastPage() -> impl IntoView {
    let today = Local::now().date_naive();
    let session = RwSignal::new(ForecastSession::new(today));
    provide_context(session);

    let run = move |dispatch: Dispatch| {
        log!(
            "forecast request #{} for {:?}",
            dispatch.ticket,
            dispatch.query.to_request()
        );
        spawn_local(async move {
            let api = HttpForecastApi::same_origin();
            let outcome = dispatch.send(&api).await;
            if let Err(e) = &outcome {
                leptos::logging::error!("forecast request #{} failed: {}", dispatch.ticket, e);
            }
            let applied = session
                .try_update(|s| s.complete(&dispatch, outcome))
                .unwrap_or(false);
            if !applied {
                log!("dropping reply to superseded request #{}", dispatch.ticket);
            }
        });
    };

    let on_manual_query = move || match session.try_update(|s| s.submit_manual()) {
        Some(Ok(dispatch)) => run(dispatch),
        Some(Err(e)) => {
            leptos::logging::warn!("manual query rejected: {}", e);
            alert(&e.to_string());
        }
        None => {}
    };

    let on_locate = move || {
        let Some(ticket) = session.try_update(|s| s.await_position()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        crate::forecast::geolocation::request_current_position(
            move |location| {
                log!("device position {}, {}", location.lat, location.long);
                let now = Local::now().naive_local();
                if let Some(dispatch) = session.try_update(|s| s.located(location, now)) {
                    run(dispatch);
                }
            },
            move |failure| {
                session.update(|s| {
                    s.position_failed(ticket);
                });
                alert(&failure.alert_message());
            },
        );
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    view! {
        <div class="forecast-page">
            <header class="forecast-header">
                <h1>"Weather Forecast"</h1>
                <p>"Pick a place on the map or use your location to see the expected weather."</p>
            </header>

            <div class="forecast-content">
                <aside class="forecast-sidebar">
                    <LocationFormPanel
                        today=today.format(DATE_FORMAT).to_string()
                        on_locate=on_locate
                        on_manual_query=on_manual_query
                    />
                    <ForecastResults session=session />
                </aside>
                <ForecastMap session=session />
            </div>
        </div>
    }
}
