use crate::{
    components::loading::LoadingView,
    forecast::{
        map_state::{MapMarker, MapView, TILE_ATTRIBUTION, TILE_URL},
        ForecastSession,
    },
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos_leaflet::leaflet::{
    LatLng, Map, MouseEvent, Point, Popup as LeafletPopup, PopupOptions,
};
#[cfg(not(feature = "ssr"))]
use shared_types::LatLong;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Lifts an opened popup clear of the pin's head.
#[cfg(not(feature = "ssr"))]
const POPUP_OFFSET: (f64, f64) = (0.0, -36.0);

const PIN_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='%230ea5e9' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E";

#[component]
fn LocationPin(marker: MapMarker) -> impl IntoView {
    view! {
        <Marker
            position=Position::new(marker.position.lat, marker.position.long)
            draggable=false
            icon_url=Some(PIN_ICON.to_string())
            icon_size=Some((28.0, 42.0))
            icon_anchor=Some((14.0, 42.0))
        >
            <Popup>
                <strong>{marker.label}</strong>
            </Popup>
        </Marker>
    }
}

/// Leaflet map bound to the session: follows its viewport, draws its one
/// marker, and reports clicks back as a map selection.
#[component]
pub fn ForecastMap(session: RwSignal<ForecastSession>) -> impl IntoView {
    let viewport: Memo<MapView> = Memo::new(move |_| session.with(|s| s.map().view()));
    let marker: Memo<Option<MapMarker>> =
        Memo::new(move |_| session.with(|s| s.map().marker().cloned()));

    #[cfg(not(feature = "ssr"))]
    let map = JsRwSignal::new_local(None::<Map>);

    // Track if map is ready to render (avoid hydration issues)
    let map_ready = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    Closure::once_into_js(move || {
                        map_ready.set(true);
                    })
                    .as_ref()
                    .unchecked_ref(),
                );
            }
        });

        Effect::new(move |_| {
            let MapView { center, zoom } = viewport.get();
            if let Some(map_instance) = map.get() {
                map_instance.set_view(&Position::new(center.lat, center.long).as_lat_lng(), zoom);
            }
        });

        // Every new placement opens its label, like a fresh pin drop.
        Effect::new(move |_| {
            let (Some(map_instance), Some(placed)) = (map.get(), marker.get()) else {
                return;
            };
            let options = PopupOptions::new();
            options.set_offset(Point::new(POPUP_OFFSET.0, POPUP_OFFSET.1));
            let popup = LeafletPopup::new(&options, None);
            popup.set_lat_lng(&LatLng::new(placed.position.lat, placed.position.long));
            popup.set_content(&JsValue::from_str(&placed.label));
            popup.open_on(&map_instance);
        });

        Effect::new(move |_| {
            let Some(map_instance) = map.get() else {
                return;
            };

            let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
                let lat_lng = event.lat_lng();
                leptos::logging::log!("map clicked at {}, {}", lat_lng.lat(), lat_lng.lng());
                session.update(|s| s.select_on_map(LatLong::new(lat_lng.lat(), lat_lng.lng())));
            }) as Box<dyn FnMut(MouseEvent)>);

            map_instance.on("click", on_click.as_ref().unchecked_ref());

            // Keep closure alive
            on_click.forget();
        });
    }

    view! {
        <div class="forecast-map">
            {move || {
                #[cfg(not(feature = "ssr"))]
                {
                    if map_ready.get() {
                        let MapView { center, zoom } = viewport.get_untracked();
                        view! {
                            <MapContainer
                                class="forecast-map-container"
                                center=Position::new(center.lat, center.long)
                                zoom=zoom
                                set_view=true
                                map=map.write_only()
                            >
                                <TileLayer url=TILE_URL attribution=TILE_ATTRIBUTION />
                                {move || marker.get().map(|marker| view! { <LocationPin marker=marker /> })}
                            </MapContainer>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="forecast-map-loading">
                                <LoadingView message=Some("Initializing map...".to_string()) />
                            </div>
                        }
                        .into_any()
                    }
                }

                #[cfg(feature = "ssr")]
                {
                    let _ = (map_ready, marker, viewport);
                    view! {
                        <div class="forecast-map-loading">
                            <LoadingView message=Some("Initializing map...".to_string()) />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
