use shared_types::LatLong;

pub const DEFAULT_CENTER: LatLong = LatLong {
    lat: -9.93,
    long: -76.24,
};
pub const DEFAULT_ZOOM: f64 = 5.0;
/// Zoom applied whenever a location is selected.
pub const FOCUS_ZOOM: f64 = 13.0;

pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const CURRENT_LOCATION_LABEL: &str = "Your current location";
pub const SELECTED_LOCATION_LABEL: &str = "Selected location";

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLong,
    pub label: String,
    /// Bumped on every placement so picking the same spot again still
    /// reopens the popup.
    pub placement: u64,
}

/// Where the map is looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLong,
    pub zoom: f64,
}

/// Map viewport plus the one optional marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    view: MapView,
    marker: Option<MapMarker>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            view: MapView {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            marker: None,
        }
    }
}

impl MapState {
    pub fn view(&self) -> MapView {
        self.view
    }

    pub fn marker(&self) -> Option<&MapMarker> {
        self.marker.as_ref()
    }

    /// Re-centers on `position` and replaces any existing marker.
    pub fn set_location(&mut self, position: LatLong, label: impl Into<String>) {
        self.view = MapView {
            center: position,
            zoom: FOCUS_ZOOM,
        };
        let placement = self.marker.as_ref().map_or(1, |m| m.placement + 1);
        self.marker = Some(MapMarker {
            position,
            label: label.into(),
            placement,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_default_view_without_marker() {
        let state = MapState::default();
        assert_eq!(state.view().center, DEFAULT_CENTER);
        assert_eq!(state.view().zoom, DEFAULT_ZOOM);
        assert!(state.marker().is_none());
    }

    #[test]
    fn set_location_replaces_marker_and_zooms_in() {
        let mut state = MapState::default();
        state.set_location(LatLong::new(1.0, 2.0), "first");
        state.set_location(LatLong::new(3.0, 4.0), SELECTED_LOCATION_LABEL);

        let marker = state.marker().unwrap();
        assert_eq!(marker.position, LatLong::new(3.0, 4.0));
        assert_eq!(marker.label, SELECTED_LOCATION_LABEL);
        assert_eq!(state.view().center, LatLong::new(3.0, 4.0));
        assert_eq!(state.view().zoom, FOCUS_ZOOM);
    }

    #[test]
    fn reselecting_the_same_spot_is_a_new_placement() {
        let mut state = MapState::default();
        state.set_location(LatLong::new(1.0, 2.0), SELECTED_LOCATION_LABEL);
        let first = state.marker().cloned().unwrap();
        state.set_location(LatLong::new(1.0, 2.0), SELECTED_LOCATION_LABEL);
        let second = state.marker().cloned().unwrap();

        assert_eq!(first.position, second.position);
        assert_ne!(first, second);
        assert_eq!(second.placement, first.placement + 1);
    }
}
