use thiserror::Error;

#[cfg(feature = "hydrate")]
use shared_types::LatLong;

/// Codes from the W3C `GeolocationPositionError` interface.
pub const PERMISSION_DENIED: u16 = 1;
pub const POSITION_UNAVAILABLE: u16 = 2;
pub const TIMEOUT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationFailure {
    #[error("Location permission denied.")]
    PermissionDenied,
    #[error("Location information unavailable.")]
    PositionUnavailable,
    #[error("Location request timed out.")]
    Timeout,
    #[error("Unknown error.")]
    Unknown,
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
}

impl GeolocationFailure {
    pub fn from_code(code: u16) -> Self {
        match code {
            PERMISSION_DENIED => Self::PermissionDenied,
            POSITION_UNAVAILABLE => Self::PositionUnavailable,
            TIMEOUT => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// Text for the blocking alert shown to the user.
    pub fn alert_message(&self) -> String {
        match self {
            Self::Unsupported => self.to_string(),
            _ => format!("Error getting location: {self}"),
        }
    }
}

/// Resolves the `navigator.geolocation` lookup. Browsers without the API
/// hand back `undefined` instead of an error, so `is_missing` gets a say too.
pub fn geolocation_handle<T, E>(
    lookup: Result<T, E>,
    is_missing: impl FnOnce(&T) -> bool,
) -> Result<T, GeolocationFailure> {
    match lookup {
        Ok(handle) if !is_missing(&handle) => Ok(handle),
        _ => Err(GeolocationFailure::Unsupported),
    }
}

/// Asks the browser for the device position once. Exactly one of the two
/// callbacks runs.
#[cfg(feature = "hydrate")]
pub fn request_current_position<S, F>(on_success: S, on_failure: F)
where
    S: FnOnce(LatLong) + 'static,
    F: Fn(GeolocationFailure) + Copy + 'static,
{
    use wasm_bindgen::{closure::Closure, JsCast};

    let lookup = web_sys::window()
        .ok_or(())
        .and_then(|w| w.navigator().geolocation().map_err(|_| ()));
    let geolocation = match geolocation_handle(lookup, |g| g.is_undefined()) {
        Ok(geolocation) => geolocation,
        Err(failure) => {
            on_failure(failure);
            return;
        }
    };

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        on_success(LatLong::new(coords.latitude(), coords.longitude()));
    });
    let failure = Closure::once_into_js(move |error: web_sys::PositionError| {
        leptos::logging::error!("geolocation failed with code {}", error.code());
        on_failure(GeolocationFailure::from_code(error.code()));
    });

    if let Err(e) = geolocation
        .get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref()))
    {
        leptos::logging::error!("geolocation request rejected: {:?}", e);
        on_failure(GeolocationFailure::Unknown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_distinct_messages() {
        assert_eq!(
            GeolocationFailure::from_code(1).alert_message(),
            "Error getting location: Location permission denied."
        );
        assert_eq!(
            GeolocationFailure::from_code(2).alert_message(),
            "Error getting location: Location information unavailable."
        );
        assert_eq!(
            GeolocationFailure::from_code(3).alert_message(),
            "Error getting location: Location request timed out."
        );
        assert_eq!(
            GeolocationFailure::from_code(42).alert_message(),
            "Error getting location: Unknown error."
        );
    }

    #[test]
    fn missing_api_is_reported_as_unsupported() {
        assert_eq!(
            geolocation_handle(Ok::<_, ()>("undefined"), |raw| *raw == "undefined"),
            Err(GeolocationFailure::Unsupported)
        );
        assert_eq!(
            geolocation_handle(Err::<&str, _>(()), |_| false),
            Err(GeolocationFailure::Unsupported)
        );
        assert_eq!(
            geolocation_handle(Ok::<_, ()>("geolocation"), |raw| *raw == "undefined"),
            Ok("geolocation")
        );
    }

    #[test]
    fn unsupported_browser_message_stands_alone() {
        assert_eq!(
            GeolocationFailure::Unsupported.alert_message(),
            "Geolocation is not supported by this browser."
        );
    }
}
