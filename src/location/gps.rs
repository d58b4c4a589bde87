use crate::platform::Geolocation;

/// One satellite position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Horizontal accuracy in metres.
    pub accuracy: f64,
}

/// Caches the most recent GPS fix for the overlay.
#[derive(Debug, Clone, Default)]
pub struct GpsService {
    last_fix: Option<GpsFix>,
}

impl GpsService {
    /// Service with no fix yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the platform for a fresh fix. Failures keep the previous fix.
    pub fn request(&mut self, geolocation: &mut dyn Geolocation) {
        match geolocation.current_position() {
            Ok(fix) => self.last_fix = Some(fix),
            Err(e) => log::warn!("GPS error: {e}"),
        }
    }

    /// Most recent fix.
    #[must_use]
    pub fn last_fix(&self) -> Option<GpsFix> {
        self.last_fix
    }

    /// Overlay text: the fix, or `"No Data"`.
    #[must_use]
    pub fn info(&self) -> String {
        self.last_fix.map_or_else(
            || "No Data".to_owned(),
            |fix| {
                format!(
                    "Lat: {:.6}\nLng: {:.6}\nAcc: {:.1} m",
                    fix.lat, fix.lng, fix.accuracy
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fakes::FakeGeolocation;

    #[test]
    fn no_data_before_first_fix() {
        assert_eq!(GpsService::new().info(), "No Data");
    }

    #[test]
    fn failure_keeps_stale_fix() {
        let mut gps = GpsService::new();
        let mut geo = FakeGeolocation::new(vec![
            Some(GpsFix { lat: 13.7563, lng: 100.5018, accuracy: 12.34 }),
            None,
        ]);
        gps.request(&mut geo);
        gps.request(&mut geo);
        assert_eq!(gps.info(), "Lat: 13.756300\nLng: 100.501800\nAcc: 12.3 m");
    }
}
