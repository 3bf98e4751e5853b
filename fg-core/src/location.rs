use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A north/south/east/west bounding box, as used by ground overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Whether `point` lies inside the box (edges inclusive).
    ///
    /// Boxes crossing the antimeridian are not supported.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lng <= self.east
            && point.lng >= self.west
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }
}

/// Kind of emergency facility. Every category has exactly one marker style,
/// see [`crate::style::style_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hospital,
    Fire,
    Police,
    Shelter,
    School,
    Community,
    Government,
    Transport,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Hospital,
        Category::Fire,
        Category::Police,
        Category::Shelter,
        Category::School,
        Category::Community,
        Category::Government,
        Category::Transport,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::Fire => "fire",
            Category::Police => "police",
            Category::Shelter => "shelter",
            Category::School => "school",
            Category::Community => "community",
            Category::Government => "government",
            Category::Transport => "transport",
        }
    }

    /// Plural label used by the map legend.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Category::Hospital => "Hospitals",
            Category::Fire => "Fire Stations",
            Category::Police => "Police Stations",
            Category::Shelter => "Emergency Shelters",
            Category::School => "Schools",
            Category::Community => "Community Centers",
            Category::Government => "Government Offices",
            Category::Transport => "Transport Hubs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A hard-coded emergency facility shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub position: LatLng,
    pub category: Category,
    pub contact: Option<&'static str>,
    pub address: Option<&'static str>,
}

/// Sample facilities. There is no runtime creation or mutation.
pub static EMERGENCY_LOCATIONS: &[EmergencyLocation] = &[EmergencyLocation {
    id: "1",
    name: "Central Hospital",
    position: LatLng::new(40.7128, -74.006),
    category: Category::Hospital,
    contact: Some("+1 (555) 123-4567"),
    address: Some("123 Medical Drive"),
}];

/// Look up a facility in [`EMERGENCY_LOCATIONS`] by id.
pub fn find_location(id: &str) -> Option<&'static EmergencyLocation> {
    EMERGENCY_LOCATIONS.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nyc_box() -> Bounds {
        Bounds {
            north: 40.7828,
            south: 40.6428,
            east: -73.906,
            west: -74.106,
        }
    }

    #[test]
    fn bounds_contains_inner_point_and_edges() {
        let b = nyc_box();
        assert!(b.contains(LatLng::new(40.7128, -74.006)));
        assert!(b.contains(LatLng::new(40.7828, -73.906)));
        assert!(!b.contains(LatLng::new(41.0, -74.006)));
        assert!(!b.contains(LatLng::new(40.7128, -73.5)));
    }

    #[test]
    fn bounds_center() {
        let c = nyc_box().center();
        assert!((c.lat - 40.7128).abs() < 1e-9);
        assert!((c.lng - -74.006).abs() < 1e-9);
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn category_serializes_as_key() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn sample_table_has_central_hospital() {
        assert_eq!(EMERGENCY_LOCATIONS.len(), 1);
        let hospital = find_location("1").unwrap();
        assert_eq!(hospital.name, "Central Hospital");
        assert_eq!(hospital.category, Category::Hospital);
        assert_eq!(hospital.address, Some("123 Medical Drive"));
        assert!(find_location("missing").is_none());
    }

    #[test]
    fn location_ids_are_unique() {
        for (i, a) in EMERGENCY_LOCATIONS.iter().enumerate() {
            for b in &EMERGENCY_LOCATIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
