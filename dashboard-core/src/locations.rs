use crate::model::SavedLocation;

/// The registry every fresh session starts with.
pub fn default_locations() -> Vec<SavedLocation> {
    vec![
        SavedLocation {
            id: 1,
            name: "Denver".into(),
            region: "Colorado".into(),
            country: "United States".into(),
            url: "https://www.google.com/maps/place/Denver,+CO,+USA".into(),
        },
        SavedLocation {
            id: 2,
            name: "Rio de Janeiro".into(),
            region: "Rio de Janeiro".into(),
            country: "Brazil".into(),
            url: "https://www.google.com/maps/place/Rio+de+Janeiro,+Brazil".into(),
        },
        SavedLocation {
            id: 3,
            name: "Madrid".into(),
            region: "Madrid".into(),
            country: "Spain".into(),
            url: "https://www.google.com/maps/place/Madrid,+Spain".into(),
        },
        SavedLocation {
            id: 4,
            name: "Tokyo".into(),
            region: "Tokyo".into(),
            country: "Japan".into(),
            url: "https://www.google.com/maps/place/Tokyo,+Japan".into(),
        },
        SavedLocation {
            id: 5,
            name: "Sydney".into(),
            region: "Sydney".into(),
            country: "Australia".into(),
            url: "https://www.google.com/maps/place/Sydney,+Australia".into(),
        },
    ]
}
