use serde::Deserialize;

// response
//  ├── status
//  └── rows[]
//       └── elements[]
//            ├── status
//            ├── distance { text, value }
//            └── duration { text, value }

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<DistanceRow>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRow {
    #[serde(default)]
    pub elements: Vec<DistanceElement>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
}

/// Distance and duration for one route, as the API phrases them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TravelInfo {
    pub distance: Option<String>,
    pub duration: Option<String>,
}
