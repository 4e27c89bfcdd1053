//! Crop catalog

use serde::{Deserialize, Serialize};

/// Base yield used for any crop without its own reference value (t/ha)
pub const FALLBACK_BASE_YIELD: f64 = 2.5;

/// A crop grown on the farm.
///
/// The named variants are the crops offered by the entry form. Anything else
/// is kept verbatim (lowercased) in `Other` and scored with the fallback base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Crop {
    #[default]
    Wheat,
    Rice,
    Maize,
    Cotton,
    Other(String),
}

impl Crop {
    /// Crops listed in the entry form
    pub const KNOWN: [Crop; 4] = [Crop::Wheat, Crop::Rice, Crop::Maize, Crop::Cotton];

    /// Parse a crop name, case-insensitively
    pub fn parse(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "wheat" => Crop::Wheat,
            "rice" => Crop::Rice,
            "maize" => Crop::Maize,
            "cotton" => Crop::Cotton,
            _ => Crop::Other(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Cotton => "cotton",
            Crop::Other(name) => name,
        }
    }

    /// Reference yield per hectare under nominal conditions (t/ha)
    pub fn base_yield_per_hectare(&self) -> f64 {
        match self {
            Crop::Wheat => 3.2,
            Crop::Rice => 4.0,
            Crop::Maize => 5.0,
            Crop::Cotton | Crop::Other(_) => FALLBACK_BASE_YIELD,
        }
    }
}

impl From<String> for Crop {
    fn from(name: String) -> Self {
        Crop::parse(&name)
    }
}

impl From<&str> for Crop {
    fn from(name: &str) -> Self {
        Crop::parse(name)
    }
}

impl From<Crop> for String {
    fn from(crop: Crop) -> Self {
        crop.name().to_string()
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
