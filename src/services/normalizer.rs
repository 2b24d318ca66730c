//! Vehicle size normalization service
//!
//! Maps free-text vehicle descriptors (usually the last dash-delimited
//! segment of a service name) to a canonical size.

use crate::types::VehicleSize;

#[derive(Debug, Clone, Copy)]
enum Keyword {
    Contains(&'static str),
    Equals(&'static str),
}

impl Keyword {
    fn matches(self, text: &str) -> bool {
        match self {
            Self::Contains(needle) => text.contains(needle),
            Self::Equals(exact) => text == exact,
        }
    }
}

/// Evaluated top to bottom, first match wins. "suv" and "truck" are
/// substrings of the more specific descriptors, so the generic rule is last.
const SIZE_RULES: &[(&[Keyword], VehicleSize)] = &[
    (
        &[
            Keyword::Contains("coupe"),
            Keyword::Contains("two door"),
            Keyword::Equals("2 door truck"),
        ],
        VehicleSize::Coupe,
    ),
    (
        &[
            Keyword::Contains("sedan"),
            Keyword::Contains("four door"),
            Keyword::Equals("4 door truck"),
        ],
        VehicleSize::Sedan,
    ),
    (
        &[
            Keyword::Contains("xl suv"),
            Keyword::Contains("van"),
            Keyword::Contains("xlsuv"),
        ],
        VehicleSize::Xlsuv,
    ),
    (
        &[Keyword::Contains("suv"), Keyword::Contains("truck")],
        VehicleSize::Suv,
    ),
];

/// Normalize a vehicle descriptor to a canonical size.
///
/// Matching is case-insensitive on the trimmed input. Unrecognized text
/// yields `None`.
///
/// # Examples
/// ```
/// use shop_catalog::services::normalizer::normalize_vehicle_size;
/// use shop_catalog::types::VehicleSize;
///
/// assert_eq!(normalize_vehicle_size("XL SUV/Van"), Some(VehicleSize::Xlsuv));
/// assert_eq!(normalize_vehicle_size("Coupe/Two Door Truck"), Some(VehicleSize::Coupe));
/// ```
pub fn normalize_vehicle_size(raw: &str) -> Option<VehicleSize> {
    let text = raw.trim().to_lowercase();

    SIZE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| k.matches(&text)))
        .map(|(_, size)| *size)
}
