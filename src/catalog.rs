//! Reference tables backing the form's selection inputs.
//!
//! Static data only; the form stores the chosen strings verbatim, so
//! these tables are the UI's vocabulary, not a validation constraint.

/// A selectable option with a stored value and a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FISHING_TYPES: &[LabeledOption] = &[
    LabeledOption { value: "lake", label: "Lake / Dam" },
    LabeledOption { value: "stream", label: "Stream" },
    LabeledOption { value: "inshore", label: "Inshore / Island" },
    LabeledOption { value: "offshore", label: "Offshore / Deepsea" },
    LabeledOption { value: "jungle", label: "Jungle / Waterfall" },
];

pub const TRIP_TYPE_OPTIONS: &[LabeledOption] = &[
    LabeledOption { value: "Half-Day Trip", label: "Half-Day Trip" },
    LabeledOption { value: "Full Day Trip", label: "Full Day Trip" },
    LabeledOption { value: "Overnight Trip", label: "Overnight Trip" },
    LabeledOption { value: "Custom", label: "Custom" },
];

pub const TECHNIQUE_OPTIONS: &[&str] = &[
    "Bottom Fishing",
    "Casting",
    "Deep Sea Fishing",
    "Drift Fishing",
    "Jigging",
    "Eging",
    "Fly Fishing",
    "Prawn Fishing",
    "Trolling",
    "Apollo",
];

pub const AMENITIES_OPTIONS: &[&str] = &[
    "Live bait",
    "Lures",
    "Rod & reel",
    "Terminal tackle",
    "Snacks",
    "Drinks",
    "Meals",
    "Life jackets",
];

pub const BOAT_FEATURE_OPTIONS: &[&str] = &[
    "GPS",
    "Fishfinder",
    "Toilet",
    "Ice box",
    "Trolling motor",
    "Sound system",
    "Thruster/Trolling motor",
    "Kitchen",
    "Dorm",
    "Rod holders",
    "Air conditioning",
];

pub const BOAT_TYPES: &[&str] = &[
    "Joan Boat",
    "Pontoon",
    "Center Console",
    "Cabin Cruiser",
    "Longboat",
    "Catamaran",
    "Skiff",
    "Traditional Wooden",
    "Yacht",
    "Inflatable",
];

/// Target species offered across the trip forms.
pub const SPECIES_OPTIONS: &[&str] = &[
    "Barramundi",
    "Giant Trevally",
    "Queenfish",
    "Grouper",
    "Golden Snapper",
    "Mangrove Jack",
    "Spanish Mackerel",
    "Sailfish",
    "Cobia",
    "Giant Snakehead",
    "Peacock Bass",
    "Mahseer",
    "Hampala Barb",
    "Catfish",
    "Tilapia",
    "Squid",
];
