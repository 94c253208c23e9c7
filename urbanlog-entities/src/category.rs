use strum::{Display, EnumIter, EnumString};

/// The fixed set of request categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Transit,
    Safety,
    Beautification,
    Accessibility,
    Other,
}

impl Category {
    /// The ordered subcategory labels of this category.
    ///
    /// Every list is non-empty and ends with the catch-all "Other".
    pub const fn subcategories(self) -> &'static [&'static str] {
        match self {
            Self::Safety => &[
                "Daylight intersection",
                "Crosswalk needed",
                "Modal filter",
                "4-way stop",
                "Dangerous slip lane",
                "Speed reduction needed",
                "Better lighting",
                "Protected bike lane",
                "Signal timing issue",
                "Other",
            ],
            Self::Transit => &[
                "Bus stop bench",
                "Bus shelter",
                "Frequent conflicts/slowness",
                "Bike parking",
                "Route suggestion",
                "Other",
            ],
            Self::Beautification => &[
                "Mural opportunity",
                "Placemaking street art",
                "Easement needs love",
                "Tree planting",
                "Community garden",
                "Trash/litter cleanup",
                "Other",
            ],
            Self::Accessibility => &[
                "Steep curb dropoff",
                "Drainage issue",
                "Sidewalk break",
                "Audible crossing signal",
                "Tactile paving needed",
                "Ramp needed",
                "Other",
            ],
            Self::Other => &["Other"],
        }
    }

    /// The subcategory a form preselects when this category is chosen.
    pub const fn default_subcategory(self) -> &'static str {
        self.subcategories()[0]
    }

    pub fn contains_subcategory(self, subcategory: &str) -> bool {
        self.subcategories().contains(&subcategory)
    }
}
