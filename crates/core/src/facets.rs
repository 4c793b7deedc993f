//! Search facets: the enumerated filter dimensions used by the catalog
//! search engine and by target usage policies.
//!
//! Every facet has a fixed option set. A selection is either the neutral
//! [`Facet::All`] (the `"all"` wire value, a no-op filter) or exactly one
//! option. Unknown values are rejected at parse time so a selection can never
//! hold a value outside its option set.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire value of the neutral "no filter" selection.
pub const ALL: &str = "all";

/// Common behaviour of every enumerated facet value type.
pub trait FacetValue: Copy + Eq + 'static {
    /// Facet name used in error messages and query parameters.
    const NAME: &'static str;

    /// Every selectable value, in display order.
    fn options() -> &'static [Self];

    /// Wire value.
    fn as_str(self) -> &'static str;

    /// Parse a wire value, rejecting anything outside the option set.
    fn parse(s: &str) -> Result<Self, CoreError>;
}

macro_rules! define_facet {
    (
        $(#[$meta:meta])*
        $name:ident ($facet:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal, $label:literal );+ $(;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// All valid values.
            pub const OPTIONS: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl FacetValue for $name {
            const NAME: &'static str = $facet;

            fn options() -> &'static [Self] {
                Self::OPTIONS
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $val ),+
                }
            }

            fn parse(s: &str) -> Result<Self, CoreError> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}, {}",
                        $facet,
                        ALL,
                        [$($val),+].join(", ")
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(FacetValue::as_str(*self))
            }
        }
    };
}

define_facet! {
    /// Consent clearance tier attached to an actor.
    Clearance ("clearance") {
        PreCleared = "pre-cleared", "Pre-cleared";
        Conditional = "conditional", "Conditional";
        Restricted = "restricted", "Restricted";
    }
}

impl Clearance {
    /// `true` for the tier that needs no further consent review.
    pub fn is_most_permissive(self) -> bool {
        self == Self::PreCleared
    }
}

define_facet! {
    /// Playing-age bracket.
    AgeRange ("age_range") {
        From18To25 = "18-25", "18 to 25";
        From26To35 = "26-35", "26 to 35";
        From36To50 = "36-50", "36 to 50";
        Over50 = "50+", "50 and over";
    }
}

define_facet! {
    Gender ("gender") {
        Female = "female", "Female";
        Male = "male", "Male";
        NonBinary = "non-binary", "Non-binary";
    }
}

define_facet! {
    Accent ("accent") {
        American = "american", "American";
        British = "british", "British";
        Australian = "australian", "Australian";
        Irish = "irish", "Irish";
        Scottish = "scottish", "Scottish";
        Neutral = "neutral", "Neutral";
    }
}

define_facet! {
    /// Region an actor is based in, also used as a licensing territory.
    Geography ("geography") {
        NorthAmerica = "north-america", "North America";
        Europe = "europe", "Europe";
        AsiaPacific = "asia-pacific", "Asia Pacific";
        LatinAmerica = "latin-america", "Latin America";
        Worldwide = "worldwide", "Worldwide";
    }
}

define_facet! {
    /// Intended use of licensed likeness or voice.
    UseCase ("use_case") {
        Film = "film", "Film";
        Television = "television", "Television";
        Commercial = "commercial", "Commercial";
        Gaming = "gaming", "Gaming";
        Animation = "animation", "Animation";
        Dubbing = "dubbing", "Dubbing";
    }
}

// ---------------------------------------------------------------------------
// Facet selection
// ---------------------------------------------------------------------------

/// A single facet selection: the neutral `all` or exactly one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FacetValue> Facet<T> {
    /// Parse an optional raw query value. Missing, blank and `"all"` all
    /// mean no filtering.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Ok(Self::All),
            Some(value) => T::parse(value).map(Self::Only),
        }
    }

    /// The selected option, if any.
    pub fn selected(&self) -> Option<T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(*v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a single-valued attribute satisfies this selection.
    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => *v == value,
        }
    }

    /// Whether a multi-valued attribute satisfies this selection.
    pub fn matches_any(&self, values: &[T]) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => values.contains(v),
        }
    }

    /// Wire value (`"all"` for the neutral selection).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(v) => v.as_str(),
        }
    }
}

/// The full set of actor facet selections. Facets are AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub clearance: Facet<Clearance>,
    pub age_range: Facet<AgeRange>,
    pub gender: Facet<Gender>,
    pub accent: Facet<Accent>,
    pub geography: Facet<Geography>,
    pub use_case: Facet<UseCase>,
}

impl FacetSelection {
    /// `true` when every facet is `all`.
    pub fn is_unfiltered(&self) -> bool {
        self.clearance.is_all()
            && self.age_range.is_all()
            && self.gender.is_all()
            && self.accent.is_all()
            && self.geography.is_all()
            && self.use_case.is_all()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_and_blank_are_neutral() {
        assert_eq!(Facet::<Gender>::parse(None).unwrap(), Facet::All);
        assert_eq!(Facet::<Gender>::parse(Some("")).unwrap(), Facet::All);
        assert_eq!(Facet::<Gender>::parse(Some(" all ")).unwrap(), Facet::All);
    }

    #[test]
    fn parse_known_value() {
        assert_eq!(
            Facet::<Clearance>::parse(Some("pre-cleared")).unwrap(),
            Facet::Only(Clearance::PreCleared)
        );
        assert_eq!(
            Facet::<AgeRange>::parse(Some("50+")).unwrap(),
            Facet::Only(AgeRange::Over50)
        );
    }

    #[test]
    fn parse_unknown_value_is_validation_error() {
        let err = Facet::<Accent>::parse(Some("martian")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid accent 'martian'"));
        assert!(msg.contains("british"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Facet::<UseCase>::parse(Some("Film")).is_err());
    }

    #[test]
    fn every_option_round_trips_through_wire_value() {
        for option in Geography::OPTIONS {
            assert_eq!(Geography::parse(option.as_str()).unwrap(), *option);
        }
        for option in UseCase::OPTIONS {
            assert_eq!(UseCase::parse(option.as_str()).unwrap(), *option);
        }
    }

    #[test]
    fn all_matches_everything() {
        let facet: Facet<Gender> = Facet::All;
        assert!(facet.matches(Gender::Female));
        assert!(facet.matches_any(&[]));
    }

    #[test]
    fn only_matches_exact_value() {
        let facet = Facet::Only(UseCase::Gaming);
        assert!(facet.matches(UseCase::Gaming));
        assert!(!facet.matches(UseCase::Film));
        assert!(facet.matches_any(&[UseCase::Film, UseCase::Gaming]));
        assert!(!facet.matches_any(&[UseCase::Film]));
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&Clearance::PreCleared).unwrap();
        assert_eq!(json, r#""pre-cleared""#);
        let parsed: AgeRange = serde_json::from_str(r#""36-50""#).unwrap();
        assert_eq!(parsed, AgeRange::From36To50);
    }

    #[test]
    fn only_pre_cleared_is_most_permissive() {
        assert!(Clearance::PreCleared.is_most_permissive());
        assert!(!Clearance::Conditional.is_most_permissive());
        assert!(!Clearance::Restricted.is_most_permissive());
    }

    #[test]
    fn default_selection_is_unfiltered() {
        assert!(FacetSelection::default().is_unfiltered());
        let selection = FacetSelection {
            gender: Facet::Only(Gender::Male),
            ..Default::default()
        };
        assert!(!selection.is_unfiltered());
    }
}
