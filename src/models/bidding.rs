//! Bidding preference model.
//!
//! A bidding is a reviewer's stated preference for reviewing a given
//! paper: `no`, `maybe`, `yes`, or `coi` (conflict of interest).
//! COI is not a preference but a hard exclusion — the pair can never
//! be assigned.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reviewer's bidding preference for one paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidLevel {
    /// The reviewer does not want this paper.
    No,
    /// The reviewer would accept this paper.
    Maybe,
    /// The reviewer wants this paper.
    Yes,
    /// Conflict of interest: the pair must never be assigned.
    Coi,
}

impl BidLevel {
    /// Canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            BidLevel::No => "no",
            BidLevel::Maybe => "maybe",
            BidLevel::Yes => "yes",
            BidLevel::Coi => "coi",
        }
    }

    /// Whether this level is a conflict-of-interest exclusion.
    #[inline]
    pub fn is_coi(self) -> bool {
        matches!(self, BidLevel::Coi)
    }
}

impl fmt::Display for BidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BidLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes from the four string labels, plus boolean and 0/1
/// synonyms for `no`/`yes`. YAML 1.1 loaders read unquoted `yes`/`no`
/// as booleans, so description files written for such loaders carry
/// `true`/`false` where the author typed `yes`/`no`; both spellings
/// must stay accepted.
impl<'de> Deserialize<'de> for BidLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BidLevelVisitor;

        impl<'de> Visitor<'de> for BidLevelVisitor {
            type Value = BidLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("one of \"no\", \"maybe\", \"yes\", \"coi\", a boolean, or 0/1")
            }

            fn visit_str<E>(self, v: &str) -> Result<BidLevel, E>
            where
                E: de::Error,
            {
                match v {
                    "no" => Ok(BidLevel::No),
                    "maybe" => Ok(BidLevel::Maybe),
                    "yes" => Ok(BidLevel::Yes),
                    "coi" => Ok(BidLevel::Coi),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }

            fn visit_bool<E>(self, v: bool) -> Result<BidLevel, E>
            where
                E: de::Error,
            {
                Ok(if v { BidLevel::Yes } else { BidLevel::No })
            }

            fn visit_u64<E>(self, v: u64) -> Result<BidLevel, E>
            where
                E: de::Error,
            {
                match v {
                    0 => Ok(BidLevel::No),
                    1 => Ok(BidLevel::Yes),
                    _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
                }
            }

            fn visit_i64<E>(self, v: i64) -> Result<BidLevel, E>
            where
                E: de::Error,
            {
                match v {
                    0 => Ok(BidLevel::No),
                    1 => Ok(BidLevel::Yes),
                    _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(BidLevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_labels() {
        assert_eq!(serde_yaml::from_str::<BidLevel>("maybe").unwrap(), BidLevel::Maybe);
        assert_eq!(serde_yaml::from_str::<BidLevel>("coi").unwrap(), BidLevel::Coi);
        assert_eq!(serde_yaml::from_str::<BidLevel>("\"yes\"").unwrap(), BidLevel::Yes);
        assert_eq!(serde_yaml::from_str::<BidLevel>("\"no\"").unwrap(), BidLevel::No);
    }

    #[test]
    fn test_boolean_synonyms() {
        assert_eq!(serde_yaml::from_str::<BidLevel>("true").unwrap(), BidLevel::Yes);
        assert_eq!(serde_yaml::from_str::<BidLevel>("false").unwrap(), BidLevel::No);
    }

    #[test]
    fn test_numeric_synonyms() {
        assert_eq!(serde_yaml::from_str::<BidLevel>("1").unwrap(), BidLevel::Yes);
        assert_eq!(serde_yaml::from_str::<BidLevel>("0").unwrap(), BidLevel::No);
    }

    #[test]
    fn test_unrecognized_label_rejected() {
        assert!(serde_yaml::from_str::<BidLevel>("definitely").is_err());
        assert!(serde_yaml::from_str::<BidLevel>("2").is_err());
        assert!(serde_yaml::from_str::<BidLevel>("-1").is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let out = serde_json::to_string(&BidLevel::Coi).unwrap();
        assert_eq!(out, "\"coi\"");
    }

    #[test]
    fn test_is_coi() {
        assert!(BidLevel::Coi.is_coi());
        assert!(!BidLevel::Yes.is_coi());
    }
}
