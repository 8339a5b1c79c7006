use crate::constants::{SCHEME_HTTP, SCHEME_HTTPS, SCHEME_WS, SCHEME_WSS};
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single URL scheme an API can be served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiScheme {
    Http,
    Https,
    Ws,
    Wss,
}

impl ApiScheme {
    pub const ALL: [Self; 4] = [Self::Http, Self::Https, Self::Ws, Self::Wss];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => SCHEME_HTTP,
            Self::Https => SCHEME_HTTPS,
            Self::Ws => SCHEME_WS,
            Self::Wss => SCHEME_WSS,
        }
    }

    /// Parses a scheme name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Whether the scheme runs over TLS.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Https | Self::Wss)
    }
}

impl fmt::Display for ApiScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Represents the set of schemes supported by an API.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SchemeSet: u8 {
        const HTTP = 1 << 0;
        const HTTPS = 1 << 1;
        const WS = 1 << 2;
        const WSS = 1 << 3;

        const ALL = Self::HTTP.bits() | Self::HTTPS.bits() | Self::WS.bits() | Self::WSS.bits();
    }
}

impl SchemeSet {
    /// Iterates the contained schemes in canonical order (http, https, ws, wss).
    pub fn schemes(self) -> impl Iterator<Item = ApiScheme> {
        ApiScheme::ALL.into_iter().filter(move |scheme| self.contains(Self::from(*scheme)))
    }
}

impl From<ApiScheme> for SchemeSet {
    fn from(scheme: ApiScheme) -> Self {
        match scheme {
            ApiScheme::Http => Self::HTTP,
            ApiScheme::Https => Self::HTTPS,
            ApiScheme::Ws => Self::WS,
            ApiScheme::Wss => Self::WSS,
        }
    }
}

impl From<&str> for SchemeSet {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s == "*" || s.eq_ignore_ascii_case("all") {
            return Self::ALL;
        }
        ApiScheme::parse(s).map_or_else(Self::empty, Self::from)
    }
}

impl FromIterator<ApiScheme> for SchemeSet {
    fn from_iter<I: IntoIterator<Item = ApiScheme>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, scheme| set | Self::from(scheme))
    }
}

// Serialized as a list of scheme names so config files stay readable.
impl Serialize for SchemeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.schemes().count()))?;
        for scheme in self.schemes() {
            seq.serialize_element(scheme.as_str())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SchemeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemeSetVisitor;

        impl<'de> Visitor<'de> for SchemeSetVisitor {
            type Value = SchemeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a scheme name or a list of scheme names")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let set = SchemeSet::from(v);
                if set.is_empty() {
                    return Err(E::custom(format!("unknown scheme '{v}'")));
                }
                Ok(set)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = SchemeSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= SchemeSetVisitor.visit_str::<A::Error>(&name)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(SchemeSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(ApiScheme::parse("HTTPS"), Some(ApiScheme::Https));
        assert_eq!(ApiScheme::parse(" ws "), Some(ApiScheme::Ws));
        assert_eq!(ApiScheme::parse("ftp"), None);
    }

    #[test]
    fn set_iterates_in_canonical_order() {
        let set = SchemeSet::WSS | SchemeSet::HTTP;
        assert_eq!(set.schemes().collect::<Vec<_>>(), vec![ApiScheme::Http, ApiScheme::Wss]);
        assert_eq!(SchemeSet::from("*"), SchemeSet::ALL);
        assert!(SchemeSet::from("gopher").is_empty());
    }

    #[test]
    fn all_keyword_ignores_case_and_padding() {
        assert_eq!(SchemeSet::from("ALL"), SchemeSet::ALL);
        assert_eq!(SchemeSet::from(" All "), SchemeSet::ALL);
        assert_eq!(SchemeSet::from(" * "), SchemeSet::ALL);
        assert_eq!(SchemeSet::from(" HTTPS"), SchemeSet::HTTPS);
    }

    #[test]
    fn secure_schemes() {
        assert!(ApiScheme::Https.is_secure());
        assert!(ApiScheme::Wss.is_secure());
        assert!(!ApiScheme::Ws.is_secure());
    }
}
