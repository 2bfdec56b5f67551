//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};


// Query values must implement Display, FromStr and Default. The default value encodes as an empty
// string so untouched state keeps the address short.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize + Default + PartialEq> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == T::default() {
            return Ok(());
        }
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE_NO_PAD.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(UrlParam(T::default()));
        }
        let decoded = URL_SAFE_NO_PAD
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(StateParseError::CiboriumError)?;
        Ok(UrlParam(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filter_query::{FacetField, FilterSelection};

    #[test]
    fn default_selection_encodes_empty() {
        let param = UrlParam(FilterSelection::default());
        assert_eq!(param.to_string(), "");
        assert_eq!("".parse::<UrlParam<FilterSelection>>().unwrap(), param);
    }

    #[test]
    fn selection_round_trips() {
        let mut selection = FilterSelection::default();
        selection.toggle(FacetField::Region, "ヨーロッパ");
        selection.toggle(FacetField::Tag, "予約必須");
        let encoded = UrlParam(selection.clone()).to_string();
        assert!(!encoded.contains('='));
        assert_eq!(encoded.parse::<UrlParam<FilterSelection>>().unwrap(), UrlParam(selection));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            "!!!".parse::<UrlParam<FilterSelection>>(),
            Err(StateParseError::DecodeError(_))
        ));
    }
}
