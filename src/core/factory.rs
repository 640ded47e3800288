use crate::adapters::destinations::{FacebookDestination, SmsDestination, WhatsAppDestination};
use crate::adapters::sources::{DatabaseSource, JsonSource, TextSource, XmlSource};
use crate::core::{AdDestination, AdSource, Result};
use crate::utils::error::AdError;
use std::fmt;
use std::str::FromStr;

/// Closed set of source variants, keyed by the strings the original
/// factory recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKey {
    Database,
    Json,
    Xml,
    Text,
}

impl SourceKey {
    pub const ALL: [SourceKey; 4] = [
        SourceKey::Database,
        SourceKey::Json,
        SourceKey::Xml,
        SourceKey::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKey::Database => "banco",
            SourceKey::Json => "json",
            SourceKey::Xml => "xml",
            SourceKey::Text => "texto",
        }
    }

    /// Maps a menu reply (`1`-`4`) to its key. Anything else is `None`,
    /// which the menu flow turns into its default fallback.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SourceKey::Database),
            "2" => Some(SourceKey::Json),
            "3" => Some(SourceKey::Xml),
            "4" => Some(SourceKey::Text),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKey {
    type Err = AdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "banco" => Ok(SourceKey::Database),
            "json" => Ok(SourceKey::Json),
            "xml" => Ok(SourceKey::Xml),
            "texto" => Ok(SourceKey::Text),
            _ => Err(AdError::UnknownSource { key: s.to_string() }),
        }
    }
}

/// Closed set of delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKey {
    WhatsApp,
    Sms,
    Facebook,
}

impl DestinationKey {
    pub const ALL: [DestinationKey; 3] = [
        DestinationKey::WhatsApp,
        DestinationKey::Sms,
        DestinationKey::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DestinationKey::WhatsApp => "whatsapp",
            DestinationKey::Sms => "sms",
            DestinationKey::Facebook => "facebook",
        }
    }

    /// Maps a menu reply (`1`-`3`) to its key.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(DestinationKey::WhatsApp),
            "2" => Some(DestinationKey::Sms),
            "3" => Some(DestinationKey::Facebook),
            _ => None,
        }
    }
}

impl fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationKey {
    type Err = AdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "whatsapp" => Ok(DestinationKey::WhatsApp),
            "sms" => Ok(DestinationKey::Sms),
            "facebook" => Ok(DestinationKey::Facebook),
            _ => Err(AdError::UnknownDestination { key: s.to_string() }),
        }
    }
}

/// Replacement payloads for the JSON/XML sources, supplied by the TOML
/// config when the built-in literals are overridden.
#[derive(Debug, Clone, Default)]
pub struct PayloadOverrides {
    pub json: Option<String>,
    pub xml: Option<String>,
}

/// Total dispatch from an already-validated key to its source.
pub fn source_for(key: SourceKey, overrides: &PayloadOverrides) -> Box<dyn AdSource> {
    match key {
        SourceKey::Database => Box::new(DatabaseSource),
        SourceKey::Json => match &overrides.json {
            Some(payload) => Box::new(JsonSource::with_payload(payload.clone())),
            None => Box::new(JsonSource::new()),
        },
        SourceKey::Xml => match &overrides.xml {
            Some(payload) => Box::new(XmlSource::with_payload(payload.clone())),
            None => Box::new(XmlSource::new()),
        },
        SourceKey::Text => Box::new(TextSource),
    }
}

/// Total dispatch from an already-validated key to its destination.
pub fn destination_for(key: DestinationKey) -> Box<dyn AdDestination> {
    match key {
        DestinationKey::WhatsApp => Box::new(WhatsAppDestination),
        DestinationKey::Sms => Box::new(SmsDestination),
        DestinationKey::Facebook => Box::new(FacebookDestination),
    }
}

/// String-keyed factory. Fails with `UnknownSource` for keys outside the
/// recognized set.
pub fn create_source(key: &str, overrides: &PayloadOverrides) -> Result<Box<dyn AdSource>> {
    Ok(source_for(key.parse()?, overrides))
}

/// String-keyed factory. Fails with `UnknownDestination` for keys outside
/// the recognized set.
pub fn create_destination(key: &str) -> Result<Box<dyn AdDestination>> {
    Ok(destination_for(key.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sources::{DEFAULT_MESSAGE, DEFAULT_TITLE};

    #[test]
    fn test_every_source_key_round_trips_through_from_str() {
        for key in SourceKey::ALL {
            assert_eq!(key.as_str().parse::<SourceKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_every_destination_key_round_trips_through_from_str() {
        for key in DestinationKey::ALL {
            assert_eq!(key.as_str().parse::<DestinationKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_create_source_rejects_unknown_key() {
        let err = create_source("unknown", &PayloadOverrides::default()).err().unwrap();
        assert!(matches!(err, AdError::UnknownSource { key } if key == "unknown"));
    }

    #[test]
    fn test_create_destination_rejects_unknown_key() {
        let err = create_destination("unknown").err().unwrap();
        assert!(matches!(err, AdError::UnknownDestination { key } if key == "unknown"));
    }

    #[test]
    fn test_create_source_builds_working_sources() {
        for key in ["banco", "json", "xml", "texto"] {
            let source = create_source(key, &PayloadOverrides::default()).unwrap();
            let ad = source.fetch().unwrap();
            assert_eq!(ad.title, DEFAULT_TITLE);
            assert_eq!(ad.message, DEFAULT_MESSAGE);
        }
    }

    #[test]
    fn test_source_menu_choices() {
        assert_eq!(
            SourceKey::from_menu_choice("1"),
            Some(SourceKey::Database)
        );
        assert_eq!(SourceKey::from_menu_choice("2"), Some(SourceKey::Json));
        assert_eq!(SourceKey::from_menu_choice("3"), Some(SourceKey::Xml));
        assert_eq!(SourceKey::from_menu_choice("4"), Some(SourceKey::Text));
        assert_eq!(SourceKey::from_menu_choice("9"), None);
        assert_eq!(SourceKey::from_menu_choice(""), None);
        assert_eq!(SourceKey::from_menu_choice("banco"), None);
    }

    #[test]
    fn test_destination_menu_choices() {
        assert_eq!(
            DestinationKey::from_menu_choice("1"),
            Some(DestinationKey::WhatsApp)
        );
        assert_eq!(
            DestinationKey::from_menu_choice("2"),
            Some(DestinationKey::Sms)
        );
        assert_eq!(
            DestinationKey::from_menu_choice("3"),
            Some(DestinationKey::Facebook)
        );
        assert_eq!(DestinationKey::from_menu_choice("0"), None);
        assert_eq!(DestinationKey::from_menu_choice("4"), None);
    }

    #[test]
    fn test_json_payload_override_reaches_the_source() {
        let overrides = PayloadOverrides {
            json: Some(r#"{"titulo": "Configurado", "mensagem": "Via TOML"}"#.to_string()),
            xml: None,
        };
        let source = source_for(SourceKey::Json, &overrides);
        let ad = source.fetch().unwrap();
        assert_eq!(ad.title, "Configurado");
        assert_eq!(ad.message, "Via TOML");
    }

    #[test]
    fn test_xml_payload_override_reaches_the_source() {
        let overrides = PayloadOverrides {
            json: None,
            xml: Some(
                "<anuncio><titulo>Configurado</titulo><mensagem>Via TOML</mensagem></anuncio>"
                    .to_string(),
            ),
        };
        let source = source_for(SourceKey::Xml, &overrides);
        let ad = source.fetch().unwrap();
        assert_eq!(ad.title, "Configurado");
        assert_eq!(ad.message, "Via TOML");
    }
}
