use crate::core::factory::{DestinationKey, PayloadOverrides, SourceKey};
use crate::utils::error::Result;
use crate::utils::validation::{validate_key_membership, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based configuration: default keys for the menu fallback
/// and replacement payloads for the JSON/XML sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub defaults: Option<DefaultsConfig>,
    pub payloads: Option<PayloadsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub source: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayloadsConfig {
    pub json: Option<String>,
    pub xml: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_source(&self) -> Result<Option<SourceKey>> {
        self.defaults
            .as_ref()
            .and_then(|d| d.source.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn default_destination(&self) -> Result<Option<DestinationKey>> {
        self.defaults
            .as_ref()
            .and_then(|d| d.destination.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn payload_overrides(&self) -> PayloadOverrides {
        match &self.payloads {
            Some(payloads) => PayloadOverrides {
                json: payloads.json.clone(),
                xml: payloads.xml.clone(),
            },
            None => PayloadOverrides::default(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(defaults) = &self.defaults {
            if let Some(source) = &defaults.source {
                let allowed: Vec<&str> = SourceKey::ALL.iter().map(|k| k.as_str()).collect();
                validate_key_membership("defaults.source", source, &allowed)?;
            }
            if let Some(destination) = &defaults.destination {
                let allowed: Vec<&str> =
                    DestinationKey::ALL.iter().map(|k| k.as_str()).collect();
                validate_key_membership("defaults.destination", destination, &allowed)?;
            }
        }

        if let Some(payloads) = &self.payloads {
            if let Some(json) = &payloads.json {
                validate_non_empty_string("payloads.json", json)?;
            }
            if let Some(xml) = &payloads.xml {
                validate_non_empty_string("payloads.xml", xml)?;
            }
        }

        Ok(())
    }
}
