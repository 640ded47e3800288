use crate::domain::model::Advertisement;
use crate::domain::ports::AdSource;
use crate::utils::error::{AdError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

pub const DEFAULT_TITLE: &str = "Promoção Imperdível";
pub const DEFAULT_MESSAGE: &str = "Desconto de 50%! Não perca!";

const DEFAULT_JSON_PAYLOAD: &str =
    r#"{"titulo": "Promoção Imperdível", "mensagem": "Desconto de 50%! Não perca!"}"#;

const DEFAULT_XML_PAYLOAD: &str =
    "<anuncio><titulo>Promoção Imperdível</titulo><mensagem>Desconto de 50%! Não perca!</mensagem></anuncio>";

/// Stands in for a database lookup; returns the record directly.
#[derive(Debug, Clone, Default)]
pub struct DatabaseSource;

impl AdSource for DatabaseSource {
    fn fetch(&self) -> Result<Advertisement> {
        Ok(Advertisement::new(DEFAULT_TITLE, DEFAULT_MESSAGE))
    }
}

/// Deserializes the advertisement from a JSON payload.
#[derive(Debug, Clone)]
pub struct JsonSource {
    payload: String,
}

impl JsonSource {
    pub fn new() -> Self {
        Self::with_payload(DEFAULT_JSON_PAYLOAD)
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Default for JsonSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AdSource for JsonSource {
    fn fetch(&self) -> Result<Advertisement> {
        tracing::debug!("Parsing JSON advertisement payload");
        let ad = serde_json::from_str(&self.payload)?;
        Ok(ad)
    }
}

/// Extracts the advertisement from an XML payload by walking the
/// `titulo` and `mensagem` elements.
#[derive(Debug, Clone)]
pub struct XmlSource {
    payload: String,
}

impl XmlSource {
    pub fn new() -> Self {
        Self::with_payload(DEFAULT_XML_PAYLOAD)
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Default for XmlSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AdSource for XmlSource {
    fn fetch(&self) -> Result<Advertisement> {
        tracing::debug!("Parsing XML advertisement payload");

        let mut reader = Reader::from_str(&self.payload);
        let mut title: Option<String> = None;
        let mut message: Option<String> = None;
        let mut current: Option<Vec<u8>> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => current = Some(e.name().as_ref().to_vec()),
                Event::Text(t) => {
                    let text = t.unescape().map_err(quick_xml::Error::from)?.into_owned();
                    match current.as_deref() {
                        Some(b"titulo") => title = Some(text),
                        Some(b"mensagem") => message = Some(text),
                        _ => {}
                    }
                }
                Event::End(_) => current = None,
                Event::Eof => break,
                _ => {}
            }
        }

        let title = title.ok_or_else(|| AdError::MalformedPayload {
            message: "missing <titulo> element".to_string(),
        })?;
        let message = message.ok_or_else(|| AdError::MalformedPayload {
            message: "missing <mensagem> element".to_string(),
        })?;

        Ok(Advertisement { title, message })
    }
}

/// Plain-text variant; same hardcoded values as the database source.
#[derive(Debug, Clone, Default)]
pub struct TextSource;

impl AdSource for TextSource {
    fn fetch(&self) -> Result<Advertisement> {
        Ok(Advertisement::new(DEFAULT_TITLE, DEFAULT_MESSAGE))
    }
}
