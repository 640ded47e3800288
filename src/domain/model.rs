use serde::{Deserialize, Serialize};

/// The one record moved through the pipeline. Field renames keep the wire
/// names (`titulo`/`mensagem`) used by the JSON payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl Advertisement {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uses_wire_names() {
        let ad: Advertisement =
            serde_json::from_str(r#"{"titulo": "Oferta", "mensagem": "Aproveite"}"#).unwrap();
        assert_eq!(ad.title, "Oferta");
        assert_eq!(ad.message, "Aproveite");
    }

    #[test]
    fn test_serialize_round_trip() {
        let ad = Advertisement::new("Oferta", "Aproveite");
        let json = serde_json::to_string(&ad).unwrap();
        let back: Advertisement = serde_json::from_str(&json).unwrap();
        assert_eq!(ad, back);
    }
}
