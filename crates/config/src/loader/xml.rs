//! XML configuration loading.
//!
//! The XML form carries one extra piece of information the other formats
//! do not: the local name of the document's root element, captured as a
//! descriptive field for round-trip fidelity. The root name is not
//! validated; any element name is accepted.

use std::path::Path;

use quick_xml::events::Event;

use super::error::{ConfigError, SourceFormat};
use super::raw::RawConfig;
use crate::types::Config;

/// Configuration decoded from an XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlConfig {
    /// Local name of the document root element.
    pub root_element: String,
    /// The resolved configuration.
    pub config: Config,
}

impl XmlConfig {
    /// Discard the root element name.
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Load configuration from an XML file.
pub fn load(path: impl AsRef<Path>) -> Result<XmlConfig, ConfigError> {
    let path = path.as_ref();
    let content = super::read_file(path)?;
    let config = load_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded XML config");
    Ok(config)
}

/// Load configuration from XML content.
///
/// Child elements of the root map to the same field names the other
/// formats use; `allowed_origins` repeats one element per origin. Fields
/// absent from the document take the built-in defaults.
pub fn load_str(content: &str) -> Result<XmlConfig, ConfigError> {
    let root_element = root_element_name(content)?;
    let raw: RawConfig = quick_xml::de::from_str(content).map_err(|e| ConfigError::Decode {
        format: SourceFormat::Xml,
        message: e.to_string(),
    })?;
    Ok(XmlConfig {
        root_element,
        config: raw.into_config(),
    })
}

/// Scan for the document's first start tag and return its local name.
///
/// The serde layer does not see element names above the field level, so
/// the root name has to be picked up with a streaming pass.
fn root_element_name(content: &str) -> Result<String, ConfigError> {
    let mut reader = quick_xml::Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                let name = start.name();
                let local = name.local_name();
                return Ok(String::from_utf8_lossy(local.as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ConfigError::Decode {
                    format: SourceFormat::Xml,
                    message: "missing document root element".to_string(),
                });
            }
            Err(e) => {
                return Err(ConfigError::Decode {
                    format: SourceFormat::Xml,
                    message: e.to_string(),
                });
            }
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_resolves_to_defaults() {
        let loaded = load_str("<config></config>").unwrap();
        assert_eq!(loaded.root_element, "config");
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_root_element_name_is_captured_verbatim() {
        let loaded = load_str("<service_config></service_config>").unwrap();
        assert_eq!(loaded.root_element, "service_config");
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_partial_document_overlays_defaults() {
        let content = "\
<config>
  <server>
    <host>0.0.0.0</host>
    <port>8080</port>
    <allowed_origins>https://a.example</allowed_origins>
    <allowed_origins>https://b.example</allowed_origins>
  </server>
  <jaeger>
    <enabled>true</enabled>
  </jaeger>
</config>";
        let loaded = load_str(content).unwrap();
        assert_eq!(loaded.root_element, "config");
        assert_eq!(loaded.config.server.host, "0.0.0.0");
        assert_eq!(loaded.config.server.port, 8080);
        assert_eq!(
            loaded.config.server.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(loaded.config.jaeger.enabled);
        assert_eq!(
            loaded.config.jaeger.host,
            "http://localhost:14268/api/traces"
        );
        assert_eq!(loaded.config.mongodb.port, 27017);
    }

    #[test]
    fn test_xml_declaration_is_skipped_for_root_capture() {
        let content = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<config></config>";
        let loaded = load_str(content).unwrap();
        assert_eq!(loaded.root_element, "config");
    }

    #[test]
    fn test_empty_content_is_a_decode_error() {
        let result = load_str("");
        match result {
            Err(ConfigError::Decode { format, .. }) => {
                assert_eq!(format, SourceFormat::Xml);
            }
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_content_is_a_decode_error() {
        assert!(matches!(
            load_str("<config><server></config>"),
            Err(ConfigError::Decode { .. })
        ));
    }

    #[test]
    fn test_into_config_discards_root_name() {
        let loaded = load_str("<config><environment>dev</environment></config>").unwrap();
        let config = loaded.into_config();
        assert_eq!(config.environment, "dev");
    }
}
