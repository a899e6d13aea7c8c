//! Cache identity of a rendered variant.
//!
//! A variant key names the output of a (template, text) pair rendered with a
//! particular set of style-affecting options. Requests with the default
//! options map to `template/text`; anything else gets a `#<sha256>` suffix.

use sha2::{Digest, Sha256};
use std::fmt;
use std::path::PathBuf;

/// Style-affecting options of a render request, in digest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFields {
    pub style: Option<String>,
    pub font: Option<String>,
    pub watermark: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl StyleFields {
    /// Field values as digest input; absent, empty and zero become "".
    fn values(&self) -> [String; 5] {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: Option<u32>| match value {
            Some(n) if n > 0 => n.to_string(),
            _ => String::new(),
        };

        [
            text(&self.style),
            text(&self.font),
            text(&self.watermark),
            number(self.width),
            number(self.height),
        ]
    }

    /// True when no field changes the rendered output.
    pub fn is_default(&self) -> bool {
        self.values().iter().all(String::is_empty)
    }
}

/// SHA-256 over the ordered `index:value` records, hex encoded.
///
/// Each record is prefixed with its byte length so that field boundaries
/// cannot be shifted by values containing separators.
fn digest_fields(values: &[String]) -> String {
    let mut hasher = Sha256::new();
    for (index, value) in values.iter().enumerate() {
        let record = format!("{}:{}", index, value);
        hasher.update((record.len() as u64).to_be_bytes());
        hasher.update(record.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Stable identity of a rendered variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    template_key: String,
    text_path: String,
    digest: Option<String>,
}

impl VariantKey {
    pub fn derive(template_key: &str, text_path: &str, fields: &StyleFields) -> Self {
        let digest = if fields.is_default() {
            None
        } else {
            Some(digest_fields(&fields.values()))
        };

        Self {
            template_key: template_key.to_string(),
            text_path: text_path.to_string(),
            digest,
        }
    }

    /// `template/text` without the digest.
    pub fn base(&self) -> String {
        format!("{}/{}", self.template_key, self.text_path)
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    pub fn template_key(&self) -> &str {
        &self.template_key
    }

    pub fn text_path(&self) -> &str {
        &self.text_path
    }

    /// Path of the artifact relative to a storage root.
    pub fn relative_path(&self) -> PathBuf {
        let file_name = match &self.digest {
            Some(digest) => format!("{}#{}.img", self.text_path, digest),
            None => format!("{}.img", self.text_path),
        };
        PathBuf::from(&self.template_key).join(file_name)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.digest {
            Some(digest) => write!(f, "{}#{}", self.base(), digest),
            None => write!(f, "{}", self.base()),
        }
    }
}
