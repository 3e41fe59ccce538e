//! Field-update commands shared by every form in the app.
//!
//! A form exposes its fields as an enum implementing [`FormField`] and folds
//! [`FieldCommand`]s into its state with a single reducer.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer};
use std::fmt;

pub trait FormField: Copy {
    fn as_str(self) -> &'static str;
}

/// What kind of input produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
    File,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => write!(f, "text"),
            InputKind::Checkbox => write!(f, "checkbox"),
            InputKind::File => write!(f, "file"),
        }
    }
}

/// An image file picked by the user, before it has been read.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBlob {
    #[serde(default)]
    pub file_name: Option<String>,
    pub mime_type: String,
    /// Raw file content. Travels as standard base64 in JSON bodies.
    #[serde(rename = "data", deserialize_with = "deserialize_base64")]
    pub bytes: Vec<u8>,
}

impl FileBlob {
    pub fn new(file_name: Option<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBlob")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    STANDARD
        .decode(encoded.as_bytes())
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum FieldCommand<F> {
    TextFieldChanged { name: F, value: String },
    CheckboxToggled { name: F, checked: bool },
    FileSelected { name: F, blob: FileBlob },
}

impl<F: FormField> FieldCommand<F> {
    pub fn text(name: F, value: impl Into<String>) -> Self {
        FieldCommand::TextFieldChanged {
            name,
            value: value.into(),
        }
    }

    pub fn checkbox(name: F, checked: bool) -> Self {
        FieldCommand::CheckboxToggled { name, checked }
    }

    pub fn file(name: F, blob: FileBlob) -> Self {
        FieldCommand::FileSelected { name, blob }
    }

    pub fn name(&self) -> F {
        match self {
            FieldCommand::TextFieldChanged { name, .. }
            | FieldCommand::CheckboxToggled { name, .. }
            | FieldCommand::FileSelected { name, .. } => *name,
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FieldCommand::TextFieldChanged { .. } => InputKind::Text,
            FieldCommand::CheckboxToggled { .. } => InputKind::Checkbox,
            FieldCommand::FileSelected { .. } => InputKind::File,
        }
    }

    /// Error for a command whose input kind the named field cannot take.
    pub fn unsupported(&self) -> FieldCommandError {
        FieldCommandError::UnsupportedInput {
            field: self.name().as_str(),
            input: self.input_kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldCommandError {
    #[error("Field `{field}` does not accept {input} input")]
    UnsupportedInput {
        field: &'static str,
        input: InputKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    enum DemoField {
        Nickname,
        Subscribed,
    }

    impl FormField for DemoField {
        fn as_str(self) -> &'static str {
            match self {
                DemoField::Nickname => "nickname",
                DemoField::Subscribed => "subscribed",
            }
        }
    }

    #[test]
    fn test_deserialize_text_command() {
        let cmd: FieldCommand<DemoField> = serde_json::from_str(
            r#"{"type":"TextFieldChanged","name":"nickname","value":"neo"}"#,
        )
        .unwrap();

        assert_eq!(cmd, FieldCommand::text(DemoField::Nickname, "neo"));
        assert_eq!(cmd.input_kind(), InputKind::Text);
    }

    #[test]
    fn test_deserialize_checkbox_command() {
        let cmd: FieldCommand<DemoField> = serde_json::from_str(
            r#"{"type":"CheckboxToggled","name":"subscribed","checked":true}"#,
        )
        .unwrap();

        assert_eq!(cmd, FieldCommand::checkbox(DemoField::Subscribed, true));
    }

    #[test]
    fn test_deserialize_file_command_decodes_base64() {
        let cmd: FieldCommand<DemoField> = serde_json::from_str(
            r#"{"type":"FileSelected","name":"nickname","blob":{"mimeType":"image/png","data":"AQID"}}"#,
        )
        .unwrap();

        match cmd {
            FieldCommand::FileSelected { blob, .. } => {
                assert_eq!(blob.mime_type, "image/png");
                assert_eq!(blob.bytes, vec![1, 2, 3]);
                assert!(blob.file_name.is_none());
            }
            other => panic!("Expected FileSelected, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_field_name() {
        let result: Result<FieldCommand<DemoField>, _> = serde_json::from_str(
            r#"{"type":"TextFieldChanged","name":"shoeSize","value":"42"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_error_message() {
        let cmd = FieldCommand::checkbox(DemoField::Nickname, true);

        assert_eq!(
            cmd.unsupported().to_string(),
            "Field `nickname` does not accept checkbox input"
        );
    }

    #[test]
    fn test_file_blob_debug_hides_content() {
        let blob = FileBlob::new(Some("me.png".to_string()), "image/png", vec![0; 2048]);

        let debug = format!("{:?}", blob);

        assert!(debug.contains("len: 2048"));
        assert!(!debug.contains("0, 0, 0"));
    }
}
