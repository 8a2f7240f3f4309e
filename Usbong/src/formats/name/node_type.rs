//! Task node type enumeration

use serde::{Deserialize, Serialize};

/// The kind of a task node, taken from the first component of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskNodeType {
    TextDisplay,
    ImageDisplay,
    TextImageDisplay,
    ImageTextDisplay,
    Link,
    RadioButtons,
    RadioButtonsWithAnswer,
    Checklist,
    Classification,
    TextField,
    TextFieldNumerical,
    TextFieldWithUnit,
    TextArea,
    TextFieldWithAnswer,
    TextAreaWithAnswer,
    TimestampDisplay,
    Date,
}

impl TaskNodeType {
    /// All task node types, in declaration order.
    pub const ALL: [TaskNodeType; 17] = [
        TaskNodeType::TextDisplay,
        TaskNodeType::ImageDisplay,
        TaskNodeType::TextImageDisplay,
        TaskNodeType::ImageTextDisplay,
        TaskNodeType::Link,
        TaskNodeType::RadioButtons,
        TaskNodeType::RadioButtonsWithAnswer,
        TaskNodeType::Checklist,
        TaskNodeType::Classification,
        TaskNodeType::TextField,
        TaskNodeType::TextFieldNumerical,
        TaskNodeType::TextFieldWithUnit,
        TaskNodeType::TextArea,
        TaskNodeType::TextFieldWithAnswer,
        TaskNodeType::TextAreaWithAnswer,
        TaskNodeType::TimestampDisplay,
        TaskNodeType::Date,
    ];

    /// Parse a type identifier (case-insensitive). Unknown identifiers yield `None`.
    #[must_use]
    pub fn from_identifier(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.identifier().to_lowercase() == lower)
    }

    /// The identifier used in node names
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::TextDisplay => "textDisplay",
            Self::ImageDisplay => "imageDisplay",
            Self::TextImageDisplay => "textImageDisplay",
            Self::ImageTextDisplay => "imageTextDisplay",
            Self::Link => "link",
            Self::RadioButtons => "radioButtons",
            Self::RadioButtonsWithAnswer => "radioButtonsWithAnswer",
            Self::Checklist => "checkList",
            Self::Classification => "classification",
            Self::TextField => "textField",
            Self::TextFieldNumerical => "textFieldNumerical",
            Self::TextFieldWithUnit => "textFieldWithUnit",
            Self::TextArea => "textArea",
            Self::TextFieldWithAnswer => "textFieldWithAnswer",
            Self::TextAreaWithAnswer => "textAreaWithAnswer",
            Self::TimestampDisplay => "timestampDisplay",
            Self::Date => "date",
        }
    }

    /// Whether the node shows an image taken from the second name component
    #[must_use]
    pub fn has_image(self) -> bool {
        matches!(
            self,
            Self::ImageDisplay | Self::TextImageDisplay | Self::ImageTextDisplay
        )
    }

    /// Whether the node carries a free-text input
    #[must_use]
    pub fn has_text_input(self) -> bool {
        matches!(
            self,
            Self::TextField
                | Self::TextFieldNumerical
                | Self::TextFieldWithUnit
                | Self::TextArea
                | Self::TextFieldWithAnswer
                | Self::TextAreaWithAnswer
        )
    }

    /// Whether the node carries a date value
    #[must_use]
    pub fn has_date(self) -> bool {
        matches!(self, Self::Date | Self::TimestampDisplay)
    }
}

impl std::fmt::Display for TaskNodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}
