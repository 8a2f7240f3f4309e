//! Tilde-encoded node name descriptor

use super::TaskNodeType;

/// Separator between the components of a node name.
pub const COMPONENT_SEPARATOR: char = '~';

const CLASSIFICATION: &str = "classification";
const BACKGROUND_IMAGE_KEY: &str = "bg";
const BACKGROUND_AUDIO_KEY: &str = "bgAudioName";
const AUDIO_KEY: &str = "audioName";

/// A decoded node name.
///
/// Decoding never fails: missing components degrade to an empty string or
/// zero so a node can still be partially rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    components: Vec<String>,
    language: String,
}

impl NodeDescriptor {
    /// Decode a raw node name for the given target language
    #[must_use]
    pub fn decode(name: &str, language: &str) -> Self {
        Self {
            components: name.split(COMPONENT_SEPARATOR).map(str::to_string).collect(),
            language: language.to_string(),
        }
    }

    /// All name components, in order
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Language the descriptor was decoded for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// First component, or `classification` for single-component names
    #[must_use]
    pub fn type_identifier(&self) -> &str {
        if self.components.len() >= 2 {
            &self.components[0]
        } else {
            CLASSIFICATION
        }
    }

    /// The typed node kind; `None` when the identifier is unknown
    #[must_use]
    pub fn task_node_type(&self) -> Option<TaskNodeType> {
        TaskNodeType::from_identifier(self.type_identifier())
    }

    /// Display text (last component)
    #[must_use]
    pub fn text(&self) -> &str {
        self.components.last().map_or("", String::as_str)
    }

    fn second_component(&self) -> Option<&str> {
        if self.components.len() >= 2 {
            self.components.get(1).map(String::as_str)
        } else {
            None
        }
    }

    /// Required tick count of a checklist; zero for every other type
    #[must_use]
    pub fn target_number_of_choices(&self) -> usize {
        if self.task_node_type() != Some(TaskNodeType::Checklist) {
            return 0;
        }
        self.second_component()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Unit label of a `textFieldWithUnit` node (second component verbatim)
    #[must_use]
    pub fn unit(&self) -> &str {
        self.second_component().unwrap_or("")
    }

    /// Image file name (without extension) of image-bearing display nodes,
    /// present only when the name also carries a text component
    #[must_use]
    pub fn image_file_name(&self) -> Option<&str> {
        match self.task_node_type() {
            Some(t) if t.has_image() && self.components.len() >= 3 => self.second_component(),
            _ => None,
        }
    }

    /// Value of an `@key=value` marker among the middle components
    #[must_use]
    pub fn marker(&self, key: &str) -> Option<&str> {
        if self.components.len() < 3 {
            return None;
        }
        self.components[1..self.components.len() - 1]
            .iter()
            .filter_map(|c| c.strip_prefix('@'))
            .filter_map(|c| c.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// `@bg=` marker
    #[must_use]
    pub fn background_image_name(&self) -> Option<&str> {
        self.marker(BACKGROUND_IMAGE_KEY)
    }

    /// `@bgAudioName=` marker
    #[must_use]
    pub fn background_audio_name(&self) -> Option<&str> {
        self.marker(BACKGROUND_AUDIO_KEY)
    }

    /// `@audioName=` marker
    #[must_use]
    pub fn audio_name(&self) -> Option<&str> {
        self.marker(AUDIO_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_identifier_is_first_component() {
        for name in ["textDisplay~Hi", "link~a~b~Pick", "whatever~x", "~"] {
            let d = NodeDescriptor::decode(name, "English");
            assert_eq!(d.type_identifier(), name.split('~').next().unwrap());
        }
    }

    #[test]
    fn test_single_component_is_classification() {
        for name in ["Fruits", "", "a b c"] {
            let d = NodeDescriptor::decode(name, "English");
            assert_eq!(d.type_identifier(), "classification");
            assert_eq!(d.task_node_type(), Some(TaskNodeType::Classification));
            assert_eq!(d.text(), name);
        }
    }

    #[test]
    fn test_target_number_of_choices() {
        let d = NodeDescriptor::decode("checkList~3~Pick three", "English");
        assert_eq!(d.target_number_of_choices(), 3);

        // Non-numeric or missing count
        assert_eq!(NodeDescriptor::decode("checkList~Pick", "English").target_number_of_choices(), 0);
        assert_eq!(NodeDescriptor::decode("checkList~x~Pick", "English").target_number_of_choices(), 0);

        // Only checklists have a target
        for name in ["radioButtons~3~Pick", "textFieldWithUnit~3~Weight", "3"] {
            assert_eq!(NodeDescriptor::decode(name, "English").target_number_of_choices(), 0);
        }
    }

    #[test]
    fn test_unit_and_image() {
        let d = NodeDescriptor::decode("textFieldWithUnit~kg~Weight?", "English");
        assert_eq!(d.unit(), "kg");
        assert_eq!(d.text(), "Weight?");
        assert_eq!(d.image_file_name(), None);

        let d = NodeDescriptor::decode("imageDisplay~cat", "English");
        assert_eq!(d.image_file_name(), None);

        let d = NodeDescriptor::decode("imageTextDisplay~cat~A cat", "English");
        assert_eq!(d.image_file_name(), Some("cat"));
        assert_eq!(d.text(), "A cat");
    }

    #[test]
    fn test_markers() {
        let d = NodeDescriptor::decode(
            "textDisplay~@bg=forest~@audioName=intro~@bgAudioName=rain~Welcome",
            "Filipino",
        );
        assert_eq!(d.background_image_name(), Some("forest"));
        assert_eq!(d.audio_name(), Some("intro"));
        assert_eq!(d.background_audio_name(), Some("rain"));
        assert_eq!(d.text(), "Welcome");
        assert_eq!(d.language(), "Filipino");

        // The display text itself is never treated as a marker
        let d = NodeDescriptor::decode("textDisplay~@bg=forest", "English");
        assert_eq!(d.background_image_name(), None);
    }
}
