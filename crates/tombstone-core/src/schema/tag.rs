use indexmap::IndexMap;

/// Key/value settings decoded from a field tag.
///
/// Keys are upper-cased and trimmed. A key given without a value maps to
/// itself, so presence can be tested with [`TagSettings::contains`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSettings {
    settings: IndexMap<String, String>,
}

impl TagSettings {
    /// Parses `KEY[:VALUE]` pairs separated by `sep`.
    ///
    /// A separator preceded by `\` is part of the value. Everything after the
    /// first `:` is the value, further colons included.
    pub fn parse(src: &str, sep: char) -> TagSettings {
        let mut settings = IndexMap::new();
        let mut parts = src.split(sep);

        while let Some(part) = parts.next() {
            let mut entry = part.to_string();

            while entry.ends_with('\\') {
                entry.pop();
                entry.push(sep);
                match parts.next() {
                    Some(next) => entry.push_str(next),
                    None => break,
                }
            }

            let (key, value) = match entry.split_once(':') {
                Some((key, value)) => (key, Some(value)),
                None => (entry.as_str(), None),
            };

            let key = key.trim().to_uppercase();

            match value {
                Some(value) => {
                    settings.insert(key, value.to_string());
                }
                None if !key.is_empty() => {
                    settings.insert(key.clone(), key);
                }
                None => {}
            }
        }

        TagSettings { settings }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Returns true when `key` is present with a non-empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.settings
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
