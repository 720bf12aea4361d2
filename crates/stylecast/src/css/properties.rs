//! The ordered CSS property map.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// CSS declarations in emission order.
///
/// Order is part of the output grammar, so this is an insertion-ordered
/// list rather than a hash map. Inserting an existing property replaces its
/// value in place.
///
/// # Example
///
/// ```rust
/// use stylecast::css::CssProperties;
///
/// let mut props = CssProperties::new();
/// props.insert("display", "flex");
/// props.insert("gap", "8px");
/// props.insert("display", "grid");
///
/// assert_eq!(props.get("display"), Some("grid"));
/// assert_eq!(props.to_css_text(), "display: grid;\ngap: 8px;\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssProperties {
    entries: Vec<(String, String)>,
}

impl CssProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Property names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders a declaration block body, one `property: value;` per line.
    pub fn to_css_text(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{}: {};\n", p, v))
            .collect()
    }

    /// Renders a full rule for `selector`, indented by two spaces.
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut out = format!("{} {{\n", selector);
        for (p, v) in &self.entries {
            out.push_str(&format!("  {}: {};\n", p, v));
        }
        out.push_str("}\n");
        out
    }
}

impl Serialize for CssProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (p, v) in &self.entries {
            map.serialize_entry(p, v)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a CssProperties {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
