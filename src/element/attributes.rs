use hashbrown::HashMap;
use std::fmt::{self, Display};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    #[inline]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Attribute {
            name: name.into(),
            value,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute, `None` for a valueless (boolean) attribute.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        match &self.value {
            Some(value) if value.contains('"') && !value.contains('\'') => {
                write!(f, "='{value}'")
            }
            Some(value) => write!(f, "=\"{}\"", value.replace('"', "&quot;")),
            None => Ok(()),
        }
    }
}

/// Ordered attribute map.
///
/// Attributes keep the position of their first occurrence; setting an existing
/// name overwrites its value in place.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    items: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl Attributes {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Attributes::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.index.get(name).map(|&idx| &self.items[idx])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: Option<String>) {
        match self.index.get(name) {
            Some(&idx) => self.items[idx].value = value,
            None => {
                self.index.insert(name.to_owned(), self.items.len());
                self.items.push(Attribute::new(name, value));
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        let idx = self.index.remove(name)?;
        let removed = self.items.remove(idx);

        for attr in &self.items[idx..] {
            if let Some(pos) = self.index.get_mut(attr.name()) {
                *pos -= 1;
            }
        }

        Some(removed)
    }
}

impl Deref for Attributes {
    type Target = [Attribute];

    #[inline]
    fn deref(&self) -> &[Attribute] {
        &self.items
    }
}

impl PartialEq for Attributes {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Attributes {}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, Option<V>)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, Option<V>)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();

        for (name, value) in iter {
            attributes.set(name.as_ref(), value.map(Into::into));
        }

        attributes
    }
}
