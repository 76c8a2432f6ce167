use indexmap::IndexSet;
use nordstern_form_value::{Blob, FormValue};

use crate::ParseError;

/// One submitted value: text, or a file.
#[derive(Debug, Clone, PartialEq)]
pub enum FormDataValue {
    Text(String),
    File(Blob),
}

impl From<&str> for FormDataValue {
    fn from(s: &str) -> Self {
        FormDataValue::Text(s.to_string())
    }
}

impl From<String> for FormDataValue {
    fn from(s: String) -> Self {
        FormDataValue::Text(s)
    }
}

impl From<Blob> for FormDataValue {
    fn from(b: Blob) -> Self {
        FormDataValue::File(b)
    }
}

impl From<&FormDataValue> for FormValue {
    fn from(v: &FormDataValue) -> Self {
        match v {
            FormDataValue::Text(s) => FormValue::Str(s.clone()),
            FormDataValue::File(b) => FormValue::Blob(b.clone()),
        }
    }
}

/// Ordered multi-map of submitted entries.
///
/// Repeated names are kept as separate entries in submission order, as a
/// browser's `FormData` does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    entries: Vec<(String, FormDataValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Decode` if the body is not valid urlencoded text.
    ///
    /// # Example
    ///
    /// ```
    /// use nordstern_form_data::FormData;
    ///
    /// let form = FormData::from_urlencoded("tags=a&tags=b&address.city=Any+town").unwrap();
    /// assert_eq!(form.len(), 3);
    /// assert_eq!(form.get_all("tags").len(), 2);
    /// ```
    pub fn from_urlencoded(body: &str) -> Result<Self, ParseError> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(body).map_err(|e| ParseError::Decode(e.to_string()))?;
        Ok(pairs.into_iter().collect())
    }

    /// Append an entry, keeping any existing entries with the same name.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<FormDataValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&FormDataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Every value submitted under `key`, in submission order.
    pub fn get_all(&self, key: &str) -> Vec<&FormDataValue> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Distinct names, in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &FormDataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FormDataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        form.extend(iter);
        form
    }
}

impl<K, V> Extend<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FormDataValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}
