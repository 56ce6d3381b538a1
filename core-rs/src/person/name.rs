/**
 * name.rs
 * Full-name parsing into first / middle / last parts
 *
 * Rules (tokens are separated by runs of whitespace):
 * - 1 token:  first
 * - 2 tokens: first last
 * - 3+ tokens: first middle ... last
 *   Tokens between the middle and the final token are dropped.
 *
 * Example:
 * - "Madonna"               → first=Madonna
 * - "Madonna Cicone"        → first=Madonna, last=Cicone
 * - "Madonna Louise Cicone" → first=Madonna, middle=Louise, last=Cicone
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{GxError, Result};

/// Parsed name parts of a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl PersonName {
    /// Parse a full name
    ///
    /// # Errors
    /// Returns `GxError::InvalidArgument` with the message
    /// `"fullName cannot be an empty string"` if the input is empty or blank.
    ///
    /// # Example
    /// ```
    /// use gx_core::PersonName;
    ///
    /// let name = PersonName::parse("Ada Lovelace").unwrap();
    /// assert_eq!(name.first_name, "Ada");
    /// assert_eq!(name.last_name.as_deref(), Some("Lovelace"));
    /// ```
    pub fn parse(full_name: &str) -> Result<Self> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Err(GxError::empty_full_name()),
            [first] => Ok(Self {
                first_name: first.to_string(),
                middle_name: None,
                last_name: None,
            }),
            [first, last] => Ok(Self {
                first_name: first.to_string(),
                middle_name: None,
                last_name: Some(last.to_string()),
            }),
            [first, middle, .., last] => Ok(Self {
                first_name: first.to_string(),
                middle_name: Some(middle.to_string()),
                last_name: Some(last.to_string()),
            }),
        }
    }

    /// Iterate over the parts that are present, in order
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first_name.as_str())
            .chain(self.middle_name.as_deref())
            .chain(self.last_name.as_deref())
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.parts().collect();
        write!(f, "{}", joined.join(" "))
    }
}
