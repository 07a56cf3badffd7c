//! Resolved CSS declarations.

use std::fmt;

/// A fully resolved `name: value` pair.
///
/// `value` is either the normalized, space-joined value tokens or a snippet
/// template with `${n}` / `${n:default}` placeholders when the abbreviation
/// carried no value.
///
/// # Examples
///
/// ```
/// use cssabbr::Declaration;
///
/// let decl = Declaration::new("padding", "5px").important();
/// assert_eq!(decl.to_string(), "padding: 5px !important");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Marks the declaration with `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    /// Returns `true` if the value still contains a tab-stop placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.value.contains("${")
    }

    /// Returns a copy with the property name rewritten, keeping value and flag.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: self.value.clone(),
            important: self.important,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}
