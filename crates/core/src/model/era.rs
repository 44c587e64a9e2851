use serde::{Deserialize, Serialize};

/// Identifier selecting a consistent snapshot of conditions data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GlobalTag(String);

impl GlobalTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GlobalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobalTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

/// Run-era configuration handle consumed by the host framework.
///
/// `modifiers` lists process-modifier names the framework applies alongside
/// the era when building a processing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EraDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl EraDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(name: impl Into<String>, modifiers: &[&str]) -> Self {
        Self {
            name: name.into(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for EraDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}+{}", self.name, self.modifiers.join("+"))
        }
    }
}
