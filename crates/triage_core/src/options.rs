//! Typed answer values for the three triage questions.

use std::fmt;
use std::str::FromStr;

use crate::TriageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    National,
    Local,
}

/// What the user is experiencing. `National` is the sentinel recorded when
/// the national shortcut skips the concern question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Crisis,
    Burnout,
    General,
    National,
}

/// The concerns a user can actually pick on step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalConcern {
    Crisis,
    Burnout,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactMethod {
    Phone,
    Text,
}

/// A parsed answer to one of the questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    ResourceType(ResourceType),
    Concern(LocalConcern),
    ContactMethod(ContactMethod),
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::National => "national",
            ResourceType::Local => "local",
        }
    }
}

impl Concern {
    pub fn as_str(self) -> &'static str {
        match self {
            Concern::Crisis => "crisis",
            Concern::Burnout => "burnout",
            Concern::General => "general",
            Concern::National => "national",
        }
    }

    /// The step-2 concern this maps to, or `None` for the national sentinel.
    pub fn local(self) -> Option<LocalConcern> {
        match self {
            Concern::Crisis => Some(LocalConcern::Crisis),
            Concern::Burnout => Some(LocalConcern::Burnout),
            Concern::General => Some(LocalConcern::General),
            Concern::National => None,
        }
    }
}

impl LocalConcern {
    pub const ALL: [LocalConcern; 3] = [
        LocalConcern::Crisis,
        LocalConcern::Burnout,
        LocalConcern::General,
    ];

    pub fn as_str(self) -> &'static str {
        Concern::from(self).as_str()
    }
}

impl From<LocalConcern> for Concern {
    fn from(concern: LocalConcern) -> Self {
        match concern {
            LocalConcern::Crisis => Concern::Crisis,
            LocalConcern::Burnout => Concern::Burnout,
            LocalConcern::General => Concern::General,
        }
    }
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Phone, ContactMethod::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::Text => "text",
        }
    }
}

impl FromStr for ResourceType {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national" => Ok(ResourceType::National),
            "local" => Ok(ResourceType::Local),
            other => Err(TriageError::UnknownOption(other.to_owned())),
        }
    }
}

impl FromStr for LocalConcern {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crisis" => Ok(LocalConcern::Crisis),
            "burnout" => Ok(LocalConcern::Burnout),
            "general" => Ok(LocalConcern::General),
            other => Err(TriageError::UnknownOption(other.to_owned())),
        }
    }
}

impl FromStr for ContactMethod {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(ContactMethod::Phone),
            "text" => Ok(ContactMethod::Text),
            other => Err(TriageError::UnknownOption(other.to_owned())),
        }
    }
}

impl FromStr for Answer {
    type Err = TriageError;

    /// Parses any option value regardless of which step offers it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<ResourceType>() {
            return Ok(Answer::ResourceType(value));
        }
        if let Ok(value) = s.parse::<LocalConcern>() {
            return Ok(Answer::Concern(value));
        }
        if let Ok(value) = s.parse::<ContactMethod>() {
            return Ok(Answer::ContactMethod(value));
        }
        Err(TriageError::UnknownOption(s.to_owned()))
    }
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::ResourceType(value) => value.as_str(),
            Answer::Concern(value) => value.as_str(),
            Answer::ContactMethod(value) => value.as_str(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
