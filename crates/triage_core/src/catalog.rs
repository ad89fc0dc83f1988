//! Fixed table of support resources.
//!
//! Every key a completed flow can produce has exactly one record; `lookup`
//! is an exhaustive match, so a missing combination fails to compile.

use serde::Serialize;

use crate::{ContactMethod, LocalConcern, ResourceType, Selections};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub number: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<&'static str>,
    pub label: &'static str,
    pub hours: &'static str,
    pub description: &'static str,
}

/// Address of one catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    National(ContactMethod),
    Local(LocalConcern, ContactMethod),
}

impl ResourceKey {
    /// Builds the key for a completed set of selections.
    ///
    /// The national shortcut never asks for a contact method, so a national
    /// flow without one addresses the phone line. A local flow needs both a
    /// step-2 concern and a contact method, otherwise this returns `None`.
    pub fn from_selections(selections: &Selections) -> Option<ResourceKey> {
        match selections.resource_type? {
            ResourceType::National => Some(ResourceKey::National(
                selections.contact_method.unwrap_or(ContactMethod::Phone),
            )),
            ResourceType::Local => {
                let concern = selections.concern?.local()?;
                Some(ResourceKey::Local(concern, selections.contact_method?))
            }
        }
    }

    /// Every key in the catalog, nationals first.
    pub fn all() -> impl Iterator<Item = ResourceKey> {
        let national = ContactMethod::ALL.into_iter().map(ResourceKey::National);
        let local = LocalConcern::ALL.into_iter().flat_map(|concern| {
            ContactMethod::ALL
                .into_iter()
                .map(move |method| ResourceKey::Local(concern, method))
        });
        national.chain(local)
    }
}

static NATIONAL_PHONE: ResourceRecord = ResourceRecord {
    number: "988",
    instruction: None,
    label: "Suicide & Crisis Lifeline",
    hours: "24/7",
    description: "Free, confidential support for people in distress",
};

static NATIONAL_TEXT: ResourceRecord = ResourceRecord {
    number: "988",
    instruction: Some("Text or message"),
    label: "Crisis Text Line",
    hours: "24/7",
    description: "Connect with a trained crisis counselor",
};

static BURNOUT_PHONE: ResourceRecord = ResourceRecord {
    number: "1-800-273-8255",
    instruction: None,
    label: "Workplace Burnout Hotline",
    hours: "Mon-Fri 9AM-8PM",
    description: "Specialized support for workplace and caregiver burnout",
};

static BURNOUT_TEXT: ResourceRecord = ResourceRecord {
    number: "BURNOUT",
    instruction: Some("Text to 741741"),
    label: "Burnout Text Support",
    hours: "Daily 10AM-10PM",
    description: "Text-based support for burnout and stress management",
};

static CRISIS_PHONE: ResourceRecord = ResourceRecord {
    number: "1-800-784-2433",
    instruction: None,
    label: "Local Crisis Response",
    hours: "24/7",
    description: "Immediate crisis intervention and support",
};

static CRISIS_TEXT: ResourceRecord = ResourceRecord {
    number: "HOME",
    instruction: Some("Text to 741741"),
    label: "Crisis Text Support",
    hours: "24/7",
    description: "24/7 text-based crisis support",
};

static GENERAL_PHONE: ResourceRecord = ResourceRecord {
    number: "1-800-662-4357",
    instruction: None,
    label: "Mental Health Helpline",
    hours: "Mon-Sat 8AM-8PM",
    description: "General mental health support and counseling",
};

static GENERAL_TEXT: ResourceRecord = ResourceRecord {
    number: "HELLO",
    instruction: Some("Text to 741741"),
    label: "Counseling Text Support",
    hours: "Daily 9AM-9PM",
    description: "Text-based counseling and emotional support",
};

pub fn lookup(key: ResourceKey) -> &'static ResourceRecord {
    use ContactMethod::{Phone, Text};
    use LocalConcern::{Burnout, Crisis, General};

    match key {
        ResourceKey::National(Phone) => &NATIONAL_PHONE,
        ResourceKey::National(Text) => &NATIONAL_TEXT,
        ResourceKey::Local(Burnout, Phone) => &BURNOUT_PHONE,
        ResourceKey::Local(Burnout, Text) => &BURNOUT_TEXT,
        ResourceKey::Local(Crisis, Phone) => &CRISIS_PHONE,
        ResourceKey::Local(Crisis, Text) => &CRISIS_TEXT,
        ResourceKey::Local(General, Phone) => &GENERAL_PHONE,
        ResourceKey::Local(General, Text) => &GENERAL_TEXT,
    }
}
