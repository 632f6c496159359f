//! Contact profiles

use crate::core::types::ContactId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactProfile {
    pub name: &'static str,
    pub role: &'static str,
    /// First line shown when an empty chat is opened
    pub greeting: &'static str,
}

pub fn profile(contact: ContactId) -> ContactProfile {
    match contact {
        ContactId::DrugDealer => ContactProfile {
            name: "Patrão",
            role: "Supplier",
            greeting: "Keep the money moving.",
        },
        ContactId::Hacker => ContactProfile {
            name: "H4CK3R",
            role: "Data sales",
            greeting: "Got new packs.",
        },
        ContactId::Lawyer => ContactProfile {
            name: "Dr. Saul",
            role: "Legal",
            greeting: "How can I help?",
        },
        ContactId::Judge => ContactProfile {
            name: "Dr. Gilmar",
            role: "Judiciary",
            greeting: "How can I help?",
        },
        ContactId::Deputy => ContactProfile {
            name: "Dep. Motta",
            role: "Campaign",
            greeting: "I need donations for the campaign.",
        },
    }
}
