//! Scripted story events, evaluated in table order

use crate::core::types::ContactId;
use crate::narrative::condition::Condition;
use crate::narrative::scripted::{Payload, ScriptedEvent};

pub fn standard_events() -> Vec<ScriptedEvent> {
    vec![
        ScriptedEvent::new(
            "meet_hacker",
            Condition::DayAfter(1),
            Payload::message(ContactId::Hacker, "Identity packs available."),
        ),
        ScriptedEvent::new(
            "meet_lawyer",
            Condition::SuspicionAbove(15.0),
            Payload::Multi(vec![
                Payload::UnlockContact(ContactId::Lawyer),
                Payload::message(
                    ContactId::Lawyer,
                    "Trouble with the law? I fix that. I know the right people.",
                ),
            ]),
        ),
        ScriptedEvent::new(
            "meet_judge",
            Condition::ContactUnlocked(ContactId::Judge),
            Payload::message(
                ContactId::Judge,
                "Doctor, I noticed some unusual activity. Shall we talk before the prosecutors do?",
            ),
        ),
        ScriptedEvent::new(
            "meet_deputy",
            Condition::TotalWashedAbove(5_000_000.0),
            Payload::Multi(vec![
                Payload::UnlockContact(ContactId::Deputy),
                Payload::message(
                    ContactId::Deputy,
                    "Election season, friend. I need some 'logistical support'.",
                ),
            ]),
        ),
        ScriptedEvent::new(
            "hacker_wipe_offer",
            Condition::LevelAtLeast(1),
            Payload::Multi(vec![
                Payload::UnlockOption("hacker_wipe_logs".into()),
                Payload::message(
                    ContactId::Hacker,
                    "You're moving real money now. 50-packs are open, and I can scrub logs for a price.",
                ),
            ]),
        ),
        ScriptedEvent::new(
            "hacker_bulk_offer",
            Condition::LevelAtLeast(2),
            Payload::message(ContactId::Hacker, "Hundred-identity packs are open for you."),
        ),
    ]
}
