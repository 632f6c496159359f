//! Outgoing dialogue options per contact

use crate::core::types::ContactId;
use crate::narrative::condition::Condition;
use crate::narrative::dialogue::{DialogueOption, Reply};
use crate::narrative::effect::Effect;

/// Option lists keyed by contact through an exhaustive match
#[derive(Debug, Clone, Default)]
pub struct DialogueTable {
    pub drug_dealer: Vec<DialogueOption>,
    pub hacker: Vec<DialogueOption>,
    pub lawyer: Vec<DialogueOption>,
    pub judge: Vec<DialogueOption>,
    pub deputy: Vec<DialogueOption>,
}

impl DialogueTable {
    pub fn options(&self, contact: ContactId) -> &[DialogueOption] {
        match contact {
            ContactId::DrugDealer => &self.drug_dealer,
            ContactId::Hacker => &self.hacker,
            ContactId::Lawyer => &self.lawyer,
            ContactId::Judge => &self.judge,
            ContactId::Deputy => &self.deputy,
        }
    }

    pub fn find(&self, contact: ContactId, option_id: &str) -> Option<&DialogueOption> {
        self.options(contact).iter().find(|o| o.id == option_id)
    }

    pub fn standard() -> Self {
        Self {
            drug_dealer: vec![
                DialogueOption::new("dealer_status", "How much do I still owe?", Reply::DebtReport),
                DialogueOption::new(
                    "dealer_rank",
                    "Where do I stand with you?",
                    Reply::LevelReport,
                ),
                DialogueOption::new(
                    "dealer_extension",
                    "I need more time on the oldest bag.",
                    Reply::text("Fifteen days. It costs you, and we don't forget."),
                )
                .when(Condition::All(vec![
                    Condition::HasDebt,
                    Condition::CleanAtLeast(100_000.0),
                ]))
                .with_effect(Effect::Multi(vec![
                    Effect::SpendClean(100_000.0),
                    Effect::ExtendOldestBatch(15),
                    Effect::AdjustPressure(5.0),
                ])),
            ],
            hacker: vec![
                DialogueOption::new(
                    "hacker_prices",
                    "What do you have?",
                    Reply::text("Ten identities for 50k. Bigger packs once you've proven yourself."),
                ),
                DialogueOption::new("hacker_heat", "Am I on anyone's radar?", Reply::HeatReport),
                DialogueOption::new(
                    "hacker_wipe_logs",
                    "Scrub the bank logs.",
                    Reply::text("Logs gone. Nobody saw anything."),
                )
                .when(Condition::All(vec![
                    Condition::unlocked("hacker_wipe_logs"),
                    Condition::CleanAtLeast(250_000.0),
                ]))
                .with_effect(Effect::Multi(vec![
                    Effect::SpendClean(250_000.0),
                    Effect::AdjustSuspicion(-8.0),
                ])),
            ],
            lawyer: vec![
                DialogueOption::new("lawyer_advice", "How bad is it?", Reply::HeatReport),
                DialogueOption::new(
                    "lawyer_retainer",
                    "Put yourself on retainer.",
                    Reply::text("Paperwork filed. Some questions will go unasked."),
                )
                .when(Condition::CleanAtLeast(150_000.0))
                .with_effect(Effect::Multi(vec![
                    Effect::SpendClean(150_000.0),
                    Effect::AdjustSuspicion(-5.0),
                ]))
                .unlocking(&["lawyer_judge"]),
                DialogueOption::new(
                    "lawyer_judge",
                    "I need someone higher up.",
                    Reply::text("There's a judge who owes me. He'll reach out."),
                )
                .when(Condition::All(vec![
                    Condition::unlocked("lawyer_judge"),
                    Condition::SuspicionAbove(20.0),
                    Condition::not(Condition::ContactUnlocked(ContactId::Judge)),
                ]))
                .with_effect(Effect::UnlockContact(ContactId::Judge)),
            ],
            judge: vec![DialogueOption::new(
                "judge_favor",
                "Can the investigation slow down?",
                Reply::text("The investigation has... lost momentum."),
            )
            .when(Condition::CleanAtLeast(500_000.0))
            .with_effect(Effect::Multi(vec![
                Effect::SpendClean(500_000.0),
                Effect::AdjustSuspicion(-25.0),
            ]))],
            deputy: vec![
                DialogueOption::new(
                    "deputy_donation",
                    "Consider it a donation.",
                    Reply::text("Your contribution to democracy is noted."),
                )
                .when(Condition::CleanAtLeast(1_000_000.0))
                .with_effect(Effect::Multi(vec![
                    Effect::SpendClean(1_000_000.0),
                    Effect::AdjustPressure(-20.0),
                    Effect::AdjustSuspicion(-10.0),
                ]))
                .unlocking(&["deputy_contract"]),
                DialogueOption::new(
                    "deputy_contract",
                    "Any public works that need funding?",
                    Reply::text("A bridge to nowhere. Invoices clear next week."),
                )
                .when(Condition::All(vec![
                    Condition::unlocked("deputy_contract"),
                    Condition::DirtyAtLeast(2_000_000.0),
                ]))
                .with_effect(Effect::Multi(vec![
                    Effect::SpendDirty(2_000_000.0),
                    Effect::GainClean(1_600_000.0),
                    Effect::AdjustSuspicion(6.0),
                ])),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_ids_unique_per_contact() {
        let table = DialogueTable::standard();
        for contact in ContactId::ALL {
            let options = table.options(contact);
            assert!(!options.is_empty(), "{} has no options", contact);
            for (i, a) in options.iter().enumerate() {
                assert!(options[i + 1..].iter().all(|b| b.id != a.id));
            }
        }
    }

    #[test]
    fn test_find() {
        let table = DialogueTable::standard();
        assert!(table.find(ContactId::Judge, "judge_favor").is_some());
        assert!(table.find(ContactId::Hacker, "judge_favor").is_none());
    }
}
