//! Tutorial walkthrough shown before the clock starts

use crate::core::types::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub text: &'static str,
    /// UI element the overlay points at
    pub target: Option<&'static str>,
    pub screen: Screen,
}

pub fn standard_tutorial() -> Vec<TutorialStep> {
    vec![
        TutorialStep {
            text: "WELCOME. The cartel trusts you to wash its money. Don't let them down.",
            target: None,
            screen: Screen::Bank,
        },
        TutorialStep {
            text: "This is your DIRTY money. Your job is to turn it CLEAN.",
            target: Some("dirty_display"),
            screen: Screen::Bank,
        },
        TutorialStep {
            text: "For that you need front accounts (CPFs). Open Zep and talk to the Hacker.",
            target: Some("nav_zep"),
            screen: Screen::Bank,
        },
        TutorialStep {
            text: "This is the Hacker. He sells the data we need. Tap him.",
            target: Some("contact_hacker"),
            screen: Screen::Zep,
        },
        TutorialStep {
            text: "Buy 10 CPFs with dirty money. It's a necessary investment.",
            target: Some("btn_buy_10"),
            screen: Screen::Chat,
        },
        TutorialStep {
            text: "Good. Now go back to the Bank to use those CPFs.",
            target: Some("btn_back"),
            screen: Screen::Chat,
        },
        TutorialStep {
            text: "Use CREATE LOAN to package fake debt, then sell it to a bank.",
            target: Some("btn_loan"),
            screen: Screen::Bank,
        },
        TutorialStep {
            text: "Dirty money went down, clean money went up. But WATCH the Suspicion gauge.",
            target: Some("clean_display"),
            screen: Screen::Bank,
        },
    ]
}
