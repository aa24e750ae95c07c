//! Menu transition tables
//!
//! Declarative mapping of (stage, option) to the action the dispatcher performs.
//! The event menus share one layout; Réveillon has no tickets entry, which
//! shifts every later option up by one. Texts are resolved in [`crate::content`].

use serde::Serialize;
use crate::models::Stage;

/// Informational section of an event menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfoTopic {
    /// Every section combined
    Everything,
    /// Dates, boarding points and times
    Schedule,
    /// Transport and open bar service
    TransportAndBar,
    Tickets,
    Payment,
}

/// Why automation hands the conversation to an operator from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandoffReason {
    ReservationEnquiry,
    PaymentProof,
    Agent,
}

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    OpenEvent(Stage),
    Handoff(HandoffReason),
}

/// Event menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Info(InfoTopic),
    ReserveSlot,
    TalkToAgent,
    BackToMainMenu,
    EndSession,
}

/// Answers to the post-content prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    ShowEventMenu,
    TalkToAgent,
    EndSession,
}

const MAIN_MENU: [MainMenuAction; 7] = [
    MainMenuAction::OpenEvent(Stage::Barretos),
    MainMenuAction::OpenEvent(Stage::Jaguariuna),
    MainMenuAction::OpenEvent(Stage::FederalFantasy),
    MainMenuAction::OpenEvent(Stage::Reveillon),
    MainMenuAction::Handoff(HandoffReason::ReservationEnquiry),
    MainMenuAction::Handoff(HandoffReason::PaymentProof),
    MainMenuAction::Handoff(HandoffReason::Agent),
];

const EVENT_MENU: [EventAction; 9] = [
    EventAction::Info(InfoTopic::Everything),
    EventAction::Info(InfoTopic::Schedule),
    EventAction::Info(InfoTopic::TransportAndBar),
    EventAction::Info(InfoTopic::Tickets),
    EventAction::Info(InfoTopic::Payment),
    EventAction::ReserveSlot,
    EventAction::TalkToAgent,
    EventAction::BackToMainMenu,
    EventAction::EndSession,
];

const EVENT_MENU_WITHOUT_TICKETS: [EventAction; 8] = [
    EventAction::Info(InfoTopic::Everything),
    EventAction::Info(InfoTopic::Schedule),
    EventAction::Info(InfoTopic::TransportAndBar),
    EventAction::Info(InfoTopic::Payment),
    EventAction::ReserveSlot,
    EventAction::TalkToAgent,
    EventAction::BackToMainMenu,
    EventAction::EndSession,
];

/// Look up a 1-based option in a table
fn numbered<T: Copy>(table: &[T], option: u8) -> Option<T> {
    let index = usize::from(option).checked_sub(1)?;
    table.get(index).copied()
}

/// Action for a main menu option
pub fn main_menu_action(option: u8) -> Option<MainMenuAction> {
    numbered(&MAIN_MENU, option)
}

/// Option layout of an event menu; empty for the main menu stage
pub fn event_menu(stage: Stage) -> &'static [EventAction] {
    match stage {
        Stage::None => &[],
        Stage::Reveillon => &EVENT_MENU_WITHOUT_TICKETS,
        Stage::Barretos | Stage::Jaguariuna | Stage::FederalFantasy => &EVENT_MENU,
    }
}

/// Action for an option of the given event menu
pub fn event_action(stage: Stage, option: u8) -> Option<EventAction> {
    numbered(event_menu(stage), option)
}

/// Action for an answer to the post-content prompt
pub fn prompt_action(option: u8) -> Option<PromptAction> {
    match option {
        1 => Some(PromptAction::ShowEventMenu),
        2 => Some(PromptAction::TalkToAgent),
        0 => Some(PromptAction::EndSession),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_table() {
        assert_eq!(main_menu_action(1), Some(MainMenuAction::OpenEvent(Stage::Barretos)));
        assert_eq!(main_menu_action(2), Some(MainMenuAction::OpenEvent(Stage::Jaguariuna)));
        assert_eq!(main_menu_action(4), Some(MainMenuAction::OpenEvent(Stage::Reveillon)));
        assert_eq!(main_menu_action(6), Some(MainMenuAction::Handoff(HandoffReason::PaymentProof)));
        assert_eq!(main_menu_action(0), None);
        assert_eq!(main_menu_action(8), None);
    }

    #[test]
    fn test_event_tables() {
        assert_eq!(event_action(Stage::Barretos, 4), Some(EventAction::Info(InfoTopic::Tickets)));
        assert_eq!(event_action(Stage::Barretos, 9), Some(EventAction::EndSession));
        assert_eq!(event_action(Stage::Reveillon, 4), Some(EventAction::Info(InfoTopic::Payment)));
        assert_eq!(event_action(Stage::Reveillon, 7), Some(EventAction::BackToMainMenu));
        assert_eq!(event_action(Stage::Reveillon, 8), Some(EventAction::EndSession));
        assert_eq!(event_action(Stage::Reveillon, 9), None);
        assert_eq!(event_action(Stage::None, 1), None);
        assert_eq!(event_action(Stage::Jaguariuna, 0), None);
    }

    #[test]
    fn test_prompt_table() {
        assert_eq!(prompt_action(1), Some(PromptAction::ShowEventMenu));
        assert_eq!(prompt_action(2), Some(PromptAction::TalkToAgent));
        assert_eq!(prompt_action(0), Some(PromptAction::EndSession));
        assert_eq!(prompt_action(7), None);
    }
}
