//! Content resolution
//!
//! Pure lookups from menu stage, info topic and reply key to the text sent to a
//! contact. Event-specific differences live here only; the transition tables
//! in [`crate::state::scenarios`] stay identical across events.

pub mod templates;

use crate::models::Stage;
use crate::state::scenarios::{HandoffReason, InfoTopic};

/// Rule placed between sections of a combined text
pub const SECTION_SEPARATOR: &str = "\n\n_____________________________\n\n";

/// Fixed replies, keyed independently of their wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    InvalidOption,
    MenuPrompt,
    MenuCleanupNotice,
    ReservationRequested,
    AgentHandoff,
    Farewell,
    ReturningToMainMenu,
    InactivityReminder,
    InactivityFarewell,
    OperatorTakeover,
    AutomationResumed,
}

impl Reply {
    pub fn text(self) -> &'static str {
        match self {
            Reply::InvalidOption => templates::INVALID_OPTION,
            Reply::MenuPrompt => templates::MENU_PROMPT,
            Reply::MenuCleanupNotice => templates::MENU_CLEANUP_NOTICE,
            Reply::ReservationRequested => templates::RESERVATION_REQUESTED,
            Reply::AgentHandoff => templates::AGENT_HANDOFF,
            Reply::Farewell => templates::FAREWELL,
            Reply::ReturningToMainMenu => templates::RETURNING_TO_MAIN_MENU,
            Reply::InactivityReminder => templates::INACTIVITY_REMINDER,
            Reply::InactivityFarewell => templates::INACTIVITY_FAREWELL,
            Reply::OperatorTakeover => templates::OPERATOR_TAKEOVER,
            Reply::AutomationResumed => templates::AUTOMATION_RESUMED,
        }
    }
}

/// Sections of one event's informational content
struct EventContent {
    shows: &'static str,
    boarding: &'static str,
    /// Package description shown ahead of the transport prices
    package: Option<&'static str>,
    transport: &'static str,
    open_bar: &'static str,
    tickets: Option<&'static str>,
    payment: &'static str,
}

impl EventContent {
    fn schedule(&self) -> String {
        format!("{}\n\n{}", self.shows, self.boarding)
    }

    fn transport_section(&self) -> String {
        match self.package {
            Some(package) => format!("{}\n\n{}", package, self.transport),
            None => self.transport.to_string(),
        }
    }

    fn everything(&self) -> String {
        let mut sections = vec![self.schedule(), self.transport_section(), self.open_bar.to_string()];
        if let Some(tickets) = self.tickets {
            sections.push(tickets.to_string());
        }
        sections.push(self.payment.to_string());
        sections.join(SECTION_SEPARATOR)
    }
}

const BARRETOS: EventContent = EventContent {
    shows: templates::BARRETOS_SHOWS,
    boarding: templates::BARRETOS_BOARDING,
    package: None,
    transport: templates::BARRETOS_TRANSPORT,
    open_bar: templates::BARRETOS_OPEN_BAR,
    tickets: Some(templates::BARRETOS_TICKETS),
    payment: templates::BARRETOS_PAYMENT,
};

const JAGUARIUNA: EventContent = EventContent {
    shows: templates::JAGUARIUNA_SHOWS,
    boarding: templates::JAGUARIUNA_BOARDING,
    package: None,
    transport: templates::JAGUARIUNA_TRANSPORT,
    open_bar: templates::JAGUARIUNA_OPEN_BAR,
    tickets: Some(templates::JAGUARIUNA_TICKETS),
    payment: templates::JAGUARIUNA_PAYMENT,
};

const FEDERAL_FANTASY: EventContent = EventContent {
    shows: templates::FEDERAL_FANTASY_SHOWS,
    boarding: templates::FEDERAL_FANTASY_BOARDING,
    package: None,
    transport: templates::FEDERAL_FANTASY_TRANSPORT,
    open_bar: templates::FEDERAL_FANTASY_OPEN_BAR,
    tickets: Some(templates::FEDERAL_FANTASY_TICKETS),
    payment: templates::FEDERAL_FANTASY_PAYMENT,
};

const REVEILLON: EventContent = EventContent {
    shows: templates::REVEILLON_SHOWS,
    boarding: templates::REVEILLON_BOARDING,
    package: Some(templates::REVEILLON_PACKAGE),
    transport: templates::REVEILLON_TRANSPORT,
    open_bar: templates::REVEILLON_OPEN_BAR,
    tickets: None,
    payment: templates::REVEILLON_PAYMENT,
};

fn event_content(stage: Stage) -> Option<&'static EventContent> {
    match stage {
        Stage::None => None,
        Stage::Barretos => Some(&BARRETOS),
        Stage::Jaguariuna => Some(&JAGUARIUNA),
        Stage::FederalFantasy => Some(&FEDERAL_FANTASY),
        Stage::Reveillon => Some(&REVEILLON),
    }
}

/// Menu text for a stage; `Stage::None` is the main menu
pub fn menu_text(stage: Stage) -> &'static str {
    match stage {
        Stage::None => templates::MAIN_MENU,
        Stage::Barretos => templates::BARRETOS_MENU,
        Stage::Jaguariuna => templates::JAGUARIUNA_MENU,
        Stage::FederalFantasy => templates::FEDERAL_FANTASY_MENU,
        Stage::Reveillon => templates::REVEILLON_MENU,
    }
}

/// Message sent when the main menu hands the contact to an operator
pub fn handoff_text(reason: HandoffReason) -> &'static str {
    match reason {
        HandoffReason::ReservationEnquiry => templates::RESERVATION_ENQUIRY_HANDOFF,
        HandoffReason::PaymentProof => templates::PAYMENT_PROOF_HANDOFF,
        HandoffReason::Agent => templates::AGENT_HANDOFF,
    }
}

/// Informational text of an event section
pub fn info_text(stage: Stage, topic: InfoTopic) -> Option<String> {
    let content = event_content(stage)?;
    match topic {
        InfoTopic::Everything => Some(content.everything()),
        InfoTopic::Schedule => Some(content.schedule()),
        InfoTopic::TransportAndBar => Some(format!(
            "{}{}{}",
            content.transport_section(),
            SECTION_SEPARATOR,
            content.open_bar
        )),
        InfoTopic::Tickets => content.tickets.map(str::to_string),
        InfoTopic::Payment => Some(content.payment.to_string()),
    }
}
