//! Operator control plane tests

mod helpers;

use assert_matches::assert_matches;
use helpers::*;

use TourBuddy::content::{self, Reply};
use TourBuddy::models::Stage;
use TourBuddy::state::{HandoffReason, InfoTopic};
use TourBuddy::utils::errors::TourBuddyError;
use TourBuddy::utils::helpers::now_millis;
use TourBuddy::HandleOutcome;

fn seed_handoff(app: &TestApp) {
    let mut session = session_at(Stage::Barretos, now_millis());
    session.enter_handoff();
    app.store().insert(USER, session);
}

#[tokio::test(start_paused = true)]
async fn test_activate_resumes_automation_with_main_menu() {
    let app = TestApp::new();
    seed_handoff(&app);

    app.context.control.execute(&format!("!ativarbot {}", USER)).await.unwrap();

    let session = app.session(USER).unwrap();
    assert!(!session.human_handoff);
    assert_eq!(session.stage, Stage::None);
    assert_eq!(app.transport.texts_to(USER), vec![content::menu_text(Stage::None).to_string()]);
    // The main menu is never tracked for deletion
    assert!(session.last_menu_message_id.is_none());
    assert_eq!(app.backend.save_count(), 1);

    // The contact can now pick an event
    assert_eq!(app.say(USER, "1").await, HandleOutcome::Processed);
    assert_eq!(app.session(USER).unwrap().stage, Stage::Barretos);
}

#[tokio::test(start_paused = true)]
async fn test_reactivate_is_silent_and_next_message_greets() {
    let app = TestApp::new();
    seed_handoff(&app);

    app.context.control.execute(&format!("reactivate {}", USER)).await.unwrap();

    assert!(app.transport.sent().is_empty());
    let session = app.session(USER).unwrap();
    assert!(!session.human_handoff);
    assert!(!session.greeted);

    // Any text, even a valid option, is answered with the main menu
    app.say(USER, "2").await;
    assert_eq!(app.transport.texts_to(USER), vec![content::menu_text(Stage::None).to_string()]);
    assert_eq!(app.session(USER).unwrap().stage, Stage::None);
}

#[tokio::test(start_paused = true)]
async fn test_deactivate_hands_contact_to_operator() {
    let app = TestApp::new();
    let mut session = session_at(Stage::FederalFantasy, now_millis());
    session.arm_prompt(now_millis());
    app.store().insert(USER, session);

    app.context.control.execute(&format!("desativarbot {}", USER)).await.unwrap();

    let session = app.session(USER).unwrap();
    assert!(session.human_handoff);
    assert!(!session.awaiting_menu_prompt);
    assert_eq!(app.transport.texts_to(USER), vec![Reply::OperatorTakeover.text().to_string()]);

    app.transport.clear();
    assert_eq!(app.say(USER, "1").await, HandleOutcome::Ignored);
    assert!(app.transport.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_act_opens_event_menu_for_contact() {
    let app = TestApp::new();
    seed_handoff(&app);

    let summary = app.context.control.execute(&format!("act {} 2", USER)).await.unwrap();
    assert!(summary.contains("jaguariuna"));

    assert_eq!(
        app.transport.texts_to(USER),
        vec![
            Reply::AutomationResumed.text().to_string(),
            content::menu_text(Stage::Jaguariuna).to_string(),
        ]
    );
    let session = app.session(USER).unwrap();
    assert!(!session.human_handoff);
    assert_eq!(session.stage, Stage::Jaguariuna);
    assert_eq!(session.last_menu_message_id, Some(app.transport.sent()[1].handle.clone()));

    // The next option is read against the Jaguariuna menu
    app.transport.clear();
    app.say(USER, "4").await;
    assert_eq!(
        app.transport.texts_to(USER)[0],
        content::info_text(Stage::Jaguariuna, InfoTopic::Tickets).unwrap()
    );
}

#[tokio::test(start_paused = true)]
async fn test_act_handoff_option_uses_main_menu_text() {
    let app = TestApp::new();
    app.store().insert(USER, session_at(Stage::None, now_millis()));

    app.context.control.execute(&format!("!acao {} 6", USER)).await.unwrap();

    assert_eq!(
        app.transport.texts_to(USER),
        vec![content::handoff_text(HandoffReason::PaymentProof).to_string()]
    );
    assert!(app.session(USER).unwrap().human_handoff);
}

#[tokio::test(start_paused = true)]
async fn test_act_zero_sends_main_menu() {
    let app = TestApp::new();
    seed_handoff(&app);

    app.context.control.execute(&format!("act {} 0", USER)).await.unwrap();

    let session = app.session(USER).unwrap();
    assert_eq!(session.stage, Stage::None);
    assert!(!session.human_handoff);
    assert_eq!(
        app.transport.last_text().as_deref(),
        Some(content::menu_text(Stage::None))
    );
}

#[tokio::test(start_paused = true)]
async fn test_rejected_commands_change_nothing() {
    let app = TestApp::new();
    seed_handoff(&app);
    let before = app.session(USER).unwrap();

    assert_matches!(
        app.context.control.execute("activate 999").await,
        Err(TourBuddyError::SessionNotFound { .. })
    );
    assert_matches!(
        app.context.control.execute("activate not-a-number").await,
        Err(TourBuddyError::InvalidInput(_))
    );
    assert_matches!(
        app.context.control.execute(&format!("!reboot {}", USER)).await,
        Err(TourBuddyError::UnknownCommand(_))
    );
    assert_matches!(
        app.context.control.execute(&format!("act {} 9", USER)).await,
        Err(TourBuddyError::InvalidInput(_))
    );

    assert_eq!(app.session(USER).unwrap(), before);
    assert!(app.transport.sent().is_empty());
    assert_eq!(app.backend.save_count(), 0);
    assert!(!app.store().contains("999"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_send_is_reported_to_operator() {
    let app = TestApp::new();
    app.store().insert(USER, session_at(Stage::None, now_millis()));
    app.transport.set_fail_sends(true);

    assert_matches!(
        app.context.control.execute(&format!("deactivate {}", USER)).await,
        Err(TourBuddyError::Transport(_))
    );
}
