//! Inactivity supervisors
//!
//! Two sweeps run on their own timers against the shared session store:
//!
//! - the purge sweep drops sessions nobody touched for a long time;
//! - the reminder sweep nudges contacts who left the post-content prompt
//!   unanswered and closes the session when a reminder was already sent.
//!
//! A handler may change or remove a session while a sweep is running, so every
//! action re-checks the session right before applying. Contacts whose message
//! is in flight are left for the next tick.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::SupervisorConfig;
use crate::content::Reply;
use crate::middleware::InFlightRegistry;
use crate::services::transport::Transport;
use crate::state::storage::SessionStore;
use crate::utils::helpers::now_millis;
use crate::utils::logging::{log_supervisor_action, log_transport_error};

/// Counters of one reminder sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderSweep {
    pub reminders_sent: usize,
    pub sessions_closed: usize,
}

impl ReminderSweep {
    pub fn is_empty(&self) -> bool {
        self.reminders_sent == 0 && self.sessions_closed == 0
    }
}

/// Runs the purge and reminder sweeps
pub struct InactivitySupervisor {
    store: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    in_flight: InFlightRegistry,
    config: SupervisorConfig,
}

impl InactivitySupervisor {
    pub fn new(
        store: Arc<SessionStore>,
        transport: Arc<dyn Transport>,
        in_flight: InFlightRegistry,
        config: SupervisorConfig,
    ) -> Self {
        Self {
            store,
            transport,
            in_flight,
            config,
        }
    }

    /// Remove sessions idle for longer than the session TTL
    ///
    /// Returns the number of removed sessions; the store is persisted once if
    /// anything was removed.
    pub async fn purge_sweep(&self, now: DateTime<Utc>) -> usize {
        let ttl = self.config.session_ttl();
        let mut removed = 0;

        for user_id in self.store.user_ids() {
            if self.in_flight.is_busy(&user_id) {
                continue;
            }
            if self
                .store
                .remove_if(&user_id, |session| session.is_inactive(now, ttl))
                .is_some()
            {
                log_supervisor_action("purge", &user_id, "session_expired");
                removed += 1;
            }
        }

        if removed > 0 {
            self.store.persist().await;
            info!(removed = removed, "Purge sweep removed idle sessions");
        }
        removed
    }

    /// Remind or close sessions whose prompt went unanswered
    pub async fn reminder_sweep(&self, now: DateTime<Utc>) -> ReminderSweep {
        let threshold = self.config.reminder_after();
        let mut sweep = ReminderSweep::default();

        for user_id in self.store.user_ids() {
            if self.in_flight.is_busy(&user_id) {
                debug!(user_id = %user_id, "Skipping contact in flight");
                continue;
            }

            let Some(session) = self.store.get(&user_id) else {
                continue;
            };
            if session.human_handoff || !session.prompt_is_stale(now, threshold) {
                continue;
            }

            if session.reminder_sent {
                if self.close_session(&user_id, now).await {
                    sweep.sessions_closed += 1;
                }
            } else if self.send_reminder(&user_id, now).await {
                sweep.reminders_sent += 1;
            }
        }

        if !sweep.is_empty() {
            info!(
                reminders_sent = sweep.reminders_sent,
                sessions_closed = sweep.sessions_closed,
                "Reminder sweep finished"
            );
        }
        sweep
    }

    /// Mark the reminder as sent, then send it
    ///
    /// The session is changed first so a reply racing the send is never
    /// overwritten; a failed send is logged and not retried.
    async fn send_reminder(&self, user_id: &str, now: DateTime<Utc>) -> bool {
        let threshold = self.config.reminder_after();
        let applied = self
            .store
            .update(user_id, |session| {
                if session.human_handoff || session.reminder_sent || !session.prompt_is_stale(now, threshold) {
                    return false;
                }
                session.reminder_sent = true;
                session.prompt_issued_at = Some(now);
                true
            })
            .unwrap_or(false);

        if !applied {
            return false;
        }

        log_supervisor_action("reminder", user_id, "reminder_sent");
        if let Err(e) = self.transport.send(user_id, Reply::InactivityReminder.text()).await {
            log_transport_error("send", &e.to_string(), Some(user_id));
        }
        self.store.persist().await;
        true
    }

    /// Remove the session, then say goodbye
    async fn close_session(&self, user_id: &str, now: DateTime<Utc>) -> bool {
        let threshold = self.config.reminder_after();
        let removed = self
            .store
            .remove_if(user_id, |session| {
                !session.human_handoff && session.reminder_sent && session.prompt_is_stale(now, threshold)
            })
            .is_some();

        if !removed {
            return false;
        }

        log_supervisor_action("reminder", user_id, "session_closed");
        if let Err(e) = self.transport.send(user_id, Reply::InactivityFarewell.text()).await {
            log_transport_error("send", &e.to_string(), Some(user_id));
        }
        self.store.persist().await;
        true
    }

    /// Spawn both sweeps; the first tick of each comes one period after start
    pub fn start(self: Arc<Self>) -> SupervisorHandle {
        let purge_period = self.config.purge_interval();
        let reminder_period = self.config.reminder_interval();

        let purge = {
            let supervisor = self.clone();
            tokio::spawn(async move {
                let mut ticker = interval_at(Instant::now() + purge_period, purge_period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    supervisor.purge_sweep(now_millis()).await;
                }
            })
        };

        let reminder = {
            let supervisor = self.clone();
            tokio::spawn(async move {
                let mut ticker = interval_at(Instant::now() + reminder_period, reminder_period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    supervisor.reminder_sweep(now_millis()).await;
                }
            })
        };

        info!(
            purge_interval = ?purge_period,
            reminder_interval = ?reminder_period,
            "Inactivity supervisors started"
        );
        SupervisorHandle {
            tasks: vec![purge, reminder],
        }
    }
}

/// Running supervisor loops; dropping the handle stops them
#[derive(Debug)]
pub struct SupervisorHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl Drop for SupervisorHandle {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        debug!("Inactivity supervisors stopped");
    }
}
