//! Application context
//!
//! Builds every component from the settings, a session store and a transport,
//! sharing the store, the transport and the in-flight registry between them.

use std::sync::Arc;

use crate::config::Settings;
use crate::handlers::control::ControlPlane;
use crate::handlers::messages::SessionDispatcher;
use crate::middleware::InFlightRegistry;
use crate::services::menu::MenuLifecycleManager;
use crate::services::recovery::RecoveryScanner;
use crate::services::supervisor::InactivitySupervisor;
use crate::services::transport::Transport;
use crate::state::storage::SessionStore;
use crate::utils::errors::Result;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub store: Arc<SessionStore>,
    pub transport: Arc<dyn Transport>,
    pub in_flight: InFlightRegistry,
    pub menus: MenuLifecycleManager,
    pub dispatcher: Arc<SessionDispatcher>,
    pub supervisor: Arc<InactivitySupervisor>,
    pub control: Arc<ControlPlane>,
}

impl AppContext {
    pub fn new(settings: Settings, store: Arc<SessionStore>, transport: Arc<dyn Transport>) -> Result<Self> {
        let in_flight = InFlightRegistry::new();
        let menus = MenuLifecycleManager::new(
            store.clone(),
            transport.clone(),
            settings.timing.deletion_delay(),
        );

        let dispatcher = Arc::new(SessionDispatcher::new(
            store.clone(),
            transport.clone(),
            menus.clone(),
            in_flight.clone(),
            settings.timing.clone(),
            settings.behavior.clone(),
        ));

        let supervisor = Arc::new(InactivitySupervisor::new(
            store.clone(),
            transport.clone(),
            in_flight.clone(),
            settings.supervisor.clone(),
        ));

        let control = Arc::new(ControlPlane::new(
            store.clone(),
            transport.clone(),
            menus.clone(),
            &settings.control,
            &settings.timing,
        )?);

        Ok(Self {
            settings,
            store,
            transport,
            in_flight,
            menus,
            dispatcher,
            supervisor,
            control,
        })
    }

    /// Scanner replaying messages received while the process was down
    pub fn recovery(&self) -> RecoveryScanner {
        RecoveryScanner::new(
            self.transport.clone(),
            self.dispatcher.clone(),
            self.settings.timing.human_like_delay(),
        )
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("store", &self.store)
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}
