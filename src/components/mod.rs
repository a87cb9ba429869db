use crate::error::PlannerResult;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, error};

// Export components
pub mod calendar;
pub mod export;
pub mod planner;
pub mod scheduler;
pub mod storage;

// Re-export handles
pub use scheduler::SchedulerHandle;
pub use storage::StorageHandle;

/// Component trait for the long-running actors behind the planner
#[async_trait]
pub trait Component: Send + Sync {
    /// Get the name of the component
    fn name(&self) -> &'static str;

    /// Shutdown the component
    async fn shutdown(&self) -> PlannerResult<()>;
}

/// Manager for all components
#[derive(Default)]
pub struct ComponentManager {
    components: Vec<Box<dyn Component>>,
}

impl fmt::Debug for ComponentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentManager")
            .field("components", &self.names())
            .finish()
    }
}

impl ComponentManager {
    /// Create a new component manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component
    pub fn register<T: Component + 'static>(&mut self, component: T) {
        debug!("Registering component: {}", component.name());
        self.components.push(Box::new(component));
    }

    /// Names of the registered components, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Shutdown all components
    pub async fn shutdown_all(&self) -> PlannerResult<()> {
        debug!("Shutting down all components");

        for component in &self.components {
            debug!("Shutting down component: {}", component.name());

            if let Err(e) = component.shutdown().await {
                // Log error but continue with other components
                error!(
                    "Error shutting down component {}: {:?}",
                    component.name(),
                    e
                );
            }
        }

        Ok(())
    }
}
