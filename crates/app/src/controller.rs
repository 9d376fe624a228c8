//! Actuation controller — debounced, re-entrancy-safe threshold actuation.
//!
//! The controller consumes telemetry readings and, when one satisfies
//! the policy, runs a timed actuation cycle: publish ON, hold, publish
//! OFF, cooldown. Readings that arrive while a cycle is in flight are
//! dropped — rapid successive triggers must not spawn concurrent cycles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sprout_domain::command::ActuationCommand;
use sprout_domain::policy::ActuationPolicy;
use sprout_domain::state::ControllerState;
use sprout_domain::telemetry::TelemetryReading;

use crate::ports::CommandPublisher;

/// Debounced actuation controller governing exactly one actuator.
///
/// Cloning is cheap — clones share the same state and policy, so a
/// clone can be handed to every context that delivers telemetry.
pub struct ActuationController<P> {
    inner: Arc<Inner<P>>,
}

struct Inner<P> {
    policy: ActuationPolicy,
    publisher: P,
    /// `true` while an actuation cycle is in flight. The check-then-set
    /// on trigger is a single `compare_exchange`, so two overlapping
    /// cycles are impossible.
    busy: AtomicBool,
}

impl<P> Clone for ActuationController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> ActuationController<P>
where
    P: CommandPublisher + Send + Sync + 'static,
{
    /// Create a controller with the given policy and command publisher.
    pub fn new(policy: ActuationPolicy, publisher: P) -> Self {
        Self {
            inner: Arc::new(Inner {
                policy,
                publisher,
                busy: AtomicBool::new(false),
            }),
        }
    }

    /// The policy this controller was built with.
    #[must_use]
    pub fn policy(&self) -> &ActuationPolicy {
        &self.inner.policy
    }

    /// Current state of the actuation state machine.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        if self.inner.busy.load(Ordering::Acquire) {
            ControllerState::Actuating
        } else {
            ControllerState::Idle
        }
    }

    /// Feed one telemetry reading into the controller.
    ///
    /// Fire-and-forget: this never fails from the caller's perspective
    /// and never blocks on the cycle's hold/cooldown periods. While a
    /// cycle is in flight the reading is dropped (debounce). Otherwise,
    /// if the reading satisfies the policy, the controller transitions
    /// to `Actuating` and runs the cycle on its own tokio task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_telemetry(&self, reading: &TelemetryReading) {
        if !self.inner.policy.triggers(reading.value) {
            tracing::trace!(value = reading.value, "reading within bounds");
            return;
        }

        // Idle -> Actuating must be atomic; a lost race means another
        // cycle is already in flight and this trigger is suppressed.
        if self
            .inner
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(value = reading.value, "cycle in flight, reading dropped");
            return;
        }

        tracing::info!(
            value = reading.value,
            threshold = self.inner.policy.threshold,
            "threshold crossed, starting actuation cycle"
        );
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run_cycle().await });
    }
}

impl<P: CommandPublisher> Inner<P> {
    /// Run one actuation cycle to completion.
    ///
    /// Publish failures are logged and the cycle still proceeds: the
    /// OFF command is always attempted and `busy` is always cleared, so
    /// a transient transport error can never leave the controller
    /// permanently `Actuating`.
    async fn run_cycle(&self) {
        if let Err(err) = self.publisher.publish(ActuationCommand::on()).await {
            tracing::warn!(%err, "failed to publish ON command");
        }
        tokio::time::sleep(self.policy.hold).await;
        if let Err(err) = self.publisher.publish(ActuationCommand::off()).await {
            tracing::warn!(%err, "failed to publish OFF command");
        }
        tokio::time::sleep(self.policy.cooldown).await;
        self.busy.store(false, Ordering::Release);
        tracing::debug!("actuation cycle complete, controller idle");
    }
}
