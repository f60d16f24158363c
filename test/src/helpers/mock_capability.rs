use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use stamina_shared::{CapabilityError, StaminaCapability};

/// Player handle used throughout the tests
pub type TestPlayer = u64;

/// One recorded call into a [`MockCapability`]
#[derive(Clone, Debug, PartialEq)]
pub enum CapabilityCall {
    Consume {
        player: TestPlayer,
        amount: f32,
        dry_run: bool,
    },
    StartDrain {
        player: TestPlayer,
        action_id: String,
        amount_per_second: f32,
    },
    StopDrain {
        player: TestPlayer,
        action_id: String,
    },
    Drain {
        player: TestPlayer,
        amount_per_second: f32,
        delta_time: f32,
    },
    CurrentStamina {
        player: TestPlayer,
    },
    MaxStamina {
        player: TestPlayer,
    },
    IsExhausted {
        player: TestPlayer,
    },
    CanPerformAction {
        player: TestPlayer,
    },
}

/// How every call into a [`MockCapability`] ends
#[derive(Clone, Debug, PartialEq)]
pub enum FailureMode {
    None,
    Error(String),
    Panic(String),
}

/// Stamina subsystem stand-in that records every call it receives
pub struct MockCapability {
    calls: Mutex<Vec<CapabilityCall>>,
    failure: Mutex<FailureMode>,
    consume_result: AtomicBool,
    current: f32,
    max: f32,
    exhausted: bool,
}

impl MockCapability {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(FailureMode::None),
            consume_result: AtomicBool::new(true),
            current: 80.0,
            max: 100.0,
            exhausted: false,
        }
    }

    pub fn with_stamina(mut self, current: f32, max: f32) -> Self {
        self.current = current;
        self.max = max;
        self.exhausted = current <= 0.0;
        self
    }

    /// Every call returns `CapabilityError::Failed(detail)`
    pub fn failing(self, detail: &str) -> Self {
        self.set_failure(FailureMode::Error(detail.to_string()));
        self
    }

    /// Every call panics with `detail`
    pub fn panicking(self, detail: &str) -> Self {
        self.set_failure(FailureMode::Panic(detail.to_string()));
        self
    }

    pub fn set_failure(&self, failure: FailureMode) {
        *self.failure.lock().unwrap() = failure;
    }

    /// What `consume_stamina` answers from now on
    pub fn set_consume_result(&self, allowed: bool) {
        self.consume_result.store(allowed, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<CapabilityCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: CapabilityCall) -> Result<(), CapabilityError> {
        self.calls.lock().unwrap().push(call);

        // release the lock before panicking
        let failure = self.failure.lock().unwrap().clone();
        match failure {
            FailureMode::None => Ok(()),
            FailureMode::Error(detail) => Err(CapabilityError::failed(detail)),
            FailureMode::Panic(detail) => panic!("{}", detail),
        }
    }
}

impl Default for MockCapability {
    fn default() -> Self {
        Self::new()
    }
}

impl StaminaCapability<TestPlayer> for MockCapability {
    fn consume_stamina(
        &self,
        player: &TestPlayer,
        amount: f32,
        dry_run: bool,
    ) -> Result<bool, CapabilityError> {
        self.record(CapabilityCall::Consume {
            player: *player,
            amount,
            dry_run,
        })?;
        Ok(self.consume_result.load(Ordering::SeqCst))
    }

    fn start_stamina_drain(
        &self,
        player: &TestPlayer,
        action_id: &str,
        amount_per_second: f32,
    ) -> Result<bool, CapabilityError> {
        self.record(CapabilityCall::StartDrain {
            player: *player,
            action_id: action_id.to_string(),
            amount_per_second,
        })?;
        Ok(true)
    }

    fn stop_stamina_drain(&self, player: &TestPlayer, action_id: &str) -> Result<(), CapabilityError> {
        self.record(CapabilityCall::StopDrain {
            player: *player,
            action_id: action_id.to_string(),
        })
    }

    fn drain_stamina(
        &self,
        player: &TestPlayer,
        amount_per_second: f32,
        delta_time: f32,
    ) -> Result<bool, CapabilityError> {
        self.record(CapabilityCall::Drain {
            player: *player,
            amount_per_second,
            delta_time,
        })?;
        Ok(self.current >= amount_per_second * delta_time)
    }

    fn current_stamina(&self, player: &TestPlayer) -> Result<f32, CapabilityError> {
        self.record(CapabilityCall::CurrentStamina { player: *player })?;
        Ok(self.current)
    }

    fn max_stamina(&self, player: &TestPlayer) -> Result<f32, CapabilityError> {
        self.record(CapabilityCall::MaxStamina { player: *player })?;
        Ok(self.max)
    }

    fn is_exhausted(&self, player: &TestPlayer) -> Result<bool, CapabilityError> {
        self.record(CapabilityCall::IsExhausted { player: *player })?;
        Ok(self.exhausted)
    }

    fn can_perform_stamina_action(&self, player: &TestPlayer) -> Result<bool, CapabilityError> {
        self.record(CapabilityCall::CanPerformAction { player: *player })?;
        Ok(!self.exhausted)
    }
}
