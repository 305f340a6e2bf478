use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use bell_core::keymap::Digit;
use bell_session::{ConversionRequest, EventLog, HostEvent, InputSession};

use super::host::dispatch;
use super::resources::shared_keymap;
use super::{
    BellConversion, BellConversionRequest, BellConverter, BellError, BellHost, BellMode,
    BellSnapshot,
};

/// One keyboard session.
///
/// Neither foreign callback runs under the session lock. Host side effects
/// are recorded while locked and replayed afterwards, and `converter` is
/// called between two lock scopes, so both may call back into the session.
#[derive(uniffi::Object)]
pub struct BellSession {
    host: Option<Arc<dyn BellHost>>,
    converter: Option<Arc<dyn BellConverter>>,
    /// Set when the host drives conversion through `take_conversion_request`.
    host_defers: AtomicBool,
    session: Mutex<InputSession<EventLog>>,
}

#[uniffi::export]
impl BellSession {
    #[uniffi::constructor]
    pub fn new(
        mode: BellMode,
        converter: Option<Arc<dyn BellConverter>>,
        host: Option<Arc<dyn BellHost>>,
    ) -> Arc<Self> {
        let mut session = InputSession::new(shared_keymap(), mode.into(), None, EventLog::new());
        // Conversion always goes through requests; see `with_session`
        session.set_defer_conversion(true);
        debug!(
            ?mode,
            has_host = host.is_some(),
            has_converter = converter.is_some(),
            "session created"
        );
        Arc::new(Self {
            host,
            converter,
            host_defers: AtomicBool::new(false),
            session: Mutex::new(session),
        })
    }

    pub fn press_digit(&self, digit: u8) -> Result<(), BellError> {
        let digit = Digit::new(digit).ok_or_else(|| BellError::InvalidInput {
            msg: format!("digit out of range: {digit}"),
        })?;
        self.with_session(|s| s.press_digit(digit));
        Ok(())
    }

    pub fn delete_last_character(&self) {
        self.with_session(|s| s.delete_last_character());
    }

    pub fn confirm_input(&self) {
        self.with_session(|s| s.confirm_input());
    }

    pub fn select_candidate(&self, candidate: String) {
        self.with_session(|s| s.select_candidate(&candidate));
    }

    pub fn clear_committed(&self) {
        self.lock().clear_committed();
    }

    pub fn set_direct_input(&self, enabled: bool) {
        self.lock().set_direct_input(enabled);
    }

    /// Leave conversion requests for the host instead of resolving them
    /// with the session's converter after each call.
    pub fn set_defer_conversion(&self, enabled: bool) {
        self.host_defers.store(enabled, Ordering::Relaxed);
    }

    pub fn take_conversion_request(&self) -> Option<BellConversionRequest> {
        self.lock().take_conversion_request().map(Into::into)
    }

    /// Returns `false` if the result arrived after the composition moved on.
    pub fn receive_conversion(
        &self,
        reading: String,
        generation: u64,
        conversion: BellConversion,
    ) -> bool {
        self.lock()
            .receive_conversion(&reading, generation, conversion.into())
    }

    pub fn is_composing(&self) -> bool {
        self.lock().is_composing()
    }

    pub fn display_text(&self) -> String {
        self.lock().display_text()
    }

    pub fn snapshot(&self) -> BellSnapshot {
        self.lock().snapshot().into()
    }
}

impl BellSession {
    fn lock(&self) -> MutexGuard<'_, InputSession<EventLog>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_session(&self, f: impl FnOnce(&mut InputSession<EventLog>)) {
        let (mut events, request) = {
            let mut session = self.lock();
            f(&mut session);
            let request = if self.host_defers.load(Ordering::Relaxed) {
                None
            } else {
                session.take_conversion_request()
            };
            (session.sink_mut().take(), request)
        };
        if let Some(request) = request {
            events.extend(self.resolve(request));
        }
        if let Some(host) = &self.host {
            dispatch(host.as_ref(), events);
        }
    }

    /// Run the converter unlocked, then apply its result unless the
    /// composition moved on meanwhile. Without a converter the raw kana
    /// already shown stays.
    fn resolve(&self, request: ConversionRequest) -> Vec<HostEvent> {
        let Some(converter) = &self.converter else {
            return Vec::new();
        };
        let ConversionRequest {
            reading,
            generation,
        } = request;
        let conversion = converter.convert(reading.clone());
        trace!(%reading, best = %conversion.best, "foreign conversion");

        let mut session = self.lock();
        session.receive_conversion(&reading, generation, conversion.into());
        session.sink_mut().take()
    }
}
