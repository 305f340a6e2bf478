use tracing::{debug, trace};

use bell_core::converter::Conversion;

use super::sink::HostSink;
use super::types::ConversionRequest;
use super::InputSession;

impl<S: HostSink> InputSession<S> {
    pub(super) fn refresh_conversion(&mut self) {
        if self.composition.is_empty() {
            self.composition.candidates.clear();
            self.invalidate_conversion();
            return;
        }

        let reading = self.composition.kana.clone();

        if self.defer_conversion {
            // Raw kana stands in until the caller delivers real candidates
            self.composition
                .candidates
                .set(Conversion::passthrough(&reading));
            self.conversion_generation += 1;
            self.conversion_request = Some(ConversionRequest {
                reading,
                generation: self.conversion_generation,
            });
            return;
        }

        let conversion = match &self.converter {
            Some(converter) => converter
                .convert(&reading)
                .normalized(&reading, self.max_candidates),
            None => Conversion::passthrough(&reading),
        };
        trace!(
            reading = %reading,
            best = %conversion.best,
            n = conversion.candidates.len(),
            "converted"
        );
        self.composition.candidates.set(conversion);
    }

    /// Pending conversion work, if conversion is deferred. Taking it clears it.
    pub fn take_conversion_request(&mut self) -> Option<ConversionRequest> {
        self.conversion_request.take()
    }

    /// Deliver a deferred conversion result.
    ///
    /// Returns `false` and changes nothing if the result is stale: the
    /// composition changed (or was committed) after the request was made.
    pub fn receive_conversion(
        &mut self,
        reading: &str,
        generation: u64,
        conversion: Conversion,
    ) -> bool {
        if generation != self.conversion_generation || self.composition.kana != reading {
            debug!(
                reading,
                generation,
                current = self.conversion_generation,
                "discarding stale conversion"
            );
            return false;
        }
        let conversion = conversion.normalized(reading, self.max_candidates);
        self.composition.candidates.set(conversion);
        true
    }

    pub(super) fn invalidate_conversion(&mut self) {
        self.conversion_generation += 1;
        self.conversion_request = None;
    }
}
