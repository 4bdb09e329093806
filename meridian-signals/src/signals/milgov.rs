use meridian_core::{ISignal, LookupKey, SignalOutput};

/// `.mil` and `.gov` are reserved for the United States government.
pub struct MilGovSignal {
    confidence: f64,
}

impl MilGovSignal {
    pub fn new(confidence: f64) -> Self {
        Self { confidence }
    }
}

impl ISignal for MilGovSignal {
    fn name(&self) -> &str {
        "milgov"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        match key.host() {
            Some(host) if host.ends_with(".mil") || host.ends_with(".gov") => {
                SignalOutput::single("us", self.confidence)
            }
            _ => SignalOutput::none(),
        }
    }
}
