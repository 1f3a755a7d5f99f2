// ## 📂 File: `src/classify/classifier.rs`

use tracing::{debug, info};

use crate::classify::probe::Probe;
use crate::classify::types::{Classified, PayloadKind};
use crate::crypto::envelope::decrypt;
use crate::record::RecoveredValue;
use crate::types::Result;

/// Ordered probe chain followed by the decryptor fallback.
#[derive(Debug, Clone)]
pub struct Classifier {
    probes: Vec<Probe>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self { probes: Probe::DEFAULT_ORDER.to_vec() }
    }
}

impl Classifier {
    /// Custom probe order. Receivers use [`Classifier::default`]; this exists so the
    /// priority contract can be exercised in isolation.
    pub fn with_probes(probes: impl IntoIterator<Item = Probe>) -> Self {
        Self { probes: probes.into_iter().collect() }
    }

    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// First probe that accepts `text`, if any. Never errors.
    pub fn probe(&self, text: &str) -> Option<Classified> {
        self.probes.iter().find_map(|p| {
            let hit = p.attempt(text);
            debug!(probe = %p.kind, hit = hit.is_some(), "probe attempted");
            hit.map(|value| Classified::new(p.kind, value))
        })
    }

    /// Full classification. Errors only when an envelope fails to open.
    pub fn classify(&self, text: &str) -> Result<Classified> {
        let classified = match self.probe(text) {
            Some(hit) => hit,
            None => match decrypt(text)? {
                Some(plain) => Classified::new(PayloadKind::Decrypted, RecoveredValue::Text(plain)),
                None => Classified::new(PayloadKind::PlainText, RecoveredValue::Text(text.to_string())),
            },
        };
        info!(kind = %classified.kind, "received data classified");
        Ok(classified)
    }
}

/// Classify with the default probe order.
pub fn classify(text: &str) -> Result<Classified> {
    Classifier::default().classify(text)
}
