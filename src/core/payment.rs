use super::constants::{DEFAULT_PRICE_BDT, DEFAULT_PRICE_EUR};
use thiserror::Error;

pub const MISSING_TRANSACTION_ALERT: &str =
    "Please enter the Transaction ID or Reference Number to verify your payment.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("a transaction reference is required")]
    MissingTransactionId,
    #[error("the payment modal is not open")]
    NotOpen,
    #[error("a verification is already in progress")]
    Busy,
    #[error("unknown payment tab: {0}")]
    UnknownTab(String),
}

/// File behind a download link and what it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    pub file_name: String,
    pub url: String,
    pub price_bdt: String,
    pub price_eur: String,
}

impl DownloadTarget {
    /// Absent or empty prices fall back to the defaults.
    pub fn new(file_name: &str, url: &str, price_bdt: Option<&str>, price_eur: Option<&str>) -> Self {
        fn or_default(v: Option<&str>, default: &str) -> String {
            match v.map(str::trim) {
                Some(v) if !v.is_empty() => v.to_owned(),
                _ => default.to_owned(),
            }
        }
        Self {
            file_name: file_name.trim().to_owned(),
            url: url.to_owned(),
            price_bdt: or_default(price_bdt, DEFAULT_PRICE_BDT),
            price_eur: or_default(price_eur, DEFAULT_PRICE_EUR),
        }
    }

    pub fn price_label(&self) -> String {
        format!("{} BDT / {} EUR", self.price_bdt, self.price_eur)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Verifying,
    Verified,
}

/// Identifies one open..close span so stale timers can tell they no longer
/// belong to the visible session.
pub type SessionId = u64;

/// Outcome of a finished verification delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedDownload {
    pub url: String,
    /// The session is still the one on screen, so the modal may show it.
    pub visible: bool,
}

#[derive(Clone, Debug)]
struct PendingDownload {
    session: SessionId,
    url: String,
}

/// Payment gate in front of file downloads. Verification is simulated: any
/// non-empty transaction reference succeeds.
#[derive(Clone, Debug, Default)]
pub struct PaymentModal {
    state: ModalState,
    target: Option<DownloadTarget>,
    session: SessionId,
    pending: Vec<PendingDownload>,
    tabs: Vec<String>,
    active_tab: Option<String>,
}

impl PaymentModal {
    /// `tabs` are the panel ids of the payment-method tabs, in page order.
    /// The first one starts active.
    pub fn new<S: Into<String>>(tabs: impl IntoIterator<Item = S>) -> Self {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        let active_tab = tabs.first().cloned();
        Self {
            tabs,
            active_tab,
            ..Self::default()
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn target(&self) -> Option<&DownloadTarget> {
        self.target.as_ref()
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    /// Start a session for `target`. Re-opening while merely open replaces the
    /// pending download.
    pub fn open(&mut self, target: DownloadTarget) -> Result<SessionId, PaymentError> {
        if matches!(self.state, ModalState::Verifying | ModalState::Verified) {
            return Err(PaymentError::Busy);
        }
        self.session = self.session.wrapping_add(1);
        self.state = ModalState::Open;
        self.target = Some(target);
        Ok(self.session)
    }

    pub fn select_tab(&mut self, tab: &str) -> Result<(), PaymentError> {
        if !self.tabs.iter().any(|t| t == tab) {
            return Err(PaymentError::UnknownTab(tab.to_owned()));
        }
        self.active_tab = Some(tab.to_owned());
        Ok(())
    }

    /// Begin verifying `transaction_id`. An empty reference leaves the state
    /// untouched. The download URL is captured here and released when the
    /// delay elapses, even if the modal is closed in between.
    pub fn confirm(&mut self, transaction_id: &str) -> Result<SessionId, PaymentError> {
        match self.state {
            ModalState::Open => {}
            ModalState::Closed => return Err(PaymentError::NotOpen),
            ModalState::Verifying | ModalState::Verified => return Err(PaymentError::Busy),
        }
        if transaction_id.trim().is_empty() {
            return Err(PaymentError::MissingTransactionId);
        }
        self.state = ModalState::Verifying;
        if let Some(target) = &self.target {
            self.pending.push(PendingDownload {
                session: self.session,
                url: target.url.clone(),
            });
        }
        Ok(self.session)
    }

    /// Verification delay elapsed. Always releases the URL captured by
    /// `confirm`; only the session still on screen moves to `Verified`.
    /// `None` if nothing was pending for `session`.
    pub fn verification_complete(&mut self, session: SessionId) -> Option<VerifiedDownload> {
        let idx = self.pending.iter().position(|p| p.session == session)?;
        let url = self.pending.remove(idx).url;
        let visible = session == self.session && self.state == ModalState::Verifying;
        if visible {
            self.state = ModalState::Verified;
        }
        Some(VerifiedDownload { url, visible })
    }

    /// Post-download delay elapsed; closes the modal if `session` is still
    /// the current, verified one.
    pub fn finish(&mut self, session: SessionId) -> bool {
        if session != self.session || self.state != ModalState::Verified {
            return false;
        }
        self.close();
        true
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.target = None;
    }
}
