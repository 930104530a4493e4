//! Operation policy table.
//!
//! Everything that varies between operations lives in one [`Route`] per
//! [`Operation`]; adding an operation is a table edit.

use std::fmt;
use std::str::FromStr;

use crate::codec::{EnvelopeKey, ResponseShape};
use crate::validation::ValidationMode;

/// Which base URL of the environment an operation posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Api,
    SyncAnalyze,
}

/// How an operation derives its validation mode from the client default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRule {
    /// Use the configured mode unchanged.
    Configured,
    /// Lower `All` to `IgnoreMissing`; partial payloads are legitimate.
    Relaxed,
}

/// Fixed wire parameters of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Path relative to the base URL.
    pub path: &'static str,
    pub base: Base,
    /// `None` posts the payload bare.
    pub envelope: Option<EnvelopeKey>,
    pub response: ResponseShape,
    pub mode_rule: ModeRule,
}

impl Route {
    const fn order(path: &'static str) -> Self {
        Self {
            path,
            base: Base::Api,
            envelope: Some(EnvelopeKey::Order),
            response: ResponseShape::Order,
            mode_rule: ModeRule::Configured,
        }
    }

    const fn checkout(path: &'static str) -> Self {
        Self {
            envelope: Some(EnvelopeKey::Checkout),
            response: ResponseShape::Checkout,
            ..Self::order(path)
        }
    }

    const fn relaxed(self) -> Self {
        Self {
            mode_rule: ModeRule::Relaxed,
            ..self
        }
    }

    const fn on(self, base: Base) -> Self {
        Self { base, ..self }
    }

    const fn bare(self) -> Self {
        Self {
            envelope: None,
            ..self
        }
    }
}

/// Every call the API client can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Checkout,
    CheckoutDenied,
    Create,
    Submit,
    Update,
    Cancel,
    Refund,
    Fulfill,
    Decision,
    Analyze,
    Chargeback,
    Historical,
}

impl Operation {
    pub const ALL: [Self; 12] = [
        Self::Checkout,
        Self::CheckoutDenied,
        Self::Create,
        Self::Submit,
        Self::Update,
        Self::Cancel,
        Self::Refund,
        Self::Fulfill,
        Self::Decision,
        Self::Analyze,
        Self::Chargeback,
        Self::Historical,
    ];

    /// Returns the wire parameters of this operation.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Checkout => Route::checkout("api/checkout_create").relaxed(),
            Self::CheckoutDenied => Route::checkout("api/checkout_denied"),
            Self::Create => Route::order("api/create"),
            Self::Submit => Route::order("api/submit"),
            Self::Update => Route::order("api/update").relaxed(),
            Self::Cancel => Route::order("api/cancel"),
            Self::Refund => Route::order("api/refund"),
            Self::Fulfill => Route::order("api/fulfill"),
            Self::Decision => Route::order("api/decision"),
            Self::Analyze => Route::order("api/decide").on(Base::SyncAnalyze),
            Self::Chargeback => Route::order("api/chargeback"),
            Self::Historical => Route::order("api/historical").bare(),
        }
    }

    /// Short name used on the command line and in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkout => "checkout",
            Self::CheckoutDenied => "checkout-denied",
            Self::Create => "create",
            Self::Submit => "submit",
            Self::Update => "update",
            Self::Cancel => "cancel",
            Self::Refund => "refund",
            Self::Fulfill => "fulfill",
            Self::Decision => "decision",
            Self::Analyze => "analyze",
            Self::Chargeback => "chargeback",
            Self::Historical => "historical",
        }
    }

    /// Resolves the validation mode for one call.
    ///
    /// An explicit per-call mode wins as given. Otherwise the configured
    /// default goes through the operation's [`ModeRule`].
    #[must_use]
    pub const fn effective_mode(
        self,
        configured: ValidationMode,
        requested: Option<ValidationMode>,
    ) -> ValidationMode {
        if let Some(mode) = requested {
            return mode;
        }
        match self.route().mode_rule {
            ModeRule::Configured => configured,
            ModeRule::Relaxed => configured.relaxed(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operation name that matches nothing in [`Operation::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
