//! Ordered code → kind rule table
//!
//! Rule order is significant: the first rule matching any reported code wins.

use crate::core::types::errors::ErrorKind;

/// One classification rule
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub kind: ErrorKind,
    pub codes: &'static [&'static str],
}

impl ClassificationRule {
    pub fn matches(&self, code: &str) -> bool {
        self.codes.iter().any(|c| *c == code)
    }
}

/// Standard service rule table
pub const STANDARD_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: ErrorKind::Auth,
        codes: &[
            "AWS.NotAuthorized",
            "AWS.BadClaimsSupplied",
            "AWS.BadCredentialsSupplied",
            "AWS.InvalidAccessKeyId",
            "AWS.SignatureDoesNotMatch",
            "AWS.MechanicalTurk.RequesterNotAuthorized",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::NoWorkAvailable,
        codes: &[
            "AWS.MechanicalTurk.NoHITsAvailable",
            "AWS.MechanicalTurk.NoMoreWorkableHITsInGroupException",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::ObjectNotFound,
        codes: &[
            "AWS.MechanicalTurk.HITDoesNotExist",
            "AWS.MechanicalTurk.AssignmentDoesNotExist",
            "AWS.MechanicalTurk.QualificationTypeDoesNotExist",
            "AWS.MechanicalTurk.QualificationDoesNotExist",
            "AWS.MechanicalTurk.QualificationRequestDoesNotExist",
            "AWS.MechanicalTurk.WorkerDoesNotExist",
            "AWS.MechanicalTurk.FileUploadAnswerDoesNotExist",
            "AWS.MechanicalTurk.HITTypeDoesNotExist",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::InvalidState,
        codes: &[
            "AWS.MechanicalTurk.InvalidHITState",
            "AWS.MechanicalTurk.InvalidAssignmentState",
            "AWS.MechanicalTurk.InvalidQualificationTypeState",
            "AWS.MechanicalTurk.InvalidQualificationState",
            "AWS.MechanicalTurk.InvalidQualificationRequestState",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::AlreadyExists,
        codes: &[
            "AWS.MechanicalTurk.QualificationTypeAlreadyExists",
            "AWS.MechanicalTurk.QualificationAlreadyExists",
            "AWS.MechanicalTurk.DuplicateRequest",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::PermissionDenied,
        codes: &[
            "AWS.MechanicalTurk.PermissionDenied",
            "AWS.MechanicalTurk.QualificationTypeNotOwned",
            "AWS.MechanicalTurk.HITNotOwned",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::RetryNotElapsed,
        codes: &["AWS.MechanicalTurk.QualificationTypeRetryDelayNotElapsed"],
    },
    ClassificationRule {
        kind: ErrorKind::Parse,
        codes: &[
            "AWS.MechanicalTurk.XMLParseError",
            "AWS.MechanicalTurk.XHTMLParseError",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::InvalidEndpoint,
        codes: &[
            "AWS.MechanicalTurk.InvalidEndpoint",
            "AWS.MechanicalTurk.InvalidTransportEndpoint",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::InvalidParameter,
        codes: &[
            "AWS.MechanicalTurk.InvalidParameterValue",
            "AWS.ParameterOutOfRange",
            "AWS.MissingParameters",
            "AWS.MechanicalTurk.InvalidRequest",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::LimitExceeded,
        codes: &[
            "AWS.MechanicalTurk.HITLimitExceeded",
            "AWS.MechanicalTurk.AssignmentLimitExceeded",
            "AWS.MechanicalTurk.QualificationTypeLimitExceeded",
            "AWS.MechanicalTurk.BonusLimitExceeded",
        ],
    },
    ClassificationRule {
        kind: ErrorKind::InsufficientFunds,
        codes: &["AWS.MechanicalTurk.InsufficientFunds"],
    },
    ClassificationRule {
        kind: ErrorKind::LayoutNotFound,
        codes: &["AWS.MechanicalTurk.HITLayoutDoesNotExist"],
    },
];
