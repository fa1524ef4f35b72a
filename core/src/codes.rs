//! Gateway auth-code and return-code reference tables.
//!
//! Descriptions keep the gateway's own spelling so they can be matched
//! against its integration guide.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static AUTH_CODES: LazyLock<HashMap<i32, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "Source Unknown"),
        (1, "STIP, Timeout Response"),
        (2, "LCS Response"),
        (3, "STIP, Issuer in Suppression"),
        (4, "STIP Reponse, Issuer Unavailable"),
        (5, "Issuer Aproval"),
        (7, "Aquirer Approval, Base 1 Down"),
        (8, "Aquirer Approval of Referral"),
    ])
});

static RETURN_CODES: LazyLock<HashMap<i32, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (1, "Success (Valid Data)"),
        (-35, "Invalid credit card number"),
        (-37, "Error failed communication"),
        (-39, "Error length serial number"),
        (-51, "Invalid Billing Zip Code"),
        (-52, "Invalid Shipto zip code"),
        (-53, "Invalid expiration date"),
        (-54, "Error length account number date"),
        (-55, "Invalid Billing Street Address"),
        (-56, "Invalid Shipto Street Address"),
        (-57, "Error length transaction amount"),
        (-58, "Invalid Name"),
        (-59, "Error length location"),
        (-60, "Invalid Billing State"),
        (-61, "Invalid Shipto State"),
        (-62, "Error length order string"),
        (-64, "Invalid Phone Number"),
        (-65, "Empty name"),
        (-66, "Empty email"),
        (-67, "Empty street address"),
        (-68, "Empty city"),
        (-69, "Empty state"),
        (-79, "Error length customer name"),
        (-80, "Error length shipto customer name"),
        (-81, "Error length customer location"),
        (-82, "Error length customer state"),
        (-83, "Invalid Phone Number"),
        (-84, "Pos error duplicate ordernumber"),
        (-91, "Pos_error_CVV2"),
        (-92, "Pos_error_Error_Approval_Code"),
        (-93, "Pos_error_Blind_Credits_Not_Allowed"),
        (-94, "Pos_error_Blind_Credits_Failed"),
        (-95, "Pos_error_Voice_Authorizations_Not_Allowed"),
    ])
});

pub fn auth_code_description(code: i32) -> Option<&'static str> {
    AUTH_CODES.get(&code).copied()
}

pub fn return_code_description(code: i32) -> Option<&'static str> {
    RETURN_CODES.get(&code).copied()
}

/// How the issuer or network reached an approval decision.
///
/// `description` is `None` for codes the gateway has not documented; those
/// display as "Unknown auth code" rather than borrowing another entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCode {
    pub code: i32,
    pub description: Option<&'static str>,
}

impl AuthCode {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            description: auth_code_description(code),
        }
    }

    pub fn is_known(&self) -> bool {
        self.description.is_some()
    }
}

impl fmt::Display for AuthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description {
            Some(description) => write!(f, "{}: {description}", self.code),
            None => write!(f, "{}: Unknown auth code", self.code),
        }
    }
}
