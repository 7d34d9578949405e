use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::SubscriptionError;

/// Billing periodicity of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionType {
    Daily,
    Weekly,
    Monthly,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Daily => "DAILY",
            SubscriptionType::Weekly => "WEEKLY",
            SubscriptionType::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionType {
    type Err = SubscriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(SubscriptionType::Daily),
            "weekly" => Ok(SubscriptionType::Weekly),
            "monthly" => Ok(SubscriptionType::Monthly),
            _ => Err(SubscriptionError::UnknownSubscriptionType(s.to_string())),
        }
    }
}
