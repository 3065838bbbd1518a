//! Shapes of the deferred values the header consumes

use serde::{Deserialize, Serialize};

/// Whether the shopper is signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthStatus(pub bool);

impl AuthStatus {
    pub fn is_logged_in(&self) -> bool {
        self.0
    }

    /// Accessible label for the account control
    pub fn account_label(&self) -> &'static str {
        if self.0 {
            "Account"
        } else {
            "Sign in"
        }
    }
}

/// Cart summary as delivered by the data layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub total_quantity: u32,
}

impl CartSummary {
    /// Accessible label for the cart control
    pub fn badge_label(&self) -> String {
        match self.total_quantity {
            0 => "Cart".to_string(),
            1 => "Cart (1 item)".to_string(),
            n => format!("Cart ({} items)", n),
        }
    }
}
