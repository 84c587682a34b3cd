use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Address;
use crate::record;

/// A stored user account.
///
/// `id` is assigned by storage and must never be taken from client input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub score: f64,
    pub nickname: Option<String>,
    pub roles: BTreeSet<String>,
    pub shipping: Option<Address>,
}

/// Client-submitted account changes.
///
/// Unset fields keep their zero value, so a zero-suppressing copy only applies
/// what the client actually sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountForm {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub score: f64,
    pub nickname: Option<String>,
    pub roles: BTreeSet<String>,
    pub shipping: Option<ShippingForm>,
}

/// Client-submitted shipping address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingForm {
    pub city: String,
    pub area: String,
}

record! {
    Account { id, username, email, active, score, nickname, roles, shipping };
    AccountForm { id, username, email, active, score, nickname, roles, shipping };
    ShippingForm { city, area };
}
