//! Sahayak (volunteer) sign-up. Validated, acknowledged, not stored.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{PortalError, Result},
    models::Notice,
};

pub const WELCOME_MESSAGE: &str = "Thank you for joining as SAHAYAK!\nWe will contact you soon.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Availability {
    Immediate,
    WithinOneHour,
    WithinADay,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Immediate => "Immediate",
            Availability::WithinOneHour => "Within 1 Hour",
            Availability::WithinADay => "Within a Day",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    /// Free text, e.g. "First Aid, Driving".
    #[serde(default)]
    pub skills: String,
    pub availability: Option<Availability>,
    #[serde(default)]
    pub message: String,
}

pub fn register(form: &VolunteerForm) -> Result<Notice> {
    let mut missing = Vec::new();
    if form.name.trim().is_empty() {
        missing.push("Full Name");
    }
    if form.phone.trim().is_empty() {
        missing.push("Phone Number");
    }
    if form.location.trim().is_empty() {
        missing.push("Location");
    }
    if form.availability.is_none() {
        missing.push("Availability");
    }
    if !missing.is_empty() {
        return Err(PortalError::missing_fields(&missing));
    }

    log::info!(
        "sahayak sign-up from {} ({})",
        form.location.trim(),
        form.availability.map(Availability::label).unwrap_or_default()
    );
    Ok(Notice::success(WELCOME_MESSAGE))
}
