//! crates/invitation_core/src/input.rs
//!
//! Turns raw form values into a validated `InvitationInput`.
//!
//! The HTTP layer collects whatever fields the client sent into an
//! `InvitationForm`; nothing reaches the writer until it has been converted
//! into an `InvitationInput`, which can only be built through validation.

use chrono::NaiveDate;

/// The date format accepted from `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A rejected submission. Always raised before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date for {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("Invalid invitation id: {0}")]
    InvalidId(i64),
}

/// Raw form values, one `Option` per form field. `None` means the field was
/// not sent at all.
#[derive(Debug, Clone, Default)]
pub struct InvitationForm {
    pub groom: Option<String>,
    pub bride: Option<String>,
    pub wedding_date: Option<String>,
    pub city: Option<String>,
    pub story: Option<String>,
    pub haldi_date: Option<String>,
    pub mehendi_date: Option<String>,
}

impl InvitationForm {
    /// Stores a form field by its wire name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "groom" => &mut self.groom,
            "bride" => &mut self.bride,
            "wedding_date" => &mut self.wedding_date,
            "city" => &mut self.city,
            "story" => &mut self.story,
            "haldi_date" => &mut self.haldi_date,
            "mehendi_date" => &mut self.mehendi_date,
            _ => return,
        };
        *slot = Some(value);
    }
}

/// A validated submission.
///
/// Required text fields are non-empty, `story` is never absent, and the
/// optional ceremony dates are either a real date or `None` (a blank form
/// value never survives as an empty string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationInput {
    groom: String,
    bride: String,
    wedding_date: NaiveDate,
    city: String,
    story: String,
    haldi_date: Option<NaiveDate>,
    mehendi_date: Option<NaiveDate>,
}

impl InvitationInput {
    /// Builds an input from already-typed values, enforcing the same rules as
    /// form conversion.
    pub fn new(
        groom: &str,
        bride: &str,
        wedding_date: NaiveDate,
        city: &str,
        story: Option<&str>,
        haldi_date: Option<NaiveDate>,
        mehendi_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            groom: required("groom", Some(groom))?,
            bride: required("bride", Some(bride))?,
            wedding_date,
            city: required("city", Some(city))?,
            story: story.unwrap_or_default().to_string(),
            haldi_date,
            mehendi_date,
        })
    }

    pub fn groom(&self) -> &str {
        &self.groom
    }

    pub fn bride(&self) -> &str {
        &self.bride
    }

    pub fn wedding_date(&self) -> NaiveDate {
        self.wedding_date
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn story(&self) -> &str {
        &self.story
    }

    pub fn haldi_date(&self) -> Option<NaiveDate> {
        self.haldi_date
    }

    pub fn mehendi_date(&self) -> Option<NaiveDate> {
        self.mehendi_date
    }
}

impl TryFrom<InvitationForm> for InvitationInput {
    type Error = ValidationError;

    fn try_from(form: InvitationForm) -> Result<Self, Self::Error> {
        let groom = required("groom", form.groom.as_deref())?;
        let bride = required("bride", form.bride.as_deref())?;
        let wedding_date_raw = required("wedding_date", form.wedding_date.as_deref())?;
        let wedding_date = parse_date("wedding_date", &wedding_date_raw)?;
        let city = required("city", form.city.as_deref())?;

        Ok(Self {
            groom,
            bride,
            wedding_date,
            city,
            story: form.story.unwrap_or_default(),
            haldi_date: optional_date("haldi_date", form.haldi_date.as_deref())?,
            mehendi_date: optional_date("mehendi_date", form.mehendi_date.as_deref())?,
        })
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_date(field, v).map(Some),
        _ => Ok(None),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> InvitationForm {
        InvitationForm {
            groom: Some("Raj".to_string()),
            bride: Some("Simi".to_string()),
            wedding_date: Some("2025-12-01".to_string()),
            city: Some("Pune".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_converts_with_defaults() {
        let input = InvitationInput::try_from(complete_form()).unwrap();
        assert_eq!(input.groom(), "Raj");
        assert_eq!(input.bride(), "Simi");
        assert_eq!(input.wedding_date(), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(input.city(), "Pune");
        assert_eq!(input.story(), "");
        assert_eq!(input.haldi_date(), None);
        assert_eq!(input.mehendi_date(), None);
    }

    #[test]
    fn missing_city_is_rejected() {
        let form = InvitationForm {
            city: None,
            ..complete_form()
        };
        assert_eq!(
            InvitationInput::try_from(form),
            Err(ValidationError::MissingField("city"))
        );
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let form = InvitationForm {
            groom: Some("   ".to_string()),
            ..complete_form()
        };
        assert_eq!(
            InvitationInput::try_from(form),
            Err(ValidationError::MissingField("groom"))
        );
    }

    #[test]
    fn blank_ceremony_dates_become_none() {
        let form = InvitationForm {
            haldi_date: Some(String::new()),
            mehendi_date: Some(" ".to_string()),
            ..complete_form()
        };
        let input = InvitationInput::try_from(form).unwrap();
        assert_eq!(input.haldi_date(), None);
        assert_eq!(input.mehendi_date(), None);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let form = InvitationForm {
            wedding_date: Some("01/12/2025".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            InvitationInput::try_from(form),
            Err(ValidationError::InvalidDate { field: "wedding_date", .. })
        ));

        let form = InvitationForm {
            mehendi_date: Some("soon".to_string()),
            ..complete_form()
        };
        assert!(matches!(
            InvitationInput::try_from(form),
            Err(ValidationError::InvalidDate { field: "mehendi_date", .. })
        ));
    }

    #[test]
    fn set_routes_known_fields_and_ignores_others() {
        let mut form = InvitationForm::default();
        form.set("city", "Pune".to_string());
        form.set("haldi_date", "2025-11-28".to_string());
        form.set("rsvp", "yes".to_string());
        assert_eq!(form.city.as_deref(), Some("Pune"));
        assert_eq!(form.haldi_date.as_deref(), Some("2025-11-28"));
        assert!(form.groom.is_none());
    }
}
