use chrono::{DateTime, Utc};

use super::domain::{ApplicationDraft, JobDraft, JobId, NewApplication, NewJob};

/// Validation errors raised while turning a draft into a storable record.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("required field '{field}' must not be empty")]
    MissingField { field: &'static str },
}

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

/// Convert an inbound job draft into a validated record.
///
/// All text fields are trimmed; `title`, `city`, `category`, and
/// `description` must survive trimming. Optional fields collapse to `None`
/// when blank.
pub fn new_job(draft: JobDraft, created_at: DateTime<Utc>) -> Result<NewJob, ValidationError> {
    let title = required(draft.title, "title")?;
    let city = required(draft.city, "city")?;
    let category = required(draft.category, "category")?;
    let description = required(draft.description, "description")?;

    let pay = draft.pay.as_deref().and_then(normalize_pay);
    let poster_contact = draft
        .poster_contact
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    Ok(NewJob {
        title,
        city,
        category,
        pay,
        description,
        poster_contact,
        created_at,
    })
}

/// Convert an inbound application draft into a validated record. The missing
/// `message` defaults to empty; job existence is the store's concern, not
/// intake's.
pub fn new_application(
    job_id: JobId,
    draft: ApplicationDraft,
    created_at: DateTime<Utc>,
) -> Result<NewApplication, ValidationError> {
    let applicant_name = required(draft.applicant_name, "applicant_name")?;
    let applicant_contact = required(draft.applicant_contact, "applicant_contact")?;
    let message = draft
        .message
        .map(|value| value.trim().to_string())
        .unwrap_or_default();

    Ok(NewApplication {
        job_id,
        applicant_name,
        applicant_contact,
        message,
        created_at,
    })
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Normalize the free-text pay field. Numeric-looking input keeps only the
/// number ("$60" becomes "60"); anything else is stored verbatim after
/// trimming, and blank input collapses to `None`. Malformed pay is coerced,
/// never rejected.
pub(crate) fn normalize_pay(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = trimmed
        .trim_start_matches(CURRENCY_SYMBOLS)
        .trim_end_matches(CURRENCY_SYMBOLS)
        .trim();
    let numeric_looking = !stripped.is_empty()
        && stripped
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ','));

    if numeric_looking {
        Some(stripped.to_string())
    } else {
        Some(trimmed.to_string())
    }
}
