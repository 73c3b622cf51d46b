use crate::error::SubmitError;
use crate::models::Submission;
use crate::store::SubmissionStore;

use super::parser;

/// Parse, validate, build the record and write it. At most one write happens.
pub async fn run(store: &dyn SubmissionStore, body: &[u8]) -> Result<Submission, SubmitError> {
    let raw = parser::parse_body(body)?;
    let form = parser::extract_form(raw)?;

    let submission = Submission::new(form);
    store.put(&submission).await?;

    tracing::info!("Successfully saved item: {submission:?}");
    Ok(submission)
}
