use signoff_core::{LogoutOutcome, LogoutResponse, LogoutUrlBody, RenderError};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const UTF_8: &str = "UTF-8";

/// Write a logout outcome to the response.
///
/// A committed response is left untouched and counts as success. Writing
/// commits the response, so repeated calls take at most one terminal action.
#[tracing::instrument(name = "respond", skip(response))]
pub fn respond<W>(outcome: &LogoutOutcome, response: &mut W) -> Result<(), RenderError>
where
    W: LogoutResponse + ?Sized,
{
    if response.is_committed() {
        tracing::debug!("Response already committed, skipping logout response");
        return Ok(());
    }

    match outcome {
        LogoutOutcome::RedirectTo(url) => {
            let location = response.encode_redirect_url(url);
            response.send_redirect(&location)
        }
        LogoutOutcome::JsonBody { logout_url } => {
            let body = serde_json::to_string(&LogoutUrlBody {
                logout_url: logout_url.clone(),
            })?;

            response.set_status(200);
            response.set_content_type(JSON_CONTENT_TYPE);
            response.set_character_encoding(UTF_8);
            response.write_body(&body)
        }
    }
}
