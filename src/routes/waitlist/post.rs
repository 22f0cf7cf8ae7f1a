//! src/routes/waitlist/post.rs

use actix_web::{web, HttpResponse};

use crate::error::CrelyzorResult;
use crate::form::{submit_form, FormEvent, WaitlistForm};
use crate::routes::render_landing;
use crate::waitlist_client::WaitlistClient;

#[derive(serde::Deserialize)]
pub struct FormData {
    // a missing field is treated like an empty input
    #[serde(default)]
    email: String,
}

#[tracing::instrument(
    name = "Joining the waitlist.",
    skip(form, waitlist_client),
    fields(waitlist_email = %form.email)
)]
pub async fn join_waitlist(
    form: web::Form<FormData>,
    waitlist_client: web::Data<WaitlistClient>,
) -> CrelyzorResult<HttpResponse> {
    let mut waitlist_form = WaitlistForm::default();
    waitlist_form.update(FormEvent::EmailChanged(form.0.email));
    submit_form(&mut waitlist_form, waitlist_client.as_ref()).await;
    render_landing(&waitlist_form)
}
