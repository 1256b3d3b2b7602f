use crate::{ApiResult, AppState, ApprovedUser};

use sg_core::{FormField, RenderedSignature, SignatureFields, SignatureForm};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/signature/render
///
/// Renders the email signature for the submitted fields. Phone input is
/// filtered the same way the form filters typed characters.
pub async fn render_signature(
    State(state): State<AppState>,
    ApprovedUser(_user): ApprovedUser,
    payload: Result<Json<SignatureFields>, JsonRejection>,
) -> ApiResult<Json<RenderedSignature>> {
    let Json(fields) = payload?;

    let mut form = SignatureForm::new();
    form.set(FormField::Name, &fields.name);
    form.set(FormField::Title, &fields.title);
    form.set(FormField::Email, &fields.email);
    form.set(FormField::Phone, &fields.phone);

    let rendered = state.template.render(form.fields());
    state.metrics.signature_rendered();

    Ok(Json(rendered))
}
