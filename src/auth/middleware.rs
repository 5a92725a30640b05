use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

/// Middleware guarding the admin panel: anything without an admin session is
/// bounced to the login view.
pub async fn require_admin(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let is_admin = session
        .get::<bool>("is_admin")
        .unwrap_or(None)
        .unwrap_or(false);

    if !is_admin {
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login"))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
