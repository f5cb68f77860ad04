use actix_web::{HttpResponse, Responder};

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Liveness text, independent of database connectivity")
    )
)]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("Server is running..")
}
