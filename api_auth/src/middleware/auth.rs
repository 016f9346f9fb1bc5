use std::{future::Future, pin::Pin, rc::Rc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use common::session::{SESSION_USER_KEY, SessionUser};
use futures::future::{Ready, ok};

/// Rejects requests that carry no signed-in user with `401`.
///
/// Must be wrapped inside the session middleware.
pub struct SessionGuard;

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = SessionGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user = req
            .get_session()
            .get::<SessionUser>(SESSION_USER_KEY)
            .ok()
            .flatten();

        match user {
            Some(user) => {
                // handlers and the request logger read the user from here
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_boxed_body()) })
            }
            None => {
                let response = HttpResponse::Unauthorized()
                    .json(serde_json::json!({"error": "No active session"}))
                    .map_into_boxed_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
