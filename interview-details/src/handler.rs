//! The interview details lookup, and its binding to the Lambda runtime

use crate::{
    details::InterviewDetails,
    error::{ConfigError, LookupError, StoreError},
    request, response,
    store::InterviewStore,
};
use http::Response;
use aws_lambda_events::encodings::Body;
use lamedh_http::{
    lambda::{Context, Error},
    Handler, IntoResponse, Request,
};
use std::{future::Future, pin::Pin, sync::Arc};
use tracing::{debug, error};

/// Answers interview detail requests from an [`InterviewStore`].
///
/// A service built from a failed configuration still answers every request,
/// with the configuration error as a 500.
pub struct InterviewDetailsService<S> {
    store: Result<S, ConfigError>,
}

impl<S> InterviewDetailsService<S>
where
    S: InterviewStore,
{
    pub fn new(store: S) -> Self {
        InterviewDetailsService { store: Ok(store) }
    }

    pub fn misconfigured(err: ConfigError) -> Self {
        InterviewDetailsService { store: Err(err) }
    }

    /// Handles one request. Failures are rendered into the returned response.
    pub async fn handle(&self, request: Request) -> Response<Body> {
        if request::is_preflight(&request) {
            return response::preflight();
        }
        match self.lookup(&request).await {
            Ok(details) => details.into_response(),
            Err(err) => err.into_response(),
        }
    }

    async fn lookup(&self, request: &Request) -> Result<InterviewDetails, LookupError> {
        let interview_id = request::interview_id(request)?;
        let store = self.store.as_ref().map_err(|e| LookupError::from(e.clone()))?;

        debug!(interview_id = %interview_id, "fetching interview details");
        match store.fetch_interview(&interview_id).await {
            Ok(Some(row)) => Ok(InterviewDetails::from(row)),
            Ok(None) => Err(LookupError::NotFound),
            Err(err @ StoreError::Rejected { .. }) | Err(err @ StoreError::Transport(_)) => {
                error!(interview_id = %interview_id, "store fetch error: {}", err);
                Err(err.into())
            }
            Err(err) => {
                error!(interview_id = %interview_id, "unexpected error fetching interview: {}", err);
                Err(err.into())
            }
        }
    }
}

/// Adapts an [`InterviewDetailsService`] to the runtime's `Handler` trait.
pub struct InterviewDetailsHandler<S> {
    service: Arc<InterviewDetailsService<S>>,
}

impl<S> InterviewDetailsHandler<S> {
    pub fn new(service: InterviewDetailsService<S>) -> Self {
        InterviewDetailsHandler {
            service: Arc::new(service),
        }
    }
}

impl<S> Handler for InterviewDetailsHandler<S>
where
    S: InterviewStore + 'static,
{
    type Response = Response<Body>;
    type Error = Error;
    type Fut = Pin<Box<dyn Future<Output = Result<Self::Response, Error>> + Send + 'static>>;

    fn call(&mut self, request: Request, _: Context) -> Self::Fut {
        let service = Arc::clone(&self.service);
        Box::pin(async move { Ok(service.handle(request).await) })
    }
}
