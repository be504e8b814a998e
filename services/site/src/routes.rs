use crate::infra::{safe_return_path, AppState};
use crate::pages::{
    render, ContactTemplate, ContactView, HomeTemplate, LegalTemplate, NotFoundTemplate,
    ServiceTemplate, SupportPanel, UnsubscribeView, UNSUBSCRIBE_FAILED_MESSAGE,
};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use local_pros::consent::{ConsentChoice, ConsentState, CONSENT_COOKIE};
use local_pros::content::{self, legal, SupportAction};
use local_pros::error::AppError;
use local_pros::forms::{
    AnalyticsSink, ContactFlow, ContactRequestDraft, Field, FlowError, FormService,
    FormTransport, QuoteRequestDraft, QuoteStage, UnsubscribeRequest, Urgency,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Fields posted by every stage of the quote widget. Values for stages not
/// on screen arrive through hidden inputs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QuoteForm {
    pub(crate) stage: String,
    pub(crate) action: String,
    pub(crate) postcode: String,
    #[serde(rename = "serviceType")]
    pub(crate) service_type: String,
    pub(crate) urgency: String,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    #[serde(rename = "bot-field")]
    pub(crate) bot_field: String,
}

impl QuoteForm {
    /// A posted `confirmed` stage is never trusted; confirmation only follows a delivery.
    fn stage(&self) -> QuoteStage {
        match QuoteStage::parse(&self.stage) {
            Some(QuoteStage::Confirmed) | None => QuoteStage::Postcode,
            Some(stage) => stage,
        }
    }

    fn into_draft(self) -> QuoteRequestDraft {
        QuoteRequestDraft {
            urgency: Urgency::from_label(&self.urgency),
            postcode: self.postcode,
            service_type: self.service_type,
            description: self.description,
            name: self.name,
            email: self.email,
            phone: self.phone,
            bot_field: self.bot_field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteAction {
    Next,
    Back,
    Submit,
}

impl QuoteAction {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "back" => QuoteAction::Back,
            "submit" => QuoteAction::Submit,
            _ => QuoteAction::Next,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ContactForm {
    pub(crate) subject: String,
    pub(crate) topic_id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(rename = "serviceType")]
    pub(crate) topic: String,
    pub(crate) message: String,
    #[serde(rename = "bot-field")]
    pub(crate) bot_field: String,
}

impl ContactForm {
    fn into_parts(self) -> (ContactRequestDraft, String, String) {
        let draft = ContactRequestDraft {
            name: self.name,
            email: self.email,
            topic: self.topic,
            message: self.message,
            bot_field: self.bot_field,
        };
        (draft, self.subject, self.topic_id)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UnsubscribeForm {
    pub(crate) email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConsentForm {
    pub(crate) choice: String,
    pub(crate) return_to: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContactQuery {
    pub(crate) topic: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceQuery {
    pub(crate) id: Option<String>,
}

/// Page and form routes, generic over how submissions leave the site.
pub(crate) fn site_router<T, A>(service: Arc<FormService<T, A>>) -> Router
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    Router::new()
        .route("/", get(home_page))
        .route("/privacy", get(privacy_page))
        .route("/terms", get(terms_page))
        .route(
            "/contact",
            get(contact_page).post(contact_endpoint::<T, A>),
        )
        .route("/contact/unsubscribe", post(unsubscribe_endpoint::<T, A>))
        .route("/service", get(service_search))
        .route("/service/:id", get(service_page::<T, A>))
        .route("/service/:id/quote", post(quote_endpoint::<T, A>))
        .route("/consent", post(consent_endpoint))
        .fallback(fallback)
        .with_state(service)
}

pub(crate) fn with_site_routes<T, A>(service: Arc<FormService<T, A>>) -> Router
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    site_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn consent_state(jar: &CookieJar) -> ConsentState {
    ConsentState::from_cookie_value(jar.get(CONSENT_COOKIE).map(|cookie| cookie.value()))
}

fn status_for(outcome: Result<(), FlowError>) -> StatusCode {
    match outcome {
        Ok(()) => StatusCode::OK,
        Err(FlowError::Invalid(_)) | Err(FlowError::WrongStage { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(FlowError::Transport(_)) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) async fn fallback() -> Redirect {
    Redirect::to("/")
}

pub(crate) async fn home_page(jar: CookieJar) -> Result<Response, AppError> {
    render(&HomeTemplate::new(consent_state(&jar)), StatusCode::OK)
}

pub(crate) async fn privacy_page(jar: CookieJar) -> Result<Response, AppError> {
    let page = LegalTemplate::new(legal::privacy_policy(), "/privacy", consent_state(&jar));
    render(&page, StatusCode::OK)
}

pub(crate) async fn terms_page(jar: CookieJar) -> Result<Response, AppError> {
    let page = LegalTemplate::new(legal::terms_of_use(), "/terms", consent_state(&jar));
    render(&page, StatusCode::OK)
}

/// Target of the home page's service picker.
pub(crate) async fn service_search(Query(query): Query<ServiceQuery>) -> Redirect {
    match query.id.as_deref().and_then(content::lookup) {
        Some(listing) => Redirect::to(&format!("/service/{}", listing.id())),
        None => Redirect::to("/"),
    }
}

pub(crate) async fn service_page<T, A>(
    State(service): State<Arc<FormService<T, A>>>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> Result<Response, AppError>
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    let consent = consent_state(&jar);
    let Some(listing) = content::lookup(&id) else {
        let page = NotFoundTemplate::new(&format!("/service/{id}"), consent);
        return render(&page, StatusCode::NOT_FOUND);
    };

    let flow = service.open_quote(&listing);
    render(
        &ServiceTemplate::new(&listing, &flow, consent),
        StatusCode::OK,
    )
}

pub(crate) async fn quote_endpoint<T, A>(
    State(service): State<Arc<FormService<T, A>>>,
    Path(id): Path<String>,
    jar: CookieJar,
    Form(form): Form<QuoteForm>,
) -> Result<Response, AppError>
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    let consent = consent_state(&jar);
    let Some(listing) = content::lookup(&id) else {
        let page = NotFoundTemplate::new(&format!("/service/{id}"), consent);
        return render(&page, StatusCode::NOT_FOUND);
    };

    let action = QuoteAction::parse(&form.action);
    let mut flow = service.resume_quote(&listing, form.stage(), form.into_draft());
    let status = match action {
        QuoteAction::Back => {
            flow.back();
            StatusCode::OK
        }
        QuoteAction::Next => status_for(service.advance_quote(&mut flow).await.map(|_| ())),
        QuoteAction::Submit => status_for(service.submit_quote(&mut flow).await.map(|_| ())),
    };

    render(&ServiceTemplate::new(&listing, &flow, consent), status)
}

pub(crate) async fn contact_page(
    Query(query): Query<ContactQuery>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let topic = query.topic.as_deref().and_then(content::support_topic);
    let (panel, flow) = match topic.map(|topic| topic.action) {
        Some(SupportAction::RedirectHome) => return Ok(Redirect::to("/").into_response()),
        Some(SupportAction::Unsubscribe) => (SupportPanel::Unsubscribe, ContactFlow::new()),
        Some(SupportAction::Subject(subject)) => {
            (SupportPanel::Contact, ContactFlow::with_subject(subject))
        }
        None => (SupportPanel::Prompt, ContactFlow::new()),
    };

    let topic_id = topic.map(|topic| topic.id);
    let page = ContactTemplate::new(
        topic_id,
        panel,
        ContactView::from_flow(&flow, topic_id.unwrap_or_default()),
        UnsubscribeView::default(),
        consent_state(&jar),
    );
    render(&page, StatusCode::OK)
}

pub(crate) async fn contact_endpoint<T, A>(
    State(service): State<Arc<FormService<T, A>>>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError>
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    let (draft, subject, topic_id) = form.into_parts();
    let mut flow = ContactFlow::resume(draft, Some(subject));
    let status = status_for(service.submit_contact(&mut flow).await.map(|_| ()));

    let selected = content::support_topic(&topic_id).map(|topic| topic.id);
    let page = ContactTemplate::new(
        selected,
        SupportPanel::Contact,
        ContactView::from_flow(&flow, &topic_id),
        UnsubscribeView::default(),
        consent_state(&jar),
    );
    render(&page, status)
}

pub(crate) async fn unsubscribe_endpoint<T, A>(
    State(service): State<Arc<FormService<T, A>>>,
    jar: CookieJar,
    Form(form): Form<UnsubscribeForm>,
) -> Result<Response, AppError>
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    let request = UnsubscribeRequest::new(form.email.clone());
    let mut view = UnsubscribeView {
        email: form.email,
        ..UnsubscribeView::default()
    };

    let status = match service.submit_unsubscribe(&request).await {
        Ok(()) => {
            view.done = true;
            StatusCode::OK
        }
        Err(FlowError::Invalid(errors)) => {
            view.email_error = errors.message(Field::Email).unwrap_or_default();
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(FlowError::WrongStage { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(FlowError::Transport(_)) => {
            view.submit_error = UNSUBSCRIBE_FAILED_MESSAGE.to_string();
            StatusCode::BAD_GATEWAY
        }
    };

    let page = ContactTemplate::new(
        Some("unsubscribe"),
        SupportPanel::Unsubscribe,
        ContactView::from_flow(&ContactFlow::new(), "unsubscribe"),
        view,
        consent_state(&jar),
    );
    render(&page, status)
}

/// Records the banner choice. Only acceptance outlives the browser session.
pub(crate) async fn consent_endpoint(jar: CookieJar, Form(form): Form<ConsentForm>) -> Response {
    let target = safe_return_path(&form.return_to).to_string();
    let Some(choice) = ConsentChoice::parse(&form.choice) else {
        return Redirect::to(&target).into_response();
    };

    let state = choice.resulting_state();
    let Some(value) = state.cookie_value() else {
        return Redirect::to(&target).into_response();
    };

    let mut cookie = Cookie::build((CONSENT_COOKIE, value))
        .path("/")
        .same_site(SameSite::Lax);
    if state.is_persistent() {
        cookie = cookie.permanent();
    }
    info!(?choice, "cookie consent recorded");

    (jar.add(cookie), Redirect::to(&target)).into_response()
}
