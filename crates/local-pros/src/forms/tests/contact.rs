use std::sync::Arc;

use super::common::*;
use crate::forms::contact::{ContactFlow, ContactStatus, UnsubscribeRequest};
use crate::forms::domain::{ContactRequestDraft, Field, FormName};
use crate::forms::error::FlowError;
use crate::forms::service::{SubmitOutcome, CONTACT_FAILED_MESSAGE};

fn filled_draft() -> ContactRequestDraft {
    ContactRequestDraft {
        name: "Jane Smith".to_string(),
        email: "jane@example.com".to_string(),
        topic: "roofing".to_string(),
        message: "Two slipped tiles above the porch.".to_string(),
        bot_field: String::new(),
    }
}

#[tokio::test]
async fn contact_request_is_delivered_and_reset() {
    let transport = Arc::new(RecordingTransport::default());
    let analytics = Arc::new(RecordingAnalytics::default());
    let service = service_with(transport.clone(), analytics.clone());

    let mut flow = ContactFlow::resume(filled_draft(), None);
    let outcome = service.submit_contact(&mut flow).await.expect("delivered");
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(flow.status(), ContactStatus::Submitted);
    assert_eq!(flow.draft(), &ContactRequestDraft::default());

    let submissions = transport.submissions();
    assert_eq!(submissions.len(), 1);
    let sent = &submissions[0];
    assert_eq!(sent.form_name(), FormName::Contact);
    assert_eq!(sent.field("subject"), Some("New Website Inquiry from Jane Smith"));
    assert_eq!(sent.field("serviceType"), Some("roofing"));
    assert_eq!(sent.field("message"), Some("Two slipped tiles above the porch."));

    let events = analytics.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "form_submit");
    assert_eq!(events[0].property("form_name"), Some("contact_form"));
    assert_eq!(events[0].property("topic"), Some("roofing"));

    assert!(matches!(
        service.submit_contact(&mut flow).await,
        Err(FlowError::WrongStage { stage: "submitted", .. })
    ));
    assert_eq!(transport.submissions().len(), 1);
}

#[tokio::test]
async fn invalid_email_leaves_transport_untouched() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut draft = filled_draft();
    draft.email = "jane-at-example".to_string();
    let mut flow = ContactFlow::resume(draft, None);

    match service.submit_contact(&mut flow).await {
        Err(FlowError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.message(Field::Email).as_deref(),
                Some("Please enter a valid email address")
            );
        }
        other => panic!("expected invalid email, got {other:?}"),
    }
    assert_eq!(flow.status(), ContactStatus::Editing);
    assert!(flow.errors().contains(Field::Email));
    assert!(transport.submissions().is_empty());
}

#[test]
fn topic_and_message_are_checked() {
    let mut draft = filled_draft();
    draft.topic = "plastering".to_string();
    draft.message = "  hi  ".to_string();
    let flow = ContactFlow::resume(draft, None);

    let errors = flow.validate().expect_err("two failures");
    assert_eq!(
        errors.message(Field::Topic).as_deref(),
        Some("Please select a topic")
    );
    assert_eq!(
        errors.message(Field::Message).as_deref(),
        Some("Message must be at least 10 characters long")
    );
}

#[tokio::test]
async fn prefilled_subject_shapes_the_submission() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut flow = ContactFlow::with_subject("Contractor Partnership");
    assert_eq!(flow.draft().topic, "other");
    let draft = flow.draft_mut();
    draft.name = "Sam Roofer".to_string();
    draft.email = "sam@roofs.example.com".to_string();
    draft.message = "Interested in joining your network.".to_string();

    service.submit_contact(&mut flow).await.expect("delivered");
    let sent = &transport.submissions()[0];
    assert_eq!(sent.field("subject"), Some("Contractor Partnership from Sam Roofer"));
    assert_eq!(sent.field("serviceType"), Some("other"));
    assert_eq!(flow.draft().topic, "other");
    assert!(flow.draft().name.is_empty());
}

#[tokio::test]
async fn failed_delivery_keeps_the_draft() {
    let transport = Arc::new(FailingTransport::offline());
    let analytics = Arc::new(RecordingAnalytics::default());
    let service = service_with(transport.clone(), analytics.clone());

    let mut flow = ContactFlow::resume(filled_draft(), None);
    assert!(matches!(
        service.submit_contact(&mut flow).await,
        Err(FlowError::Transport(_))
    ));
    assert_eq!(transport.attempts(), 1);
    assert_eq!(flow.status(), ContactStatus::Editing);
    assert_eq!(flow.draft(), &filled_draft());
    assert_eq!(flow.submit_error(), Some(CONTACT_FAILED_MESSAGE));
    assert!(analytics.events().is_empty());
}

#[tokio::test]
async fn honeypot_contact_is_discarded() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut draft = filled_draft();
    draft.bot_field = "filled".to_string();
    let mut flow = ContactFlow::resume(draft, None);

    assert_eq!(
        service.submit_contact(&mut flow).await.expect("no error surfaced"),
        SubmitOutcome::Discarded
    );
    assert_eq!(flow.status(), ContactStatus::Editing);
    assert!(transport.submissions().is_empty());
}

#[tokio::test]
async fn unsubscribe_validates_then_sends_fixed_fields() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    match service
        .submit_unsubscribe(&UnsubscribeRequest::new("not an email"))
        .await
    {
        Err(FlowError::Invalid(errors)) => assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        ),
        other => panic!("expected invalid email, got {other:?}"),
    }
    assert!(transport.submissions().is_empty());

    service
        .submit_unsubscribe(&UnsubscribeRequest::new("jane@example.com"))
        .await
        .expect("delivered");
    let sent = &transport.submissions()[0];
    assert_eq!(sent.field("form-name"), Some("contact"));
    assert_eq!(sent.field("subject"), Some("Unsubscribe Request"));
    assert_eq!(sent.field("name"), Some("Unsubscribe User"));
}

#[tokio::test]
async fn unsubscribe_requires_an_ok_response() {
    let transport = Arc::new(FailingTransport::rejecting());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    assert!(matches!(
        service
            .submit_unsubscribe(&UnsubscribeRequest::new("jane@example.com"))
            .await,
        Err(FlowError::Transport(_))
    ));
    assert_eq!(transport.attempts(), 1);
}
