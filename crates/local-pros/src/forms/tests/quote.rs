use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::forms::domain::{Field, FormName, Urgency};
use crate::forms::error::FlowError;
use crate::forms::quote::{QuoteFlow, QuoteStage, QuoteTarget};
use crate::forms::service::{
    FlowSettings, FormService, SubmitOutcome, QUOTE_NETWORK_MESSAGE, QUOTE_REJECTED_MESSAGE,
};
use crate::forms::transport::TransportError;

#[tokio::test]
async fn plumbing_quote_is_delivered_once_and_confirmed() {
    let transport = Arc::new(RecordingTransport::default());
    let analytics = Arc::new(RecordingAnalytics::default());
    let service = service_with(transport.clone(), analytics.clone());

    let mut flow = plumbing_quote_at_contact(&service).await;
    assert_eq!(flow.stage(), QuoteStage::Contact);

    let outcome = service.submit_quote(&mut flow).await.expect("quote delivered");
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(flow.stage(), QuoteStage::Confirmed);
    assert_eq!(flow.confirmation_postcode(), "HP13 1AB");

    let submissions = transport.submissions();
    assert_eq!(submissions.len(), 1);
    let sent = &submissions[0];
    assert_eq!(sent.form_name(), FormName::QuoteRequest);
    assert_eq!(sent.field("form-name"), Some("quote-request"));
    assert_eq!(sent.field("subject"), Some("Quote Request for Plumbing in HP13 1AB"));
    assert_eq!(sent.field("postcode"), Some("HP13 1AB"));
    assert_eq!(sent.field("serviceType"), Some("Emergency Plumbing / Leak"));
    assert_eq!(sent.field("urgency"), Some("As soon as possible"));
    assert_eq!(sent.field("name"), Some("Jane Smith"));
    assert_eq!(sent.field("email"), Some("jane@example.com"));
    assert_eq!(sent.field("phone"), Some("07700 900000"));

    let events = analytics.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "quote_request");
    assert_eq!(events[0].property("service"), Some("Plumbing"));
    assert_eq!(events[0].property("postcode"), Some("HP13 1AB"));

    assert!(flow.draft_mut().is_none(), "confirmed drafts are frozen");
}

#[tokio::test]
async fn off_region_postcode_stays_on_first_stage() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut flow = service.open_quote(&plumbing());
    flow.draft_mut().expect("editable").postcode = "SL1 2AB".to_string();

    match service.advance_quote(&mut flow).await {
        Err(FlowError::Invalid(errors)) => {
            assert_eq!(
                errors.message(Field::Postcode).as_deref(),
                Some("We currently only serve HP postcodes")
            );
        }
        other => panic!("expected invalid postcode, got {other:?}"),
    }
    assert_eq!(flow.stage(), QuoteStage::Postcode);
    assert!(flow.errors().contains(Field::Postcode));
    assert!(transport.submissions().is_empty());
}

#[tokio::test]
async fn postcode_checks_report_required_then_shape() {
    let service = service_with(
        Arc::new(RecordingTransport::default()),
        Arc::new(RecordingAnalytics::default()),
    );
    let mut flow = service.open_quote(&plumbing());

    assert!(service.advance_quote(&mut flow).await.is_err());
    assert_eq!(
        flow.errors().message(Field::Postcode).as_deref(),
        Some("Postcode is required")
    );

    flow.draft_mut().expect("editable").postcode = "HP".to_string();
    assert!(service.advance_quote(&mut flow).await.is_err());
    assert_eq!(
        flow.errors().message(Field::Postcode).as_deref(),
        Some("Invalid UK Postcode format")
    );

    flow.draft_mut().expect("editable").postcode = "hp11 2aa".to_string();
    assert_eq!(
        service.advance_quote(&mut flow).await.expect("lower case accepted"),
        QuoteStage::Details
    );
    assert!(flow.errors().is_empty());
    assert_eq!(flow.confirmation_postcode(), "HP11 2AA");
}

#[tokio::test]
async fn details_require_an_offered_subtype() {
    let service = service_with(
        Arc::new(RecordingTransport::default()),
        Arc::new(RecordingAnalytics::default()),
    );
    let mut flow = service.open_quote(&plumbing());
    flow.draft_mut().expect("editable").postcode = "HP13 1AB".to_string();
    service.advance_quote(&mut flow).await.expect("postcode accepted");

    flow.draft_mut().expect("editable").service_type = "Gas Mains Diversion".to_string();
    assert!(service.advance_quote(&mut flow).await.is_err());
    assert_eq!(flow.stage(), QuoteStage::Details);
    assert_eq!(
        flow.errors().message(Field::ServiceType).as_deref(),
        Some("Please select a service type")
    );
}

#[test]
fn service_without_subtypes_gets_generic_label_but_still_needs_urgency() {
    let target = QuoteTarget {
        service_id: "chimney".to_string(),
        service_name: "Chimney Sweeping".to_string(),
        subtypes: Vec::new(),
    };
    let mut flow = QuoteFlow::new(target, "HP");
    flow.draft_mut().expect("editable").postcode = "HP10 9XY".to_string();
    flow.advance().expect("postcode accepted");

    flow.draft_mut().expect("editable").urgency = None;
    match flow.advance() {
        Err(FlowError::Invalid(errors)) => {
            assert!(errors.contains(Field::Urgency));
            assert!(!errors.contains(Field::ServiceType));
        }
        other => panic!("expected urgency error, got {other:?}"),
    }
    assert_eq!(flow.draft().service_type, "General Chimney Sweeping");

    flow.draft_mut().expect("editable").urgency = Some(Urgency::Flexible);
    assert_eq!(flow.advance().expect("details accepted"), QuoteStage::Contact);
}

#[tokio::test]
async fn back_keeps_every_entered_value() {
    let service = service_with(
        Arc::new(RecordingTransport::default()),
        Arc::new(RecordingAnalytics::default()),
    );
    let mut flow = plumbing_quote_at_contact(&service).await;
    flow.draft_mut().expect("editable").description = "Dripping under the sink".to_string();
    let before = flow.draft().clone();

    assert_eq!(flow.back(), QuoteStage::Details);
    assert_eq!(flow.back(), QuoteStage::Postcode);
    assert_eq!(flow.back(), QuoteStage::Postcode);
    assert_eq!(flow.draft(), &before);

    service.advance_quote(&mut flow).await.expect("postcode still valid");
    service.advance_quote(&mut flow).await.expect("details still valid");
    assert_eq!(flow.stage(), QuoteStage::Contact);
    assert_eq!(flow.draft(), &before);
}

#[tokio::test]
async fn rejected_submission_keeps_contact_stage_and_draft() {
    let transport = Arc::new(FailingTransport::rejecting());
    let analytics = Arc::new(RecordingAnalytics::default());
    let service = service_with(transport.clone(), analytics.clone());

    let mut flow = plumbing_quote_at_contact(&service).await;
    let before = flow.draft().clone();

    match service.submit_quote(&mut flow).await {
        Err(FlowError::Transport(TransportError::Rejected { status })) => assert_eq!(status, 500),
        other => panic!("expected rejected transport, got {other:?}"),
    }
    assert_eq!(transport.attempts(), 1);
    assert_eq!(flow.stage(), QuoteStage::Contact);
    assert_eq!(flow.draft(), &before);
    assert_eq!(flow.submit_error(), Some(QUOTE_REJECTED_MESSAGE));
    assert!(analytics.events().is_empty());
}

#[tokio::test]
async fn network_failure_reports_retry_message() {
    let transport = Arc::new(FailingTransport::offline());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut flow = plumbing_quote_at_contact(&service).await;
    assert!(service.submit_quote(&mut flow).await.is_err());
    assert_eq!(flow.submit_error(), Some(QUOTE_NETWORK_MESSAGE));
    assert_eq!(flow.stage(), QuoteStage::Contact);

    // a retry clears the previous failure before trying again
    assert!(service.submit_quote(&mut flow).await.is_err());
    assert_eq!(transport.attempts(), 2);
}

#[tokio::test]
async fn invalid_contact_details_never_reach_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut flow = plumbing_quote_at_contact(&service).await;
    let draft = flow.draft_mut().expect("editable");
    draft.name = "J".to_string();
    draft.phone = "12345".to_string();

    match service.submit_quote(&mut flow).await {
        Err(FlowError::Invalid(errors)) => {
            assert_eq!(
                errors.message(Field::Name).as_deref(),
                Some("Name must be at least 2 characters")
            );
            assert_eq!(
                errors.message(Field::Phone).as_deref(),
                Some("Please enter a valid UK phone number")
            );
            assert!(!errors.contains(Field::Email));
        }
        other => panic!("expected invalid contact details, got {other:?}"),
    }
    assert_eq!(flow.stage(), QuoteStage::Contact);
    assert!(transport.submissions().is_empty());
}

#[tokio::test]
async fn empty_contact_fields_each_report_and_block_submission() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut flow = plumbing_quote_at_contact(&service).await;
    let draft = flow.draft_mut().expect("editable");
    draft.name.clear();
    draft.email.clear();
    draft.phone.clear();

    match service.submit_quote(&mut flow).await {
        Err(FlowError::Invalid(errors)) => {
            assert_eq!(errors.len(), 3);
            assert_eq!(
                errors.message(Field::Name).as_deref(),
                Some("Name must be at least 2 characters")
            );
            assert_eq!(
                errors.message(Field::Email).as_deref(),
                Some("Invalid email address")
            );
            assert_eq!(
                errors.message(Field::Phone).as_deref(),
                Some("Please enter a valid UK phone number")
            );
        }
        other => panic!("expected missing contact details, got {other:?}"),
    }
    assert_eq!(flow.stage(), QuoteStage::Contact);
    assert!(flow.errors().contains(Field::Name));
    assert!(flow.errors().contains(Field::Email));
    assert!(flow.errors().contains(Field::Phone));
    assert!(transport.submissions().is_empty());
}

#[tokio::test]
async fn tampered_postcode_rewinds_to_first_stage() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let flow = plumbing_quote_at_contact(&service).await;
    let mut draft = flow.draft().clone();
    draft.postcode = "W1A 1AA".to_string();
    let mut resumed = service.resume_quote(&plumbing(), QuoteStage::Contact, draft);

    assert!(service.submit_quote(&mut resumed).await.is_err());
    assert_eq!(resumed.stage(), QuoteStage::Postcode);
    assert!(resumed.errors().contains(Field::Postcode));
    assert!(transport.submissions().is_empty());
}

#[tokio::test]
async fn honeypot_submission_is_silently_discarded() {
    let transport = Arc::new(RecordingTransport::default());
    let analytics = Arc::new(RecordingAnalytics::default());
    let service = service_with(transport.clone(), analytics.clone());

    let mut flow = plumbing_quote_at_contact(&service).await;
    flow.draft_mut().expect("editable").bot_field = "http://spam.example".to_string();

    let outcome = service.submit_quote(&mut flow).await.expect("no error surfaced");
    assert_eq!(outcome, SubmitOutcome::Discarded);
    assert_eq!(flow.stage(), QuoteStage::Contact);
    assert!(flow.submit_error().is_none());
    assert!(transport.submissions().is_empty());
    assert!(analytics.events().is_empty());
}

#[tokio::test]
async fn stage_order_is_enforced() {
    let transport = Arc::new(RecordingTransport::default());
    let service = service_with(transport.clone(), Arc::new(RecordingAnalytics::default()));

    let mut fresh = service.open_quote(&plumbing());
    assert!(matches!(
        service.submit_quote(&mut fresh).await,
        Err(FlowError::WrongStage { stage: "postcode", action: "submit" })
    ));

    let mut flow = plumbing_quote_at_contact(&service).await;
    assert!(matches!(
        service.advance_quote(&mut flow).await,
        Err(FlowError::WrongStage { stage: "contact", action: "advance" })
    ));

    service.submit_quote(&mut flow).await.expect("delivered");
    assert!(matches!(
        service.submit_quote(&mut flow).await,
        Err(FlowError::WrongStage { stage: "confirmed", .. })
    ));
    assert_eq!(flow.back(), QuoteStage::Confirmed);
    assert_eq!(transport.submissions().len(), 1);
}

#[tokio::test]
async fn reopening_a_service_starts_a_fresh_draft() {
    let service = service_with(
        Arc::new(RecordingTransport::default()),
        Arc::new(RecordingAnalytics::default()),
    );
    let mut first = plumbing_quote_at_contact(&service).await;
    service.submit_quote(&mut first).await.expect("delivered");

    let reopened = service.open_quote(&plumbing());
    assert_eq!(reopened.stage(), QuoteStage::Postcode);
    assert!(reopened.draft().postcode.is_empty());
    assert!(reopened.draft().name.is_empty());
    assert_eq!(reopened.draft().urgency, Some(Urgency::AsSoonAsPossible));
}

#[tokio::test(start_paused = true)]
async fn availability_pause_follows_the_postcode_stage() {
    let service = FormService::new(
        Arc::new(RecordingTransport::default()),
        Arc::new(RecordingAnalytics::default()),
        FlowSettings {
            availability_delay: Duration::from_millis(800),
            ..settings()
        },
    );
    let mut flow = service.open_quote(&plumbing());
    flow.draft_mut().expect("editable").postcode = "HP13 1AB".to_string();

    let started = tokio::time::Instant::now();
    service.advance_quote(&mut flow).await.expect("postcode accepted");
    assert!(started.elapsed() >= Duration::from_millis(800));

    let mut rejected = service.open_quote(&plumbing());
    let started = tokio::time::Instant::now();
    assert!(service.advance_quote(&mut rejected).await.is_err());
    assert!(started.elapsed() < Duration::from_millis(800));
}
