//! Black-box lifecycle test: intake, receipt upload, admin review and the
//! aggregate view, end to end over the in-memory store.

use parchi_auth::Principal;
use parchi_challans::{Amount, ChallanStatus, Cnic, NewChallan, ReviewDecision, Semester};
use parchi_core::{ChallanId, DomainError, RollNumber};
use parchi_store::{ChallanService, InMemoryChallanStore, StoreError};

fn service() -> ChallanService<InMemoryChallanStore> {
    ChallanService::new(InMemoryChallanStore::new())
}

fn ali_khan() -> NewChallan {
    NewChallan {
        student_name: "Ali Khan".to_string(),
        roll_number: RollNumber::new("2021-CS-001"),
        id_card_number: Cnic::parse("3520112345671").unwrap(),
        semester: Semester::Third,
        amount: Amount::new(500).unwrap(),
        reason: "Late Submission".to_string(),
    }
}

fn domain_err(err: StoreError) -> DomainError {
    match err {
        StoreError::Domain(err) => err,
        other => panic!("expected a domain error, got: {other}"),
    }
}

#[test]
fn full_lifecycle_scenario() {
    let service = service();
    let student = Principal::student(RollNumber::new("2021-CS-001"));
    let admin = Principal::admin("registrar");

    // Intake.
    let record = service.issue(&student, ali_khan()).unwrap();
    assert_eq!(record.status(), ChallanStatus::Pending);
    assert_eq!(record.amount().rupees(), 500);
    let id = record.id();

    // Receipt upload moves pending -> paid.
    let record = service.apply_receipt_upload(&student, id, "r1").unwrap();
    assert_eq!(record.status(), ChallanStatus::Paid);
    assert_eq!(record.receipt_path(), Some("r1"));

    // Admin approval with a comment.
    let record = service
        .apply_status_change(&admin, id, ChallanStatus::Approved, Some("verified".to_string()))
        .unwrap();
    assert_eq!(record.status(), ChallanStatus::Approved);
    assert_eq!(record.admin_comments(), Some("verified"));
    assert!(record.updated_date().is_some());

    // Approved is terminal: a further rejection must fail.
    let err = service
        .apply_status_change(&admin, id, ChallanStatus::Rejected, None)
        .unwrap_err();
    assert!(matches!(
        domain_err(err),
        DomainError::InvalidTransition { .. }
    ));
}

#[test]
fn re_upload_is_idempotent_and_keeps_the_latest_reference() {
    let service = service();
    let student = Principal::student(RollNumber::new("2021-CS-001"));

    let id = service.issue(&student, ali_khan()).unwrap().id();

    let first = service.apply_receipt_upload(&student, id, "r1").unwrap();
    assert_eq!(first.status(), ChallanStatus::Paid);

    let second = service.apply_receipt_upload(&student, id, "r2").unwrap();
    assert_eq!(second.status(), ChallanStatus::Paid);
    assert_eq!(second.receipt_path(), Some("r2"));
}

#[test]
fn unknown_identities_are_record_not_found() {
    let service = service();
    let admin = Principal::admin("registrar");
    let student = Principal::student(RollNumber::new("2021-CS-001"));
    let ghost = ChallanId::new(404);

    let err = service
        .apply_status_change(&admin, ghost, ChallanStatus::Approved, None)
        .unwrap_err();
    assert_eq!(domain_err(err), DomainError::RecordNotFound);

    let err = service
        .apply_receipt_upload(&student, ghost, "r1")
        .unwrap_err();
    assert_eq!(domain_err(err), DomainError::RecordNotFound);
}

#[test]
fn no_target_ever_leads_back_to_pending() {
    let service = service();
    let student = Principal::student(RollNumber::new("2021-CS-001"));
    let admin = Principal::admin("registrar");

    let id = service.issue(&student, ali_khan()).unwrap().id();
    service.apply_receipt_upload(&student, id, "r1").unwrap();

    let err = service
        .apply_status_change(&admin, id, ChallanStatus::Pending, None)
        .unwrap_err();
    assert!(matches!(
        domain_err(err),
        DomainError::InvalidTransition { .. }
    ));
}

#[test]
fn ownership_and_role_gates_hold() {
    let service = service();
    let owner = Principal::student(RollNumber::new("2021-CS-001"));
    let other = Principal::student(RollNumber::new("2021-CS-002"));
    let admin = Principal::admin("registrar");

    let id = service.issue(&owner, ali_khan()).unwrap().id();

    // A student cannot file under someone else's roll number.
    let err = service.issue(&other, ali_khan()).unwrap_err();
    assert_eq!(domain_err(err), DomainError::Unauthorized);

    // Nor list another student's challans.
    let err = service
        .challans_for(&other, &RollNumber::new("2021-CS-001"))
        .unwrap_err();
    assert_eq!(domain_err(err), DomainError::Unauthorized);

    // Nor upload a receipt for a record they do not own.
    let err = service.apply_receipt_upload(&other, id, "r1").unwrap_err();
    assert_eq!(domain_err(err), DomainError::Unauthorized);

    // Review and reporting are admin-only.
    let err = service
        .apply_status_change(&owner, id, ChallanStatus::Approved, None)
        .unwrap_err();
    assert_eq!(domain_err(err), DomainError::Unauthorized);
    assert_eq!(domain_err(service.stats(&owner).unwrap_err()), DomainError::Unauthorized);

    // Admins see everything.
    assert_eq!(service.all_challans(&admin, None).unwrap().len(), 1);
    assert!(service
        .challans_for(&admin, &RollNumber::new("2021-CS-001"))
        .is_ok());
}

#[test]
fn issued_records_render_to_a_challan_document() {
    use chrono::Utc;
    use parchi_render::ChallanRenderer;

    let service = service();
    let student = Principal::student(RollNumber::new("2021-CS-001"));
    let record = service.issue(&student, ali_khan()).unwrap();

    let bytes = ChallanRenderer::default()
        .render(&record, Utc::now())
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn stats_reflect_the_record_set() {
    let service = service();
    let admin = Principal::admin("registrar");

    let mut intake = ali_khan();
    intake.amount = Amount::new(250).unwrap();
    let student = Principal::student(RollNumber::new("2021-CS-001"));
    let a = service.issue(&student, intake).unwrap();

    let mut intake = ali_khan();
    intake.roll_number = RollNumber::new("2021-CS-002");
    let other = Principal::student(RollNumber::new("2021-CS-002"));
    let b = service.issue(&other, intake).unwrap();

    service.apply_receipt_upload(&student, a.id(), "r1").unwrap();
    service
        .review(&admin, b.id(), ReviewDecision::Reject, Some("no receipt".to_string()))
        .unwrap();

    let stats = service.stats(&admin).unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.paid, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.pending + stats.paid + stats.approved + stats.rejected, stats.total);
    assert_eq!(stats.total_amount, 750);
}
