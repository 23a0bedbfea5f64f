//! Session lifecycle: check-in/check-out pairing, idempotent check-out,
//! and audit co-commitment.

mod helpers;

use smartpark_core::error::ErrorKind;
use smartpark_core::types::SessionId;
use smartpark_entity::audit::AuditAction;
use smartpark_entity::session::SessionStatus;

#[tokio::test]
async fn test_check_in_check_out_round_trip() {
    let harness = helpers::TestHarness::new();
    let lot_id = harness.create_lot("central", 10).await;
    let ctx = helpers::ctx();

    assert_eq!(harness.occupancy(lot_id).await, 0);

    let session = harness
        .sessions
        .check_in(&ctx, lot_id)
        .await
        .expect("check-in");
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.user_id, ctx.user_id);
    assert!(session.checked_out_at.is_none());
    assert_eq!(harness.occupancy(lot_id).await, 1);

    harness
        .sessions
        .check_out(&ctx, session.id)
        .await
        .expect("check-out");

    // Occupancy returns to its pre-check-in value.
    assert_eq!(harness.occupancy(lot_id).await, 0);

    let completed = harness
        .sessions
        .get_session(session.id)
        .await
        .expect("session still readable");
    assert_eq!(completed.status, SessionStatus::Completed);
    assert!(completed.checked_out_at.is_some());

    // Two audit entries, CHECK_IN before CHECK_OUT.
    let entries = harness.audit.entries_for_lot(lot_id).await.expect("audit");
    let actions: Vec<_> = entries.iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![AuditAction::CheckIn, AuditAction::CheckOut]);
    assert!(entries.iter().all(|e| e.user_id == ctx.user_id));
}

#[tokio::test]
async fn test_check_out_is_idempotent_in_effect() {
    let harness = helpers::TestHarness::new();
    let lot_id = harness.create_lot("central", 3).await;
    let ctx = helpers::ctx();

    let session = harness
        .sessions
        .check_in(&ctx, lot_id)
        .await
        .expect("check-in");

    harness
        .sessions
        .check_out(&ctx, session.id)
        .await
        .expect("first check-out succeeds");

    let err = harness
        .sessions
        .check_out(&ctx, session.id)
        .await
        .expect_err("second check-out is rejected");
    assert_eq!(err.kind, ErrorKind::InvalidSession);

    // Decremented exactly once.
    assert_eq!(harness.occupancy(lot_id).await, 0);
}

#[tokio::test]
async fn test_check_out_unknown_session() {
    let harness = helpers::TestHarness::new();
    harness.create_lot("central", 3).await;

    let err = harness
        .sessions
        .check_out(&helpers::ctx(), SessionId::new())
        .await
        .expect_err("unknown session");
    assert_eq!(err.kind, ErrorKind::InvalidSession);
}

#[tokio::test]
async fn test_concurrent_check_outs_decrement_once() {
    let harness = helpers::TestHarness::new();
    let lot_id = harness.create_lot("central", 2).await;
    let ctx = helpers::ctx();

    let session = harness
        .sessions
        .check_in(&ctx, lot_id)
        .await
        .expect("check-in");

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let sessions = harness.sessions.clone();
            let session_id = session.id;
            let caller = ctx;
            tokio::spawn(async move { sessions.check_out(&caller, session_id).await })
        })
        .collect();

    let results: Vec<_> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one check-out completes the session");
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.kind == ErrorKind::InvalidSession)
    );
    assert_eq!(harness.occupancy(lot_id).await, 0);
}

#[tokio::test]
async fn test_sessions_on_different_lots_are_independent() {
    let harness = helpers::TestHarness::new();
    let first_lot = harness.create_lot("east", 1).await;
    let second_lot = harness.create_lot("west", 1).await;

    let ctx = helpers::ctx();
    harness
        .sessions
        .check_in(&ctx, first_lot)
        .await
        .expect("east check-in");
    harness
        .sessions
        .check_in(&ctx, second_lot)
        .await
        .expect("a full east lot does not block west");

    assert_eq!(harness.occupancy(first_lot).await, 1);
    assert_eq!(harness.occupancy(second_lot).await, 1);
}
