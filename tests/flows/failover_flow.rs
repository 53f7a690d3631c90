//! Root fallback and silent nameservers over real sockets.

use ferrous_resolver_domain::{DomainError, RecordType};
use ferrous_resolver_tests::{
    example_answer, MockNameserver, ScriptedReply, TestDomains, TestIps, TestResolver,
};

#[tokio::test]
async fn test_silent_root_falls_through_to_next() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.ignore_next_udp();
    server.reply_udp(example_answer());
    let resolver = TestResolver::with_roots(&server, 2, 100);

    let resolution = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .expect("second root should answer");

    assert_eq!(resolution.records.len(), 1);
    assert_eq!(server.udp_queries().len(), 2);
}

#[tokio::test]
async fn test_all_roots_silent() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    let resolver = TestResolver::with_roots(&server, 3, 50);

    let result = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await;

    match result {
        Err(DomainError::NoResponse { server: label }) => assert_eq!(label, "all root servers"),
        other => panic!("expected NoResponse, got {other:?}"),
    }
    assert_eq!(server.udp_queries().len(), 3);
}

#[tokio::test]
async fn test_delegated_server_silent() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    let glue = Some(TestIps::loopback());
    server.reply_udp(ScriptedReply::new().referral("com", "a.gtld-servers.net", glue));
    server.ignore_next_udp();
    let resolver = TestResolver::with_roots(&server, 1, 100);

    let result = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await;

    assert!(matches!(result, Err(DomainError::NoResponse { .. })));
}
