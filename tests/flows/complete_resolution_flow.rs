//! End-to-end resolution over real UDP/TCP sockets against a loopback
//! nameserver that plays root, TLD and authoritative server in turn.

use ferrous_resolver_domain::{DomainError, RecordType};
use ferrous_resolver_infrastructure::dns::CacheKey;
use ferrous_resolver_tests::{
    example_answer, MockNameserver, ScriptedReply, TestDomains, TestIps, TestResolver,
};

// ============================================================================
// Direct answers and caching
// ============================================================================

#[tokio::test]
async fn test_complete_resolution_flow() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.reply_udp(example_answer());
    let resolver = TestResolver::new(&server);

    let resolution = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .expect("resolution should succeed");

    assert!(!resolution.cache_hit);
    assert_eq!(resolution.records.len(), 1);
    assert_eq!(resolution.records[0].to_string(), "example.com 300 A 93.184.216.34");
    assert_eq!(resolution.min_ttl, Some(300));

    let key = CacheKey::new(TestDomains::example(), RecordType::A);
    assert_eq!(key.to_string(), "example.com_1");
    assert!(resolver.cache.lookup(&key).is_some());
}

#[tokio::test]
async fn test_repeat_query_served_from_cache() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.reply_udp(example_answer());
    let resolver = TestResolver::new(&server);

    let first = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .unwrap();
    let sent_after_first = server.udp_queries().len();

    let second = resolver
        .resolve_query
        .execute("EXAMPLE.com.", RecordType::A)
        .await
        .unwrap();

    assert!(second.cache_hit);
    assert_eq!(server.udp_queries().len(), sent_after_first);
    assert_eq!(first.records, second.records);
}

// ============================================================================
// Delegation
// ============================================================================

#[tokio::test]
async fn test_multi_hop_delegation_with_glue() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    let loopback = Some(TestIps::loopback());
    server.reply_udp(ScriptedReply::new().referral("org", "a0.org.afilias-nst.info", loopback));
    server.reply_udp(ScriptedReply::new().referral("example.org", "ns1.example.org", loopback));
    server.reply_udp(
        ScriptedReply::new().answer_a(TestDomains::www_example_org(), TestIps::example_ip(), 120),
    );
    let resolver = TestResolver::new(&server);

    let resolution = resolver
        .resolve_query
        .execute(TestDomains::www_example_org(), RecordType::A)
        .await
        .expect("delegated resolution should succeed");

    assert_eq!(resolution.records.len(), 1);
    assert_eq!(resolution.records[0].data.ipv4(), Some(TestIps::example_ip()));
    assert_eq!(server.udp_queries(), vec![TestDomains::www_example_org(); 3]);
}

#[tokio::test]
async fn test_referral_without_glue_resolves_nameserver() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    let ns = TestDomains::out_of_bailiwick_ns();
    server.reply_udp(ScriptedReply::new().referral("example.com", ns, None));
    // Nested walk for the nameserver address.
    server.reply_udp(ScriptedReply::new().answer_a(ns, TestIps::loopback(), 600));
    server.reply_udp(example_answer());
    let resolver = TestResolver::new(&server);

    let resolution = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .expect("glue-less delegation should succeed");

    assert_eq!(resolution.records[0].data.ipv4(), Some(TestIps::example_ip()));
    assert_eq!(
        server.udp_queries(),
        vec![
            TestDomains::example().to_string(),
            ns.to_string(),
            TestDomains::example().to_string()
        ]
    );
}

// ============================================================================
// Truncation and negative answers
// ============================================================================

#[tokio::test]
async fn test_truncated_reply_retried_over_tcp() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.reply_udp(ScriptedReply::new().truncated());
    server.reply_tcp(example_answer());
    let resolver = TestResolver::new(&server);

    let resolution = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .expect("TCP retry should succeed");

    assert_eq!(server.tcp_hits(), 1);
    assert_eq!(resolution.records.len(), 1);
}

#[tokio::test]
async fn test_nxdomain_flow() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.reply_udp(ScriptedReply::new().nxdomain("invalid"));
    let resolver = TestResolver::new(&server);

    let result = resolver
        .resolve_query
        .execute(TestDomains::nonexistent(), RecordType::A)
        .await;

    assert!(matches!(result, Err(DomainError::NxDomain)));
    assert!(resolver.cache.is_empty());
}

#[tokio::test]
async fn test_invalid_name_never_reaches_network() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    let resolver = TestResolver::new(&server);
    let long_label = "a".repeat(64);

    let result = resolver
        .resolve_query
        .execute(&format!("{long_label}.com"), RecordType::A)
        .await;

    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    assert!(server.udp_queries().is_empty());
}

// ============================================================================
// Cache maintenance
// ============================================================================

#[tokio::test]
async fn test_clear_cache_forces_fresh_walk() {
    let server = MockNameserver::start().await.expect("Failed to start server");
    server.reply_udp(example_answer());
    server.reply_udp(example_answer());
    let resolver = TestResolver::new(&server);

    resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .unwrap();
    assert_eq!(resolver.clear_cache.execute(), 1);
    assert!(resolver.cache.is_empty());

    let again = resolver
        .resolve_query
        .execute(TestDomains::example(), RecordType::A)
        .await
        .unwrap();

    assert!(!again.cache_hit);
    assert_eq!(server.udp_queries().len(), 2);
}
