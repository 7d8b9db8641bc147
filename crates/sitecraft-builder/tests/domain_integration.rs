//! Integration tests: custom-domain lifecycle and the command console over
//! the in-memory adapters.

use sitecraft_builder::application::commands::{BuilderCommand, BuilderConsole, DomainCommand};
use sitecraft_builder::application::connect_domain::DomainConnectionManager;
use sitecraft_builder::application::errors::{BuilderError, RemoteError};
use sitecraft_builder::application::persist_config::PersistenceGateway;
use sitecraft_builder::application::session::BuilderSession;
use sitecraft_builder::infrastructure::remote::{InMemoryConfigStore, InMemoryDomainProvider};
use sitecraft_core::{DnsRecordKind, DnsTargets, DomainPhase, TemplateId};

/// A saved and published realtor record, loaded into a fresh session.
async fn published_fixture() -> (
    BuilderSession,
    PersistenceGateway<InMemoryConfigStore>,
    InMemoryConfigStore,
) {
    let store = InMemoryConfigStore::new();
    let gateway = PersistenceGateway::new(store.clone());
    let mut session = BuilderSession::new(TemplateId::Realtor);
    gateway.save(&mut session, Some("jane".into())).await.unwrap();
    assert!(store.set_published(TemplateId::Realtor, true));
    gateway.load(&mut session, None).await.unwrap();
    (session, gateway, store)
}

#[tokio::test]
async fn test_full_domain_lifecycle() {
    // Arrange
    let (session, _gateway, store) = published_fixture().await;
    let provider = InMemoryDomainProvider::linked(store.clone());
    let mut manager = DomainConnectionManager::new(provider.clone());

    // Act / Assert: add
    let phase = manager.add_domain(&session, "example.com").await.unwrap();
    assert_eq!(phase, DomainPhase::PendingVerification);
    assert!(manager.record().manual_check_required);
    assert_eq!(
        store.record(TemplateId::Realtor).unwrap().custom_domain.as_deref(),
        Some("example.com")
    );

    // verify before DNS propagated
    assert_eq!(manager.verify().await.unwrap(), DomainPhase::PendingVerification);
    assert!(manager.record().manual_check_required);

    // verify after DNS propagated
    provider.mark_verified("example.com", true);
    assert_eq!(manager.verify().await.unwrap(), DomainPhase::Verified);
    assert!(!manager.record().manual_check_required);

    // remove
    manager.remove_domain(&session, true).await.unwrap();
    assert_eq!(manager.phase(), DomainPhase::NoDomain);
    assert_eq!(manager.record().custom_domain, None);
    assert_eq!(store.record(TemplateId::Realtor).unwrap().custom_domain, None);
}

#[tokio::test]
async fn test_add_domain_on_unpublished_site_never_calls_provider() {
    let session = BuilderSession::new(TemplateId::Realtor);
    let provider = InMemoryDomainProvider::new();
    let mut manager = DomainConnectionManager::new(provider.clone());

    let result = manager.add_domain(&session, "example.com").await;

    assert!(matches!(result, Err(BuilderError::Precondition(_))));
    assert_eq!(manager.record().custom_domain, None);
    assert_eq!(provider.add_calls(), 0);
}

#[tokio::test]
async fn test_reloaded_verified_domain_requires_manual_check() {
    // Arrange: a record whose stored status already says verified.
    let (session, gateway, store) = published_fixture().await;
    let provider = InMemoryDomainProvider::linked(store.clone());
    let mut manager = DomainConnectionManager::new(provider.clone());
    manager.add_domain(&session, "example.com").await.unwrap();
    provider.mark_verified("example.com", true);
    manager.verify().await.unwrap();

    // Act: a new editing session loads the record.
    let mut reopened = BuilderSession::new(TemplateId::Realtor);
    let outcome = gateway.load(&mut reopened, None).await.unwrap();
    let mut reloaded = DomainConnectionManager::from_record(provider.clone(), outcome.domain);

    // Assert
    assert!(reloaded.record().domain_config.as_ref().is_some_and(|c| c.verified));
    assert_eq!(reloaded.phase(), DomainPhase::PendingVerification);
    assert_eq!(reloaded.verify().await.unwrap(), DomainPhase::Verified);
}

#[tokio::test]
async fn test_failed_add_leaves_domain_unset() {
    let (session, _gateway, store) = published_fixture().await;
    let provider = InMemoryDomainProvider::linked(store);
    provider.set_failure(Some(RemoteError::Rejected("domain is blocked".into())));
    let mut manager = DomainConnectionManager::new(provider);

    let err = manager.add_domain(&session, "example.com").await.unwrap_err();

    assert_eq!(err.to_string(), "remote request failed: domain is blocked");
    assert_eq!(manager.phase(), DomainPhase::NoDomain);
}

#[tokio::test]
async fn test_console_drives_domain_commands() {
    // Arrange
    let store = InMemoryConfigStore::new();
    let provider = InMemoryDomainProvider::linked(store.clone());
    let mut console = BuilderConsole::new(
        BuilderSession::new(TemplateId::Realtor),
        PersistenceGateway::new(store.clone()),
        DomainConnectionManager::new(provider.clone()),
        DnsTargets::default(),
    );
    console
        .execute("save jane".parse::<BuilderCommand>().unwrap())
        .await
        .unwrap();
    store.set_published(TemplateId::Realtor, true);
    console.open(None).await.unwrap();

    // Act
    let added = console
        .execute("domain add shop.example.com".parse().unwrap())
        .await
        .unwrap();
    provider.mark_verified("shop.example.com", true);
    let verified = console
        .execute(BuilderCommand::Domain(DomainCommand::Verify))
        .await
        .unwrap();
    let refused = console
        .execute(BuilderCommand::Domain(DomainCommand::Remove { confirmed: false }))
        .await;

    // Assert
    assert!(added.contains("CNAME shop -> cname.vercel-dns.com"));
    assert_eq!(verified, "domain verified");
    assert!(matches!(refused, Err(BuilderError::Precondition(_))));
    assert_eq!(console.domains().phase(), DomainPhase::Verified);
    assert_eq!(provider.remove_calls(), 0);
}

#[test]
fn test_apex_domain_gets_a_record() {
    let manager = DomainConnectionManager::from_record(
        InMemoryDomainProvider::new(),
        sitecraft_core::DomainRecord::from_persisted(Some("example.com".into()), None),
    );

    let record = manager.dns_instructions(&DnsTargets::default()).unwrap();

    assert_eq!(record.kind, DnsRecordKind::A);
    assert_eq!(record.host, "@");
    assert_eq!(record.value, "76.76.21.21");
}
