//! End-to-end authentication decision tests.
//!
//! Drives the provider through every failure-normalization and
//! strategy-selection path with counting collaborator doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dirauth_directory::{BindRequest, DirectoryManager, DirectoryResult};
use dirauth_model::{roles, DirectoryUser};
use dirauth_provider::{
    AuthenticationError, CredentialToken, HookBroadcaster, HookError, HookResult,
    LdapAuthenticationProvider, PreBindEvent, ProviderConfig,
};
use dirauth_storage::InMemoryUserRepository;
use serde_json::json;

/// Directory double: accepts or rejects every bind, counts calls per
/// variant.
#[derive(Default)]
struct CountingDirectory {
    accept: bool,
    binds: AtomicUsize,
    direct_binds: AtomicUsize,
}

impl CountingDirectory {
    fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            ..Self::default()
        })
    }

    fn rejecting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn total_calls(&self) -> usize {
        self.binds.load(Ordering::SeqCst) + self.direct_binds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryManager for CountingDirectory {
    async fn bind(&self, _request: &BindRequest) -> DirectoryResult<bool> {
        self.binds.fetch_add(1, Ordering::SeqCst);
        Ok(self.accept)
    }

    async fn bind_direct(&self, _request: &BindRequest) -> DirectoryResult<bool> {
        self.direct_binds.fetch_add(1, Ordering::SeqCst);
        Ok(self.accept)
    }
}

/// Broadcaster double: optionally vetoes, counts publications.
#[derive(Default)]
struct RecordingBroadcaster {
    veto_reason: Option<String>,
    published: AtomicUsize,
}

impl RecordingBroadcaster {
    fn passing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn vetoing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            veto_reason: Some(reason.to_string()),
            published: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl HookBroadcaster for RecordingBroadcaster {
    async fn publish(&self, _event: &PreBindEvent) -> HookResult<()> {
        self.published.fetch_add(1, Ordering::SeqCst);
        match &self.veto_reason {
            Some(reason) => Err(HookError::new(reason.clone())),
            None => Ok(()),
        }
    }
}

fn repo_with_alice() -> Arc<InMemoryUserRepository> {
    let repo = InMemoryUserRepository::new();
    repo.insert(
        DirectoryUser::new("alice")
            .with_dn("uid=alice,ou=users,dc=example,dc=com")
            .with_role(roles::ROLE_USER),
    );
    Arc::new(repo)
}

fn config(hide: bool, bind_first: bool) -> ProviderConfig {
    ProviderConfig::builder("main")
        .hide_not_found_errors(hide)
        .bind_username_before(bind_first)
        .build()
        .expect("valid config")
}

#[tokio::test]
async fn mismatched_provider_key_is_rejected_as_unsupported() {
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        CountingDirectory::accepting(),
        config(true, false),
    );

    let token = CredentialToken::password("alice", "correct", "other");
    assert!(!provider.supports(&token));

    let err = provider.authenticate(&token).await.unwrap_err();
    assert!(matches!(err, AuthenticationError::UnsupportedToken));
}

#[tokio::test]
async fn successful_bind_yields_roles_and_verbatim_attributes() {
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        CountingDirectory::accepting(),
        config(true, false),
    );

    let credential = CredentialToken::password("alice", "correct", "main")
        .with_attribute("client_ip", json!("10.0.0.7"))
        .with_attribute("request_id", json!(42));

    let token = provider.authenticate(&credential).await.unwrap();

    assert!(token.is_authenticated());
    assert_eq!(token.provider_key(), "main");
    assert_eq!(token.roles(), [roles::ROLE_USER.to_string()]);
    assert_eq!(token.attributes(), credential.attributes());
    assert!(token.secret().is_empty());
}

#[tokio::test]
async fn hiding_makes_unknown_user_and_wrong_password_identical() {
    let repo = repo_with_alice();

    let unknown_user_err = LdapAuthenticationProvider::new(
        repo.clone(),
        CountingDirectory::accepting(),
        config(true, false),
    )
    .authenticate(&CredentialToken::password("ghost", "whatever", "main"))
    .await
    .unwrap_err();

    let wrong_password_err = LdapAuthenticationProvider::new(
        repo,
        CountingDirectory::rejecting(),
        config(true, false),
    )
    .authenticate(&CredentialToken::password("alice", "wrong", "main"))
    .await
    .unwrap_err();

    assert!(unknown_user_err.is_bad_credentials());
    assert!(wrong_password_err.is_bad_credentials());
    assert_eq!(unknown_user_err.to_string(), wrong_password_err.to_string());
}

#[tokio::test]
async fn without_hiding_the_failure_causes_differ() {
    let repo = repo_with_alice();

    let unknown_user_err = LdapAuthenticationProvider::new(
        repo.clone(),
        CountingDirectory::accepting(),
        config(false, false),
    )
    .authenticate(&CredentialToken::password("ghost", "whatever", "main"))
    .await
    .unwrap_err();

    let wrong_password_err = LdapAuthenticationProvider::new(
        repo,
        CountingDirectory::rejecting(),
        config(false, false),
    )
    .authenticate(&CredentialToken::password("alice", "wrong", "main"))
    .await
    .unwrap_err();

    assert!(matches!(
        unknown_user_err,
        AuthenticationError::UserNotFound(ref name) if name == "ghost"
    ));
    assert!(matches!(
        wrong_password_err,
        AuthenticationError::AuthenticationFailed
    ));
}

#[tokio::test]
async fn resolve_first_uses_only_the_standard_bind() {
    let directory = CountingDirectory::accepting();
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, false),
    );

    provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap();

    assert_eq!(directory.binds.load(Ordering::SeqCst), 1);
    assert_eq!(directory.direct_binds.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bind_first_uses_only_the_direct_bind() {
    let directory = CountingDirectory::accepting();
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, true),
    );

    provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap();

    assert_eq!(directory.binds.load(Ordering::SeqCst), 0);
    assert_eq!(directory.direct_binds.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bind_first_reloads_the_full_identity_after_binding() {
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        CountingDirectory::accepting(),
        config(true, true),
    );

    let token = provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap();

    // The placeholder had no roles; the reloaded identity does.
    assert_eq!(token.roles(), [roles::ROLE_USER.to_string()]);
    assert!(token.user().dn.is_some());
}

#[tokio::test]
async fn bind_first_reload_miss_follows_the_hide_policy() {
    let empty_repo = Arc::new(InMemoryUserRepository::new());

    let hidden_err = LdapAuthenticationProvider::new(
        empty_repo.clone(),
        CountingDirectory::accepting(),
        config(true, true),
    )
    .authenticate(&CredentialToken::password("alice", "correct", "main"))
    .await
    .unwrap_err();
    assert!(hidden_err.is_bad_credentials());

    let surfaced_err = LdapAuthenticationProvider::new(
        empty_repo,
        CountingDirectory::accepting(),
        config(false, true),
    )
    .authenticate(&CredentialToken::password("alice", "correct", "main"))
    .await
    .unwrap_err();
    assert!(matches!(
        surfaced_err,
        AuthenticationError::UserNotFound(ref name) if name == "alice"
    ));
}

#[tokio::test]
async fn hook_veto_short_circuits_before_any_bind() {
    let directory = CountingDirectory::accepting();
    let broadcaster = RecordingBroadcaster::vetoing("account disabled");
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, false),
    )
    .with_broadcaster(broadcaster.clone());

    let err = provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap_err();

    assert!(err.is_bad_credentials());
    assert_eq!(broadcaster.published.load(Ordering::SeqCst), 1);
    assert_eq!(directory.total_calls(), 0);
}

#[tokio::test]
async fn hook_veto_surfaces_its_reason_without_hiding() {
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        CountingDirectory::accepting(),
        config(false, false),
    )
    .with_broadcaster(RecordingBroadcaster::vetoing("account disabled"));

    let err = provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuthenticationError::Vetoed(ref reason) if reason == "account disabled"
    ));
}

#[tokio::test]
async fn passing_hook_still_reaches_the_bind() {
    let directory = CountingDirectory::accepting();
    let broadcaster = RecordingBroadcaster::passing();
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, false),
    )
    .with_broadcaster(broadcaster.clone());

    provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap();

    assert_eq!(broadcaster.published.load(Ordering::SeqCst), 1);
    assert_eq!(directory.total_calls(), 1);
}

#[tokio::test]
async fn missing_broadcaster_does_not_alter_the_outcome() {
    let directory = CountingDirectory::accepting();
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, false),
    );

    let token = provider
        .authenticate(&CredentialToken::password("alice", "correct", "main"))
        .await
        .unwrap();

    assert!(token.is_authenticated());
    assert_eq!(directory.total_calls(), 1);
}

#[tokio::test]
async fn every_call_rebinds_against_the_directory() {
    let directory = CountingDirectory::accepting();
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        directory.clone(),
        config(true, false),
    );

    let credential = CredentialToken::password("alice", "correct", "main");
    let first = provider.authenticate(&credential).await.unwrap();
    let second = provider.authenticate(&credential).await.unwrap();

    assert!(first.is_authenticated());
    assert!(second.is_authenticated());
    assert_eq!(directory.binds.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn pre_authenticated_credentials_are_accepted() {
    let provider = LdapAuthenticationProvider::new(
        repo_with_alice(),
        CountingDirectory::accepting(),
        config(true, false),
    );

    let token = provider
        .authenticate(&CredentialToken::pre_authenticated("alice", "correct", "main"))
        .await
        .unwrap();

    assert!(token.is_authenticated());
}
