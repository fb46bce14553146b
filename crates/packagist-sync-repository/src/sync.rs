//! Update-or-create synchronization of a single package.
//!
//! ```text
//! update ──ok──────────────► Updated
//!   │ 404
//!   ▼
//! create ──ok──────────────► Created
//!   │ error            ▲
//!   ▼                  │
//! Failed ◄──other error┘ (from update or create)
//! ```
//!
//! Each registry call is made at most once per run.

use packagist_sync_core::Result;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// Future returned by [`PackageRegistry`] operations.
pub type RegistryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a>>;

/// Result of asking the registry to update a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The registry accepted the update.
    Updated,
    /// The registry has no package under this name.
    NotFound {
        /// Package name that was looked up.
        package_name: String,
    },
}

/// Final state of a successful synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// An existing package was updated.
    Updated,
    /// The package did not exist and was created.
    Created,
}

/// Progress notifications emitted while synchronizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent<'a> {
    /// About to request an update.
    Updating,
    /// The registry does not know the package.
    NotFound {
        /// Package name that was looked up.
        package_name: &'a str,
    },
    /// About to request creation.
    Creating,
}

/// Registry operations needed to synchronize a package.
pub trait PackageRegistry {
    /// Request an update of the package.
    fn update_package(&self) -> RegistryFuture<'_, UpdateOutcome>;

    /// Request creation of the package.
    fn create_package(&self) -> RegistryFuture<'_, ()>;
}

/// Update the package, creating it if the registry does not know it.
///
/// # Errors
/// Returns the first error other than "package not found".
pub async fn synchronize<R>(registry: &R) -> Result<SyncOutcome>
where
    R: PackageRegistry + ?Sized,
{
    synchronize_with(registry, |_| {}).await
}

/// [`synchronize`], reporting progress to `on_event`.
///
/// # Errors
/// Returns the first error other than "package not found".
pub async fn synchronize_with<R, F>(registry: &R, mut on_event: F) -> Result<SyncOutcome>
where
    R: PackageRegistry + ?Sized,
    F: FnMut(SyncEvent<'_>),
{
    on_event(SyncEvent::Updating);
    match registry.update_package().await? {
        UpdateOutcome::Updated => {
            info!("package updated");
            Ok(SyncOutcome::Updated)
        }
        UpdateOutcome::NotFound { package_name } => {
            info!(package = %package_name, "package not found, creating it");
            on_event(SyncEvent::NotFound {
                package_name: &package_name,
            });
            on_event(SyncEvent::Creating);
            registry.create_package().await?;
            info!(package = %package_name, "package created");
            Ok(SyncOutcome::Created)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RegistryClient;
    use packagist_sync_config::SyncConfig;
    use packagist_sync_core::{Error, ErrorKind};
    use std::cell::{Cell, RefCell};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Scripted registry answering from queued results.
    #[derive(Default)]
    struct FakeRegistry {
        update: RefCell<Option<Result<UpdateOutcome>>>,
        create: RefCell<Option<Result<()>>>,
        updates: Cell<usize>,
        creates: Cell<usize>,
    }

    impl FakeRegistry {
        fn new(update: Result<UpdateOutcome>, create: Result<()>) -> Self {
            Self {
                update: RefCell::new(Some(update)),
                create: RefCell::new(Some(create)),
                ..Self::default()
            }
        }
    }

    impl PackageRegistry for FakeRegistry {
        fn update_package(&self) -> RegistryFuture<'_, UpdateOutcome> {
            self.updates.set(self.updates.get() + 1);
            let result = self.update.borrow_mut().take().unwrap();
            Box::pin(async move { result })
        }

        fn create_package(&self) -> RegistryFuture<'_, ()> {
            self.creates.set(self.creates.get() + 1);
            let result = self.create.borrow_mut().take().unwrap();
            Box::pin(async move { result })
        }
    }

    fn not_found() -> Result<UpdateOutcome> {
        Ok(UpdateOutcome::NotFound {
            package_name: "acme/widget".into(),
        })
    }

    #[tokio::test]
    async fn updated_package_is_not_created() {
        let registry = FakeRegistry::new(Ok(UpdateOutcome::Updated), Ok(()));

        let outcome = synchronize(&registry).await.unwrap();

        assert_eq!(outcome, SyncOutcome::Updated);
        assert_eq!(registry.updates.get(), 1);
        assert_eq!(registry.creates.get(), 0);
    }

    #[tokio::test]
    async fn missing_package_is_created_once() {
        let registry = FakeRegistry::new(not_found(), Ok(()));
        let mut events = Vec::new();

        let outcome = synchronize_with(&registry, |event| events.push(format!("{event:?}")))
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::Created);
        assert_eq!(registry.creates.get(), 1);
        assert_eq!(
            events,
            [
                "Updating",
                r#"NotFound { package_name: "acme/widget" }"#,
                "Creating"
            ]
        );
    }

    #[tokio::test]
    async fn update_failure_aborts() {
        let registry = FakeRegistry::new(Err(Error::registry(Some("denied".into()))), Ok(()));

        let err = synchronize(&registry).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Registry);
        assert_eq!(registry.creates.get(), 0);
    }

    #[tokio::test]
    async fn create_failure_is_final() {
        let registry = FakeRegistry::new(not_found(), Err(Error::Transport));

        let err = synchronize(&registry).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(registry.updates.get(), 1);
        assert_eq!(registry.creates.get(), 1);
    }

    #[tokio::test]
    async fn registry_404_falls_back_to_create() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/update-package"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/create-package"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let config = SyncConfig::builder()
            .api_token("secret".to_string())
            .packagist_domain(server.uri())
            .package_name("acme/widget".to_string())
            .github_repository_url("https://github.com/acme/widget".to_string())
            .build();
        let client = RegistryClient::new(config).unwrap();

        assert_eq!(synchronize(&client).await.unwrap(), SyncOutcome::Created);
    }

    #[tokio::test]
    async fn registry_update_success_skips_create() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/update-package"))
            .respond_with(ResponseTemplate::new(202).set_body_string(r#"{"status":"success"}"#))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/create-package"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
            .expect(0)
            .mount(&server)
            .await;

        let config = SyncConfig::builder()
            .api_token("secret".to_string())
            .packagist_domain(server.uri())
            .package_name("acme/widget".to_string())
            .build();
        let client = RegistryClient::new(config).unwrap();

        assert_eq!(synchronize(&client).await.unwrap(), SyncOutcome::Updated);
    }
}
