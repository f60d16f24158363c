use std::{
    sync::{Arc, Barrier},
    thread,
};

use log::Level;
use stamina_shared::{
    CapabilityHost, CapabilityResolver, DiscoveryError, EntryPoint, ProcessRole,
    ResolutionStatus, ResolverConfig,
};
use stamina_test::{unique_name, LogCapture, MockCapability, TestHostBuilder, TestPlayer};

#[test]
fn test_cached_binding_is_reused() {
    let logs = LogCapture::install();
    let mut builder = TestHostBuilder::new();
    for role in ProcessRole::ALL {
        builder = builder.bind(role, Arc::new(MockCapability::new()));
    }
    let host = builder.build();
    let resolver = host.resolver();

    for role in ProcessRole::ALL {
        let first = resolver.resolve(role).expect("bound");
        let second = resolver.resolve(role).expect("bound");

        assert!(Arc::ptr_eq(&first, &second), "{} binding", role);
        assert_eq!(resolver.status(role), ResolutionStatus::Cached);
        let bound_via = format!("{}.{}", host.entry_point(), role.accessor_name());
        assert_eq!(logs.count(Level::Info, &bound_via), 1, "{} success log", role);
    }
    assert_eq!(host.lookups(), ProcessRole::ALL.len());
}

#[test]
fn test_disabled_subsystem_is_never_looked_up() {
    let logs = LogCapture::install();
    let host = TestHostBuilder::new()
        .disabled()
        .bind(ProcessRole::Server, Arc::new(MockCapability::new()))
        .build();
    let resolver = host.resolver();

    for _ in 0..3 {
        assert!(resolver.resolve(ProcessRole::Server).is_none());
    }

    assert!(!resolver.is_enabled());
    assert_eq!(host.lookups(), 0);
    assert_eq!(resolver.status(ProcessRole::Server), ResolutionStatus::NotAttempted);
    assert!(logs.records_containing(host.entry_point()).is_empty());
}

#[test]
fn test_missing_entry_point_warns_once_and_retries() {
    let logs = LogCapture::install();
    let host = TestHostBuilder::new().unregistered().build();
    let resolver = host.resolver();

    for role in ProcessRole::ALL {
        for _ in 0..4 {
            assert!(resolver.resolve(role).is_none());
        }
        assert_eq!(resolver.status(role), ResolutionStatus::AttemptedOnce);
    }

    assert_eq!(host.lookups(), 4 * ProcessRole::ALL.len());
    for role in ProcessRole::ALL {
        let warnings = logs
            .records_containing(host.entry_point())
            .into_iter()
            .filter(|record| record.level == Level::Warn)
            .filter(|record| record.message.contains(&format!("for {} role", role)))
            .count();
        assert_eq!(warnings, 1, "{} warning", role);
    }
    assert_eq!(logs.count(Level::Error, host.entry_point()), 0);
}

#[test]
fn test_missing_accessor_warns_once() {
    let logs = LogCapture::install();
    let host = TestHostBuilder::new()
        .bind(ProcessRole::Client, Arc::new(MockCapability::new()))
        .build();
    let resolver = host.resolver();

    // only ClientAPI was filled in
    assert!(resolver.resolve(ProcessRole::Server).is_none());
    assert!(resolver.resolve(ProcessRole::Server).is_none());
    assert!(resolver.resolve(ProcessRole::Client).is_some());

    let warnings = logs
        .records_containing(host.entry_point())
        .into_iter()
        .filter(|record| record.level == Level::Warn)
        .collect::<Vec<_>>();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("ServerAPI"));
}

#[test]
fn test_empty_accessor_is_retried_until_filled() {
    let logs = LogCapture::install();
    let host = TestHostBuilder::new()
        .empty_accessor(ProcessRole::Server)
        .build();
    let resolver = host.resolver();

    assert!(resolver.resolve(ProcessRole::Server).is_none());
    assert!(resolver.resolve(ProcessRole::Server).is_none());
    assert_eq!(logs.count(Level::Warn, host.entry_point()), 1);

    // the subsystem finishes loading
    let entry_point = host.registry().find_entry_point(host.entry_point()).unwrap();
    let replacement = stamina_shared::StaminaEntryPoint::<TestPlayer>::new(entry_point.name())
        .with_role(ProcessRole::Server, Arc::new(MockCapability::new()));
    host.registry().register(Arc::new(replacement)).unwrap();

    assert!(resolver.resolve(ProcessRole::Server).is_some());
    assert_eq!(logs.count(Level::Info, host.entry_point()), 1);
}

#[test]
fn test_unknown_role_reads_generic_accessor() {
    let host = TestHostBuilder::new()
        .bind(ProcessRole::Unknown, Arc::new(MockCapability::new()))
        .build();
    let resolver = host.resolver();

    assert!(resolver.resolve(ProcessRole::Unknown).is_some());
    assert!(resolver.resolve(ProcessRole::Server).is_none());
    assert!(resolver.resolve(ProcessRole::Client).is_none());
}

struct PanickingHost {
    marker: String,
}

impl CapabilityHost<TestPlayer> for PanickingHost {
    fn is_enabled(&self) -> bool {
        true
    }

    fn find_entry_point(
        &self,
        _name: &str,
    ) -> Result<Arc<dyn EntryPoint<TestPlayer>>, DiscoveryError> {
        panic!("lookup machinery broke: {}", self.marker);
    }
}

#[test]
fn test_lookup_panic_logs_error_once_per_role() {
    let logs = LogCapture::install();
    let marker = unique_name("broken_host");
    let host = Arc::new(PanickingHost {
        marker: marker.clone(),
    });
    let resolver: CapabilityResolver<TestPlayer> =
        CapabilityResolver::new(host, ResolverConfig::default());

    for role in ProcessRole::ALL {
        assert!(resolver.resolve(role).is_none());
        assert!(resolver.resolve(role).is_none());
    }

    for role in ProcessRole::ALL {
        let errors = logs
            .records_containing(&marker)
            .into_iter()
            .filter(|record| record.level == Level::Error)
            .filter(|record| record.message.contains(&format!("for {} role", role)))
            .count();
        assert_eq!(errors, 1, "{} error", role);
    }
    assert_eq!(logs.count(Level::Warn, &marker), 0);
}

#[test]
fn test_concurrent_first_resolution_logs_once() {
    let logs = LogCapture::install();
    let host = TestHostBuilder::new()
        .bind(ProcessRole::Server, Arc::new(MockCapability::new()))
        .build();
    let resolver = host.resolver();
    let barrier = Arc::new(Barrier::new(8));

    let handles = (0..8)
        .map(|_| {
            let resolver = resolver.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                resolver.resolve(ProcessRole::Server).is_some()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(host.lookups(), 1);
    assert_eq!(logs.count(Level::Info, host.entry_point()), 1);
}
