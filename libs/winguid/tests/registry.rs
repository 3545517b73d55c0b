//! Registry behavior across threads and manifest files.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use winguid::{Guid, Manifest, ManifestError, Registry, RegistryError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn numbered(n: u32) -> Guid {
    Guid::from_fields(n, 0x1000, 0x2000, [0x80, 0, 0, 0, 0, 0, 0, n as u8])
}

#[test]
fn concurrent_identical_registrations_all_succeed() {
    init_tracing();
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for n in 0..64 {
                    registry.register(format!("guid-{n}"), numbered(n))?;
                }
                Ok::<_, RegistryError>(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(registry.len(), 64);
    for n in 0..64 {
        let name = format!("guid-{n}");
        assert_eq!(registry.guid_of(&name), Some(numbered(n)));
        assert_eq!(registry.name_of(&numbered(n)), Some(name));
    }
}

#[test]
fn concurrent_claims_on_one_name_have_one_winner() {
    init_tracing();
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.register("contested", numbered(n)))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(RegistryError::is_multiple_guid));

    let bound = registry.guid_of("contested").unwrap();
    assert_eq!(registry.name_of(&bound).as_deref(), Some("contested"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn manifest_file_seeds_registry() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[guids]
IUnknown = "{{00000000-0000-0000-C000-000000000046}}"
IDispatch = "00020400-0000-0000-c000-000000000046"
"#
    )
    .unwrap();

    let manifest = Manifest::load(file.path()).unwrap();
    let registry = Arc::new(Registry::from_manifest(&manifest).unwrap());

    let iunknown = registry.guid_of("IUnknown").unwrap();
    assert_eq!(iunknown.to_string(), "{00000000-0000-0000-c000-000000000046}");
    assert_eq!(
        registry.name_of(&"{00020400-0000-0000-C000-000000000046}".parse().unwrap()),
        Some("IDispatch".to_string())
    );

    // Re-applying the same manifest is a no-op.
    manifest.apply(&registry).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn manifest_conflicting_with_registry_is_rejected() {
    let registry = Registry::new();
    registry
        .register("IUnknown", Guid::must_parse("{00000000-0000-0000-c000-000000000046}"))
        .unwrap();

    let manifest =
        Manifest::from_toml_str("[guids]\nIUnknown = \"00000000-0000-0000-c000-000000000047\"\n")
            .unwrap();

    match manifest.apply(&registry) {
        Err(ManifestError::Registry(RegistryError::MultipleGuid { name, .. })) => {
            assert_eq!(name, "IUnknown");
        }
        other => panic!("expected MultipleGuid, got {other:?}"),
    }
}

#[test]
fn missing_manifest_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Manifest::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io(_)));
}
