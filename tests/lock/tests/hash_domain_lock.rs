//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has the expected count (catches additions missed in review)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `DELIBERATE::*::V1\0` naming convention
//! 5. No raw `DELIBERATE::` domain literals in production source outside `hash_domain.rs`
//! 6. Every engine result domain is distinct from the bundle domains

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use deliberate_harness::bundle::{
    EngineKind, DOMAIN_BUNDLE_ARTIFACT, DOMAIN_BUNDLE_DIGEST, DOMAIN_POLICY_SNAPSHOT,
};
use deliberate_kernel::proof::hash_domain::HashDomain;

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        7,
        "expected 7 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2-4. Byte-level shape
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
    }
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.ends_with(&[0]), "{domain} is not null-terminated");
        assert_eq!(
            bytes.iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior NUL"
        );
    }
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"DELIBERATE::"),
            "{domain} does not start with DELIBERATE::"
        );
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

// ---------------------------------------------------------------------------
// 5. No raw domain literals in production source
// ---------------------------------------------------------------------------

/// Scan kernel/, search/, harness/ source for `b"DELIBERATE::` literals.
/// The only file allowed to contain them is `hash_domain.rs`.
///
/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"DELIBERATE::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for crate_dir in ["kernel", "search", "harness"] {
        for path in rust_files(&root.join(crate_dir).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in production_lines(&content) {
                if line.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw DELIBERATE:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// Lines outside `#[cfg(test)]` blocks and comments, with their indices.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();
        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }
        brace_depth = brace_depth.saturating_add(opens).saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }
        if !trimmed.starts_with("//") {
            lines.push((i, line));
        }
    }
    lines
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rust_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                results.push(path);
            }
        }
    }
    results
}

// ---------------------------------------------------------------------------
// 6. Engine domains
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-ENGINES
#[test]
fn engine_result_domains_are_distinct_and_not_bundle_domains() {
    let engines = [
        EngineKind::Path,
        EngineKind::Climb,
        EngineKind::Csp,
        EngineKind::Adversarial,
    ];
    let result_domains: BTreeSet<&[u8]> = engines
        .iter()
        .map(|e| e.result_domain().as_bytes())
        .collect();
    assert_eq!(result_domains.len(), engines.len());
    for reserved in [
        DOMAIN_BUNDLE_ARTIFACT,
        DOMAIN_BUNDLE_DIGEST,
        DOMAIN_POLICY_SNAPSHOT,
    ] {
        assert!(!result_domains.contains(reserved.as_bytes()), "{reserved}");
    }
    for engine in engines {
        assert_eq!(EngineKind::parse(engine.as_str()), Some(engine));
    }
}
