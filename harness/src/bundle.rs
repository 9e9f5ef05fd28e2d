//! In-memory report bundle: the output of a scenario run.
//!
//! No file I/O: bundles exist only in memory for the lifetime of a run.
//!
//! # Normative vs observational artifacts
//!
//! Each artifact is tagged `normative` (participates in the bundle digest)
//! or observational (listed in the manifest, excluded from the digest).
//! Scenario bundles are fully normative; the flag exists so callers can
//! attach diagnostics without disturbing the digest.
//!
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.
//!
//! # Report binding
//!
//! When `report.json` is present it declares the engine that produced
//! `result.json` and two digests, `policy_digest` over `policy.json` and
//! `result_digest` over `result.json`, each under its own hash domain.
//! [`verify_bundle`] recomputes both.

use std::collections::BTreeMap;

use deliberate_kernel::proof::canon::canonical_json_bytes;
use deliberate_kernel::proof::hash::{canonical_hash, ContentHash};
use deliberate_kernel::proof::hash_domain::HashDomain;

/// Domain prefix for bundle artifact content hashing.
pub const DOMAIN_BUNDLE_ARTIFACT: HashDomain = HashDomain::BundleArtifact;

/// Domain prefix for bundle digest computation.
pub const DOMAIN_BUNDLE_DIGEST: HashDomain = HashDomain::BundleDigest;

/// Domain prefix for `policy_digest` in `report.json`.
pub const DOMAIN_POLICY_SNAPSHOT: HashDomain = HashDomain::PolicySnapshot;

pub const POLICY_ARTIFACT: &str = "policy.json";
pub const RESULT_ARTIFACT: &str = "result.json";
pub const REPORT_ARTIFACT: &str = "report.json";
pub const FIXTURE_ARTIFACT: &str = "fixture.json";

/// The engine family that produced a `result.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Path,
    Climb,
    Csp,
    Adversarial,
}

impl EngineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Climb => "climb",
            Self::Csp => "csp",
            Self::Adversarial => "adversarial",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "path" => Some(Self::Path),
            "climb" => Some(Self::Climb),
            "csp" => Some(Self::Csp),
            "adversarial" => Some(Self::Adversarial),
            _ => None,
        }
    }

    /// Hash domain for this engine's `result_digest`.
    #[must_use]
    pub fn result_domain(self) -> HashDomain {
        match self {
            Self::Path => HashDomain::PathReport,
            Self::Climb => HashDomain::ClimbReport,
            Self::Csp => HashDomain::CspReport,
            Self::Adversarial => HashDomain::AdversarialReport,
        }
    }
}

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g., `"result.json"`).
    pub name: String,
    pub content: Vec<u8>,
    /// `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the bundle digest.
    pub normative: bool,
}

/// The complete report bundle from a scenario run.
#[derive(Debug, Clone)]
pub struct ReportBundleV1 {
    /// Artifacts indexed by logical name, in sorted order.
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
    pub digest: ContentHash,
}

impl ReportBundleV1 {
    #[must_use]
    pub fn artifact(&self, name: &str) -> Option<&BundleArtifact> {
        self.artifacts.get(name)
    }

    /// Parse a JSON artifact. `None` if absent or not JSON.
    #[must_use]
    pub fn json(&self, name: &str) -> Option<serde_json::Value> {
        self.artifact(name)
            .and_then(|a| serde_json::from_slice(&a.content).ok())
    }
}

/// Error building a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleBuildError {
    CanonError { detail: String },
    /// Two inputs share a name.
    DuplicateArtifact { name: String },
}

impl std::fmt::Display for BundleBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::DuplicateArtifact { name } => write!(f, "duplicate artifact: {name}"),
        }
    }
}

impl std::error::Error for BundleBuildError {}

/// Input for bundle assembly: `(name, content, normative)`.
pub type ArtifactInput = (String, Vec<u8>, bool);

/// Build a [`ReportBundleV1`] from artifact inputs.
///
/// # Errors
///
/// Returns [`BundleBuildError`] on a duplicate name or canonical JSON error.
pub fn build_bundle(inputs: Vec<ArtifactInput>) -> Result<ReportBundleV1, BundleBuildError> {
    let mut artifacts = BTreeMap::new();
    for (name, content, normative) in inputs {
        if artifacts.contains_key(&name) {
            return Err(BundleBuildError::DuplicateArtifact { name });
        }
        let content_hash = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &content);
        artifacts.insert(
            name.clone(),
            BundleArtifact {
                name,
                content,
                content_hash,
                normative,
            },
        );
    }

    let manifest =
        manifest_bytes(&artifacts).map_err(|detail| BundleBuildError::CanonError { detail })?;
    let digest_basis =
        digest_basis_bytes(&artifacts).map_err(|detail| BundleBuildError::CanonError { detail })?;
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);

    Ok(ReportBundleV1 {
        artifacts,
        manifest,
        digest_basis,
        digest,
    })
}

/// Error from bundle integrity verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleVerifyError {
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    /// Stored manifest differs from the one recomputed from artifacts.
    ManifestMismatch,
    /// Stored digest basis differs from the normative projection.
    DigestBasisMismatch,
    DigestMismatch { expected: String, actual: String },
    /// A normative JSON artifact is not in canonical form.
    ArtifactNotCanonical { artifact: String },
    /// `report.json` exists but an artifact it binds is missing.
    ArtifactMissing { artifact: String },
    ReportFieldMissing { field: String },
    UnknownEngine { engine: String },
    /// A digest declared in `report.json` does not match its artifact.
    BindingMismatch {
        field: String,
        declared: String,
        recomputed: String,
    },
    CanonError { detail: String },
}

impl std::fmt::Display for BundleVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentHashMismatch {
                artifact,
                expected,
                actual,
            } => write!(f, "{artifact}: content hash {actual}, manifest says {expected}"),
            Self::ManifestMismatch => f.write_str("manifest does not match artifacts"),
            Self::DigestBasisMismatch => f.write_str("digest basis does not match artifacts"),
            Self::DigestMismatch { expected, actual } => {
                write!(f, "bundle digest {actual}, expected {expected}")
            }
            Self::ArtifactNotCanonical { artifact } => {
                write!(f, "{artifact} is not canonical JSON")
            }
            Self::ArtifactMissing { artifact } => write!(f, "missing artifact: {artifact}"),
            Self::ReportFieldMissing { field } => write!(f, "report field missing: {field}"),
            Self::UnknownEngine { engine } => write!(f, "unknown engine: {engine}"),
            Self::BindingMismatch {
                field,
                declared,
                recomputed,
            } => write!(f, "{field}: declared {declared}, recomputed {recomputed}"),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for BundleVerifyError {}

/// Verify the internal consistency of a bundle.
///
/// Proves:
///
/// 1. Each artifact's `content_hash` matches its content.
/// 2. `manifest` and `digest_basis` match projections recomputed from the
///    artifacts (which also makes them canonical).
/// 3. `digest` matches `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
/// 4. Normative `.json` artifacts are in canonical form.
/// 5. If `report.json` exists, its `policy_digest` and `result_digest` match
///    `policy.json` and `result.json` under their domains.
///
/// # Errors
///
/// Returns the first [`BundleVerifyError`] encountered.
pub fn verify_bundle(bundle: &ReportBundleV1) -> Result<(), BundleVerifyError> {
    for artifact in bundle.artifacts.values() {
        let recomputed = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(BundleVerifyError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
    }

    let manifest = manifest_bytes(&bundle.artifacts)
        .map_err(|detail| BundleVerifyError::CanonError { detail })?;
    if manifest != bundle.manifest {
        return Err(BundleVerifyError::ManifestMismatch);
    }

    let basis = digest_basis_bytes(&bundle.artifacts)
        .map_err(|detail| BundleVerifyError::CanonError { detail })?;
    if basis != bundle.digest_basis {
        return Err(BundleVerifyError::DigestBasisMismatch);
    }

    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &bundle.digest_basis);
    if digest != bundle.digest {
        return Err(BundleVerifyError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            actual: digest.as_str().to_string(),
        });
    }

    for artifact in bundle.artifacts.values() {
        let is_json = std::path::Path::new(&artifact.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if artifact.normative && is_json && !is_canonical_json(&artifact.content) {
            return Err(BundleVerifyError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }

    verify_report_binding(bundle)
}

fn verify_report_binding(bundle: &ReportBundleV1) -> Result<(), BundleVerifyError> {
    let Some(report) = bundle.json(REPORT_ARTIFACT) else {
        return Ok(());
    };

    let engine_name = report_field(&report, "engine")?;
    let engine = EngineKind::parse(engine_name).ok_or_else(|| BundleVerifyError::UnknownEngine {
        engine: engine_name.to_string(),
    })?;

    for (field, artifact, domain) in [
        ("policy_digest", POLICY_ARTIFACT, DOMAIN_POLICY_SNAPSHOT),
        ("result_digest", RESULT_ARTIFACT, engine.result_domain()),
    ] {
        let declared = report_field(&report, field)?;
        let content = &bundle
            .artifact(artifact)
            .ok_or_else(|| BundleVerifyError::ArtifactMissing {
                artifact: artifact.to_string(),
            })?
            .content;
        let recomputed = canonical_hash(domain, content);
        if recomputed.as_str() != declared {
            return Err(BundleVerifyError::BindingMismatch {
                field: field.to_string(),
                declared: declared.to_string(),
                recomputed: recomputed.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn report_field<'a>(report: &'a serde_json::Value, field: &str) -> Result<&'a str, BundleVerifyError> {
    report[field]
        .as_str()
        .ok_or_else(|| BundleVerifyError::ReportFieldMissing {
            field: field.to_string(),
        })
}

fn manifest_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Result<Vec<u8>, String> {
    let listed: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();
    canonical_json_bytes(&serde_json::json!({
        "artifacts": listed,
        "schema_version": "report_bundle.v1",
    }))
    .map_err(|e| e.to_string())
}

fn digest_basis_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Result<Vec<u8>, String> {
    let normative: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();
    canonical_json_bytes(&serde_json::json!({
        "artifacts": normative,
        "schema_version": "report_bundle_digest_basis.v1",
    }))
    .map_err(|e| e.to_string())
}

/// Parse, re-canonicalize and compare.
fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| canonical_json_bytes(&value).ok())
        .is_some_and(|canonical| canonical == bytes)
}
