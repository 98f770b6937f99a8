//! Main verifier that ties configuration, reconciliation and reporting together

use log::info;

use crate::config::VerifierConfig;
use crate::reconciliation::TableReconciler;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::validate_column_selection;
use crate::verification::report::VerificationReport;

/// Verifies EUR price lists against their BGN originals
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifierConfig,
    reconciler: TableReconciler,
}

impl Verifier {
    /// Create a verifier with the given configuration
    pub fn new(config: VerifierConfig) -> VerifierResult<Self> {
        config.validate()?;
        let reconciler = TableReconciler::new(&config);
        Ok(Self { config, reconciler })
    }

    /// Configuration the verifier was built with
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Reconciler driving each run
    pub fn reconciler(&self) -> &TableReconciler {
        &self.reconciler
    }

    /// Verify the selected columns of `source` (BGN) against `target` (EUR)
    pub fn verify<A, B, S>(
        &self,
        source: &A,
        target: &B,
        columns: &[S],
    ) -> VerifierResult<VerificationReport>
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        self.verify_inner(source, target, columns, None)
    }

    /// Same as [`Verifier::verify`], reporting progress to `observer`
    pub fn verify_with_progress<A, B, S>(
        &self,
        source: &A,
        target: &B,
        columns: &[S],
        observer: &mut dyn ProgressObserver,
    ) -> VerifierResult<VerificationReport>
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        self.verify_inner(source, target, columns, Some(observer))
    }

    fn verify_inner<A, B, S>(
        &self,
        source: &A,
        target: &B,
        columns: &[S],
        observer: Option<&mut dyn ProgressObserver>,
    ) -> VerifierResult<VerificationReport>
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        validate_column_selection(columns)?;

        let mut requested: Vec<&str> = Vec::new();
        for name in columns.iter().map(AsRef::as_ref) {
            if !requested.iter().any(|r| r.trim() == name.trim()) {
                requested.push(name);
            }
        }

        let outcome = self.reconciler.run(source, target, &requested, observer);
        let report = VerificationReport::from_outcome(outcome, requested.len());

        info!("{}", report.message());
        Ok(report)
    }
}

impl Default for Verifier {
    fn default() -> Self {
        let config = VerifierConfig::default();
        let reconciler = TableReconciler::new(&config);
        Self { config, reconciler }
    }
}
