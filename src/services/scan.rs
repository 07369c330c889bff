use crate::{
    errors::AppError,
    external::{TextGenerator, ThreatIntel},
    models::{ScanResult, ScanTarget},
};

pub fn scan_prompt(url: &str) -> String {
    format!(
        "Analyze the following URL for potential scam, phishing, or unsafe behavior. \
        Provide a risk score (0=safe to 100=high risk) and a short explanation:\n\nURL: {}",
        url
    )
}

/// Runs the threat lookup and the AI analysis side by side. Either failing
/// fails the scan; there is no partial result.
pub async fn scan_url(
    target: ScanTarget,
    threat_intel: &dyn ThreatIntel,
    ai: &dyn TextGenerator,
) -> Result<ScanResult, AppError> {
    let prompt = scan_prompt(target.as_str());

    let (lookup, ai_analysis) =
        tokio::try_join!(threat_intel.lookup(target.as_str()), ai.generate(&prompt))?;

    if ai_analysis.trim().is_empty() {
        return Err(AppError::Ai("Empty AI analysis".into()));
    }

    tracing::info!(
        "Scanned {}: {} threat match(es)",
        target.as_str(),
        lookup.matches.len()
    );

    Ok(ScanResult::merge(target, lookup, ai_analysis))
}
