use serde::Serialize;

use super::background::BackgroundReply;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Unsafe,
    Caution,
    Safe,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskBand::Unsafe
        } else if score > 30 {
            RiskBand::Caution
        } else {
            RiskBand::Safe
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskBand::Unsafe => "red",
            RiskBand::Caution => "orange",
            RiskBand::Safe => "green",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            RiskBand::Unsafe => "Unsafe / Scam Likely",
            RiskBand::Caution => "Caution Advised",
            RiskBand::Safe => "Safe",
        }
    }
}

/// The floating indicator the content script pins to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub band: RiskBand,
    pub color: &'static str,
    pub text: String,
}

impl Badge {
    pub fn for_score(score: u8) -> Self {
        let band = RiskBand::from_score(score);
        Self {
            band,
            color: band.color(),
            text: format!("Safe WebTrust risk: {}", score),
        }
    }

    /// No badge is drawn when the scan failed.
    pub fn from_reply(reply: BackgroundReply) -> Option<Self> {
        match reply.into_result() {
            Ok(result) => Some(Self::for_score(result.risk_score)),
            Err(e) => {
                tracing::error!("Scan error: {}", e);
                None
            }
        }
    }
}
