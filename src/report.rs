//! Ranking report and its markdown formatter

use crate::parcel::ParcelCatalog;
use crate::ranking::{rank_parcels, top_parcel, RankedParcel, TopParcel};
use crate::weights::{Persona, WeightSet};
use serde::Serialize;

/// Everything needed to present one scoring pass
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub persona: Persona,
    pub weights: WeightSet,
    pub top: TopParcel,
    pub ranked: Vec<RankedParcel>,
    /// Last council sentiment scraped in this session, if any
    pub scraped_sentiment: Option<u8>,
}

impl RankingReport {
    pub fn build(catalog: &ParcelCatalog, persona: Persona, weights: WeightSet) -> Self {
        let ranked = rank_parcels(catalog, &weights);
        Self {
            persona,
            weights,
            top: top_parcel(&ranked),
            ranked,
            scraped_sentiment: None,
        }
    }

    pub fn with_scraped_sentiment(mut self, sentiment: Option<u8>) -> Self {
        self.scraped_sentiment = sentiment;
        self
    }
}

/// Markdown formatter for ranking reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(report: &RankingReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Suitability Engine – Upper Midwest\n\n");
        md.push_str(&format!("**Persona:** {}\n\n", report.persona));

        md.push_str("## Global Suitability Overview\n\n");
        md.push_str(&format!(
            "**Top Parcel Score:** {:.1} / 100  \n",
            report.top.score
        ));
        md.push_str(&format!("**Top Parcel:** {}\n\n", report.top.name));

        Self::format_weights(&mut md, &report.weights);

        if let Some(sentiment) = report.scraped_sentiment {
            md.push_str(&format!(
                "*Last scraped council sentiment score:* **{} / 100**\n\n",
                sentiment
            ));
        }

        md.push_str("## Parcels\n\n");
        for entry in &report.ranked {
            Self::format_parcel(&mut md, entry);
        }

        md
    }

    fn format_weights(md: &mut String, weights: &WeightSet) {
        md.push_str("| Weight | Value |\n|---|---|\n");
        for (key, value) in weights.iter() {
            md.push_str(&format!("| {} | {} |\n", key.display_text(), value));
        }
        md.push('\n');
    }

    fn format_parcel(md: &mut String, entry: &RankedParcel) {
        md.push_str(&format!("### {} — {:.1}\n\n", entry.name, entry.score));
        md.push_str(&format!("{} · **{}**\n\n", entry.city, entry.bucket.label()));

        if entry.gated {
            md.push_str("Zero-out gate: parcel is in a flood zone and flood risk aversion is high.\n\n");
            return;
        }

        if entry.contributions.is_empty() {
            return;
        }

        md.push_str("| Factor | Contribution |\n|---|---|\n");
        for c in &entry.contributions {
            md.push_str(&format!("| {} | {:.0} |\n", c.label, c.contribution));
        }
        md.push('\n');
    }
}
