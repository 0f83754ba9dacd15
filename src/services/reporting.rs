use std::fmt;

use crate::models::Analysis;

/// Human-readable summary of one analysis.
pub struct AnalysisSummary<'a>(pub &'a Analysis);

impl fmt::Display for AnalysisSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let ctx = &analysis.market_context;
        let tech = &analysis.technical_analysis;
        let decision = &analysis.decision;

        writeln!(f, "\n=== Analysis Summary ===")?;
        writeln!(f, "Symbol: {}", analysis.symbol)?;
        writeln!(f, "Analyzed: {}", analysis.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "Observations: {}", analysis.market_data.len())?;
        writeln!(f, "Market Trend: {}", ctx.trend)?;
        writeln!(f, "Volume Profile: {}", ctx.volume_profile)?;
        if !ctx.support_levels.is_empty() {
            writeln!(f, "Support: {}", join_levels(&ctx.support_levels))?;
        }
        if !ctx.resistance_levels.is_empty() {
            writeln!(f, "Resistance: {}", join_levels(&ctx.resistance_levels))?;
        }
        if !ctx.patterns.is_empty() {
            writeln!(f, "Patterns: {}", ctx.patterns.join(", "))?;
        }

        writeln!(f, "\nTechnical Indicators:")?;
        writeln!(f, "RSI: {:.2}", tech.rsi)?;
        writeln!(f, "MACD: {:.2}", tech.macd)?;
        writeln!(f, "SMA 20: {:.2}", tech.sma_20)?;
        writeln!(f, "Volume Trend: {:.2}%", tech.volume_trend * 100.0)?;

        writeln!(f, "\nDecision:")?;
        writeln!(f, "Action: {}", decision.action)?;
        writeln!(f, "Confidence: {:.2}%", decision.confidence * 100.0)?;
        writeln!(f, "Risk Score: {:.2}%", decision.risk_score * 100.0)?;
        writeln!(f, "Reasoning: {}", decision.reasoning)?;
        if analysis.memory_context.is_some() {
            writeln!(f, "(previous analysis for this symbol was taken into account)")?;
        }
        Ok(())
    }
}

pub fn render_summary(analysis: &Analysis) -> String {
    AnalysisSummary(analysis).to_string()
}

pub fn print_analysis_summary(analysis: &Analysis) {
    println!("{}", AnalysisSummary(analysis));
}

fn join_levels(levels: &[f64]) -> String {
    levels
        .iter()
        .map(|l| format!("{:.2}", l))
        .collect::<Vec<_>>()
        .join(", ")
}
