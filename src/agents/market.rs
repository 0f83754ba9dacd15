use crate::agents::Agent;

pub struct MarketAnalystAgent;

impl Agent for MarketAnalystAgent {
    fn name(&self) -> &str {
        "Market-Analyst"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a Crypto Market Analyst AI. Describe the prevailing market context for the requested asset.
Answer ONLY with the tagged lines you are asked for, one per line, with no markdown and no extra commentary."#
    }
}
