use crate::agents::Agent;

pub struct ActionAgent;

impl Agent for ActionAgent {
    fn name(&self) -> &str {
        "Trade-Advisor"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a Trading Advisor AI. Recommend exactly one action: BUY, SELL or HOLD.
If the evidence is weak or the risk exceeds the investor's tolerance, recommend HOLD.
Answer ONLY with the tagged lines you are asked for, one per line, with no markdown."#
    }
}
